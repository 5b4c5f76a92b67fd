//! Group-by primitive behind every chart table.
//!
//! Rows are keyed, sorted by natural key order and folded run by run, so the
//! output is ordered like a sorted group-by and floats can serve as keys.

use crate::dataset::SalesRecord;
use crate::report::chart::{compare_keys, AggregateRow, AggregateTable, GroupField, KeyValue, MetricField, Reduction};
use log::debug;

/// Group records and reduce one numeric column per group
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Rows to aggregate (already filtered by the caller)
/// * `keys` - Grouping columns, outermost first
/// * `metric` - Column to reduce
/// * `reduction` - Mean or sum
///
/// # Returns
/// Table with one row per distinct key, in natural key order. An empty
/// input yields an empty table.
pub fn group_by<'a, I>(
    records: I,
    keys: &[GroupField],
    metric: MetricField,
    reduction: Reduction,
) -> AggregateTable
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut keyed: Vec<(Vec<KeyValue>, f64)> = records
        .into_iter()
        .map(|record| {
            let key = keys.iter().map(|field| field.key_of(record)).collect();
            (key, metric.value_of(record))
        })
        .collect();

    // Stable, so values within a group keep input order
    keyed.sort_by(|a, b| compare_keys(&a.0, &b.0));

    let mut rows = Vec::new();
    let mut current: Option<Group> = None;

    for (key, value) in keyed {
        let same_group = current
            .as_ref()
            .is_some_and(|group| compare_keys(&group.key, &key).is_eq());

        if same_group {
            if let Some(group) = current.as_mut() {
                group.add(value);
            }
        } else if let Some(done) = current.replace(Group::start(key, value)) {
            rows.push(done.finish(reduction));
        }
    }

    if let Some(done) = current {
        rows.push(done.finish(reduction));
    }

    debug!(
        "Grouped by [{}]: {} group(s) of {} {}",
        keys.iter().map(GroupField::column).collect::<Vec<_>>().join(", "),
        rows.len(),
        metric.column(),
        match reduction {
            Reduction::Mean => "mean",
            Reduction::Sum => "sum",
        }
    );

    AggregateTable {
        group_by: keys.to_vec(),
        metric,
        reduction,
        rows,
    }
}

/// Running totals for one key
struct Group {
    key: Vec<KeyValue>,
    total: f64,
    count: usize,
}

impl Group {
    fn start(key: Vec<KeyValue>, value: f64) -> Self {
        Self { key, total: value, count: 1 }
    }

    fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    fn finish(self, reduction: Reduction) -> AggregateRow {
        let value = match reduction {
            Reduction::Sum => self.total,
            // A group always has at least one member
            Reduction::Mean => self.total / self.count as f64,
        };

        AggregateRow { key: self.key, value }
    }
}
