#![allow(dead_code)]

use auto_sales_dashboard::dataset::{read_csv, Dataset};
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "Year,Month,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate,Recession";

/// Small dataset spanning recession and normal rows across three years
pub const SAMPLE_ROWS: &str = "\
1980,Jan,Supperminicar,100,1000,6.0,1
1980,Feb,Sports,40,800,6.0,1
1980,Mar,Supperminicar,120,900,5.5,0
1981,Jan,Executivecar,60,1200,7.5,1
1981,Feb,Supperminicar,80,700,7.5,1
1981,Mar,Sports,30,600,5.0,0
2020,Jan,Car,100,500,6.0,0
2020,Jan,Car,50,500,6.0,1
";

pub fn sample_csv() -> String {
    format!("{}\n{}", HEADER, SAMPLE_ROWS)
}

pub fn sample_dataset() -> Dataset {
    read_csv(sample_csv().as_bytes()).unwrap()
}

pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
