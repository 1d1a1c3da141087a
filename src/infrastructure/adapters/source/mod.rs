//! Source Adapters - 输入文件读取

mod csv_weight_source;
mod file_text_source;

pub use csv_weight_source::{parse_weight_table, CsvWeightSource};
pub use file_text_source::FileTextSource;
