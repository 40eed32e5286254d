pub mod rows;
pub mod writer;

pub use rows::to_rows;
pub use writer::CsvExporter;
