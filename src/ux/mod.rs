pub mod table;

pub use table::TextTable;
