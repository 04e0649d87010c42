//! Raw values produced by the parsers, before any validation.

mod table_rows;

pub use table_rows::TableRows;
