//! EPSG parameter tables compiled into the binary, with a CSV-style lookup API:
//! pick a table by logical filename (`"pcs.csv"`), find a row by key column,
//! read a target column from it.

pub mod compat;
pub mod lookup;
pub mod tables;

pub use compat::{normalize_filename, parse_raw_line, release_file, set_filename_hook};
pub use lookup::{
    lookup_field, parse_mode, resolve_column_index, resolve_field, resolve_field_by_mode,
    resolve_table_index, scan_row_by_key, scan_row_by_mode, CompareCriteria,
};
pub use tables::{registry, Row, Table, TableRegistry, TableSummary};
