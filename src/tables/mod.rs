// src/tables/mod.rs

pub mod data;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One row of a compiled-in table: a header row or a data row.
pub type Row = &'static [&'static str];

/// A compiled-in table. Row 0 is the header, rows 1.. are data aligned with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub rows: &'static [Row],
}

impl Table {
    pub const fn new(name: &'static str, rows: &'static [Row]) -> Self {
        Self { name, rows }
    }

    /// Column names, or `None` for a table with no rows at all.
    pub fn header(&self) -> Option<Row> {
        self.rows.first().copied()
    }

    /// Everything after the header row.
    pub fn data_rows(&self) -> &'static [Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            name: self.name.to_string(),
            columns: self
                .header()
                .unwrap_or(&[])
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: self.data_rows().len(),
        }
    }
}

/// Serializable overview of a table, used by the CLI listing.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
pub struct TableSummary {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Ordered, read-only list of tables. Lookup order is registration order.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// The tables compiled into this crate.
    pub fn builtin() -> Self {
        Self::new(vec![
            Table::new("pcs", data::pcs::ROWS),
            Table::new("gcs", data::gcs::ROWS),
            Table::new("ellipsoid", data::ellipsoid::ROWS),
            Table::new("prime_meridian", data::prime_meridian::ROWS),
            Table::new("datum", data::datum::ROWS),
            Table::new("unit_of_measure", data::unit_of_measure::ROWS),
            Table::new("projop_wparm", data::projop_wparm::ROWS),
        ])
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

static REGISTRY: Lazy<TableRegistry> = Lazy::new(TableRegistry::builtin);

/// Process-wide registry of the built-in tables, built on first use.
pub fn registry() -> &'static TableRegistry {
    &REGISTRY
}
