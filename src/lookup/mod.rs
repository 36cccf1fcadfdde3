// src/lookup/mod.rs

pub mod compare;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, instrument, trace};

use crate::tables::{registry, Row, Table, TableRegistry};
pub use compare::{atoi, compare, compare_opt, parse_mode, CompareCriteria};

/// Length of the suffix (".csv") ignored when matching a filename to a table.
pub const SUFFIX_LEN: usize = 4;

/// `"pcs.csv"` → `Some("pcs")`. Names too short to carry a suffix give `None`.
pub fn strip_suffix(filename: &str) -> Option<&str> {
    let stem_len = filename.len().checked_sub(SUFFIX_LEN)?;
    filename.get(..stem_len)
}

impl TableRegistry {
    /// Index of the table whose name equals `filename` minus its suffix.
    pub fn resolve_table_index(&self, filename: &str) -> Option<usize> {
        let Some(stem) = strip_suffix(filename) else {
            debug!(filename, "filename shorter than its suffix");
            return None;
        };
        let found = self.tables().iter().position(|t| t.name == stem);
        if found.is_none() {
            debug!(filename, "no table registered under this name");
        }
        found
    }

    pub fn resolve_table(&self, filename: &str) -> Option<&Table> {
        self.resolve_table_index(filename)
            .and_then(|i| self.get(i))
    }

    /// Zero-based position of `column` in the header row, ignoring ASCII case.
    pub fn resolve_column_index(&self, filename: &str, column: &str) -> Option<usize> {
        let table = self.resolve_table(filename)?;
        header_position(table, column)
    }

    /// First data row whose `key_column` cell matches `value` under `criteria`.
    #[instrument(level = "debug", skip(self))]
    pub fn scan_row_by_key(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        criteria: CompareCriteria,
    ) -> Option<Row> {
        let table = self.resolve_table(filename)?;
        let Some(col) = header_position(table, key_column) else {
            debug!(table = table.name, "key column not in header");
            return None;
        };
        scan_rows(table, col, value, Some(criteria))
    }

    /// [`TableRegistry::scan_row_by_key`] with the mode given by name or code.
    /// An unrecognized mode matches no row.
    pub fn scan_row_by_mode(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        mode: &str,
    ) -> Option<Row> {
        let table = self.resolve_table(filename)?;
        let col = header_position(table, key_column)?;
        scan_rows(table, col, value, parse_mode(mode))
    }

    /// Target cell of the matched row, with the failing step named on error.
    pub fn lookup_field(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        criteria: CompareCriteria,
        target_column: &str,
    ) -> Result<&'static str> {
        self.lookup_field_opt(filename, key_column, value, Some(criteria), target_column)
    }

    fn lookup_field_opt(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        criteria: Option<CompareCriteria>,
        target_column: &str,
    ) -> Result<&'static str> {
        let table = self
            .resolve_table(filename)
            .ok_or_else(|| anyhow!("no table registered for `{}`", filename))?;
        let key_idx = header_position(table, key_column)
            .ok_or_else(|| anyhow!("table `{}` has no column `{}`", table.name, key_column))?;
        let row = scan_rows(table, key_idx, value, criteria).with_context(|| {
            format!(
                "no row in `{}` with {} = {} ({})",
                table.name,
                key_column,
                value,
                criteria.map_or("unknown mode", |c| c.as_str())
            )
        })?;
        let target_idx = header_position(table, target_column).ok_or_else(|| {
            anyhow!("table `{}` has no column `{}`", table.name, target_column)
        })?;
        row.get(target_idx).copied().ok_or_else(|| {
            anyhow!(
                "row in `{}` has no cell for column `{}`",
                table.name,
                target_column
            )
        })
    }

    /// Like [`TableRegistry::lookup_field`], but any failure yields `""`.
    /// Rows are matched with the caller's `criteria`, not always as integers.
    pub fn resolve_field(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        criteria: CompareCriteria,
        target_column: &str,
    ) -> &'static str {
        match self.lookup_field(filename, key_column, value, criteria, target_column) {
            Ok(v) => v,
            Err(e) => {
                debug!("field lookup failed: {:#}", e);
                ""
            }
        }
    }

    /// [`TableRegistry::resolve_field`] with the mode given by name or code.
    /// An unrecognized mode matches no row, so the result is `""`.
    pub fn resolve_field_by_mode(
        &self,
        filename: &str,
        key_column: &str,
        value: &str,
        mode: &str,
        target_column: &str,
    ) -> &'static str {
        self.lookup_field_opt(filename, key_column, value, parse_mode(mode), target_column)
            .unwrap_or_else(|e| {
                debug!("field lookup failed: {:#}", e);
                ""
            })
    }
}

fn header_position(table: &Table, column: &str) -> Option<usize> {
    table
        .header()?
        .iter()
        .position(|name| compare(name, column, CompareCriteria::ApproximateString))
}

fn scan_rows(
    table: &Table,
    col: usize,
    value: &str,
    criteria: Option<CompareCriteria>,
) -> Option<Row> {
    for (i, row) in table.data_rows().iter().copied().enumerate() {
        // a row too short for the key column ends the scan
        let Some(cell) = row.get(col) else {
            debug!(table = table.name, row = i + 1, "short row, stopping scan");
            return None;
        };
        if compare_opt(cell, value, criteria) {
            trace!(table = table.name, row = i + 1, "matched");
            return Some(row);
        }
    }
    None
}

// ─── process-wide registry shortcuts ──────────────────────────────────

/// Index of the built-in table for `filename`, e.g. `"datum.csv"`.
pub fn resolve_table_index(filename: &str) -> Option<usize> {
    registry().resolve_table_index(filename)
}

pub fn resolve_column_index(filename: &str, column: &str) -> Option<usize> {
    registry().resolve_column_index(filename, column)
}

pub fn scan_row_by_key(
    filename: &str,
    key_column: &str,
    value: &str,
    criteria: CompareCriteria,
) -> Option<Row> {
    registry().scan_row_by_key(filename, key_column, value, criteria)
}

pub fn lookup_field(
    filename: &str,
    key_column: &str,
    value: &str,
    criteria: CompareCriteria,
    target_column: &str,
) -> Result<&'static str> {
    registry().lookup_field(filename, key_column, value, criteria, target_column)
}

/// Value of `target_column` in the first row of `filename` whose `key_column`
/// matches `value` under `criteria`; `""` when anything along the way is missing.
pub fn resolve_field(
    filename: &str,
    key_column: &str,
    value: &str,
    criteria: CompareCriteria,
    target_column: &str,
) -> &'static str {
    registry().resolve_field(filename, key_column, value, criteria, target_column)
}

pub fn scan_row_by_mode(filename: &str, key_column: &str, value: &str, mode: &str) -> Option<Row> {
    registry().scan_row_by_mode(filename, key_column, value, mode)
}

pub fn resolve_field_by_mode(
    filename: &str,
    key_column: &str,
    value: &str,
    mode: &str,
    target_column: &str,
) -> &'static str {
    registry().resolve_field_by_mode(filename, key_column, value, mode, target_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,epsg_incode::lookup=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn fixture() -> TableRegistry {
        TableRegistry::new(vec![
            Table::new(
                "pcs",
                &[&["PCS_CODE", "PCS_NAME"], &["20500", "Unnamed"], &["07", "Seven"]],
            ),
            Table::new(
                "short",
                &[
                    &["CODE", "NAME", "EXTRA"],
                    &["1", "one", "x"],
                    &["2"],
                    &["3", "three", "z"],
                ],
            ),
            Table::new("empty", &[]),
            Table::new("headeronly", &[&["CODE"]]),
        ])
    }

    #[test]
    fn table_names_resolve_with_any_suffix() {
        init_test_logging();
        let reg = registry();
        for (i, table) in reg.tables().iter().enumerate() {
            for suffix in [".csv", ".CSV", ".txt", "_xyz"] {
                let filename = format!("{}{}", table.name, suffix);
                assert_eq!(reg.resolve_table_index(&filename), Some(i), "{}", filename);
            }
        }
    }

    #[test]
    fn unknown_and_short_names_do_not_resolve() {
        init_test_logging();
        for name in ["", "p", "pcs", ".csv", "horiz_cs.csv", "pc.csv", "pcsx.csv", "PCS.csv"] {
            assert_eq!(resolve_table_index(name), None, "{:?}", name);
        }
        // cut inside a multi-byte character
        assert_eq!(resolve_table_index("pcsé..."), None);
    }

    #[test]
    fn column_index_ignores_case() {
        assert_eq!(resolve_column_index("pcs.csv", "PCS_NAME"), Some(1));
        assert_eq!(resolve_column_index("pcs.csv", "pcs_name"), Some(1));
        assert_eq!(resolve_column_index("pcs.csv", "Pcs_Code"), Some(0));
        assert_eq!(resolve_column_index("pcs.csv", "NOPE"), None);
        assert_eq!(resolve_column_index("nope.csv", "PCS_NAME"), None);
        assert_eq!(
            resolve_column_index("ellipsoid.csv", "inv_flattening"),
            Some(4)
        );
    }

    #[test]
    fn column_index_without_header() {
        let reg = fixture();
        assert_eq!(reg.resolve_column_index("empty.csv", "CODE"), None);
        assert_eq!(reg.resolve_column_index("headeronly.csv", "code"), Some(0));
    }

    #[test]
    fn builtin_pcs_lookup() {
        init_test_logging();
        assert_eq!(
            resolve_field("pcs.csv", "PCS_CODE", "20500", CompareCriteria::Integer, "PCS_NAME"),
            "Unnamed"
        );
        assert_eq!(
            resolve_field("pcs.csv", "PCS_CODE", "99999", CompareCriteria::Integer, "PCS_NAME"),
            ""
        );
        assert_eq!(
            resolve_field(
                "pcs.csv",
                "PCS_CODE",
                "27700",
                CompareCriteria::Integer,
                "SOURCE_GEOGCRS_CODE"
            ),
            "4277"
        );
    }

    #[test]
    fn chained_lookups_across_tables() {
        let gcs = "4326";
        let datum = resolve_field("gcs.csv", "COORD_REF_SYS_CODE", gcs, CompareCriteria::Integer, "DATUM_CODE");
        assert_eq!(datum, "6326");
        let ellipsoid = resolve_field("datum.csv", "DATUM_CODE", datum, CompareCriteria::Integer, "ELLIPSOID_CODE");
        assert_eq!(ellipsoid, "7030");
        assert_eq!(
            resolve_field("ellipsoid.csv", "ELLIPSOID_CODE", ellipsoid, CompareCriteria::Integer, "INV_FLATTENING"),
            "298.257223563"
        );
        assert_eq!(
            resolve_field("prime_meridian.csv", "PRIME_MERIDIAN_NAME", "paris", CompareCriteria::ApproximateString, "GREENWICH_LONGITUDE"),
            "2.5969213"
        );
        assert_eq!(
            resolve_field("unit_of_measure.csv", "UOM_CODE", "9003", CompareCriteria::Integer, "FACTOR_C"),
            "39.37"
        );
        assert_eq!(
            resolve_field("projop_wparm.csv", "COORD_OP_CODE", "19916", CompareCriteria::Integer, "PARAMETER_VALUE_5"),
            "-100000"
        );
    }

    #[test]
    fn integer_mode_is_numeric() {
        let reg = fixture();
        let row = reg
            .scan_row_by_key("pcs.csv", "PCS_CODE", "7", CompareCriteria::Integer)
            .unwrap();
        assert_eq!(row, &["07", "Seven"]);
        let row = reg
            .scan_row_by_key("pcs.csv", "PCS_CODE", "7x", CompareCriteria::Integer)
            .unwrap();
        assert_eq!(row[1], "Seven");
        assert!(reg
            .scan_row_by_key("pcs.csv", "PCS_CODE", "7", CompareCriteria::ExactString)
            .is_none());
    }

    #[test]
    fn string_modes_scan_identically() {
        let reg = fixture();
        for value in ["07", "7", "20500", "unnamed", "x", ""] {
            for key in ["PCS_CODE", "PCS_NAME"] {
                assert_eq!(
                    reg.scan_row_by_key("pcs.csv", key, value, CompareCriteria::ExactString),
                    reg.scan_row_by_key("pcs.csv", key, value, CompareCriteria::ApproximateString),
                    "{} = {:?}",
                    key,
                    value
                );
            }
        }
        assert_eq!(
            reg.scan_row_by_key("pcs.csv", "pcs_name", "UNNAMED", CompareCriteria::ExactString),
            Some(&["20500", "Unnamed"][..])
        );
    }

    #[test]
    fn short_row_ends_scan() {
        let reg = fixture();
        assert_eq!(
            reg.scan_row_by_key("short.csv", "CODE", "1", CompareCriteria::Integer),
            Some(&["1", "one", "x"][..])
        );
        // row 2 has a key cell, so it can still match
        assert_eq!(
            reg.scan_row_by_key("short.csv", "CODE", "2", CompareCriteria::Integer),
            Some(&["2"][..])
        );
        // row 2 is too short for NAME, so "three" is never reached
        assert!(reg
            .scan_row_by_key("short.csv", "NAME", "three", CompareCriteria::ExactString)
            .is_none());
        // matched row missing the target cell
        assert_eq!(
            reg.resolve_field("short.csv", "CODE", "2", CompareCriteria::Integer, "NAME"),
            ""
        );
        assert!(reg
            .lookup_field("short.csv", "CODE", "2", CompareCriteria::Integer, "NAME")
            .is_err());
    }

    #[test]
    fn scan_failures() {
        let reg = fixture();
        assert!(reg
            .scan_row_by_key("nope.csv", "PCS_CODE", "20500", CompareCriteria::Integer)
            .is_none());
        assert!(reg
            .scan_row_by_key("pcs.csv", "NOPE", "20500", CompareCriteria::Integer)
            .is_none());
        assert!(reg
            .scan_row_by_key("empty.csv", "CODE", "1", CompareCriteria::Integer)
            .is_none());
        assert!(reg
            .scan_row_by_key("headeronly.csv", "CODE", "1", CompareCriteria::Integer)
            .is_none());
    }

    #[test]
    fn resolve_field_degrades_to_empty() {
        let reg = fixture();
        let cases = [
            ("nope.csv", "PCS_CODE", "20500", "PCS_NAME"),
            ("pcs.csv", "NOPE", "20500", "PCS_NAME"),
            ("pcs.csv", "PCS_CODE", "99999", "PCS_NAME"),
            ("pcs.csv", "PCS_CODE", "20500", "NOPE"),
            ("abc", "PCS_CODE", "20500", "PCS_NAME"),
        ];
        for (file, key, value, target) in cases {
            assert_eq!(
                reg.resolve_field(file, key, value, CompareCriteria::Integer, target),
                ""
            );
            assert!(reg
                .lookup_field(file, key, value, CompareCriteria::Integer, target)
                .is_err());
        }
    }

    #[test]
    fn lookup_errors_name_the_step() {
        let reg = fixture();
        let err = reg
            .lookup_field("nope.csv", "PCS_CODE", "1", CompareCriteria::Integer, "PCS_NAME")
            .unwrap_err();
        assert!(err.to_string().contains("no table registered"));
        let err = reg
            .lookup_field("pcs.csv", "PCS_CODE", "1", CompareCriteria::Integer, "PCS_NAME")
            .unwrap_err();
        assert!(err.to_string().contains("no row in `pcs`"));
        let err = reg
            .lookup_field("pcs.csv", "PCS_CODE", "20500", CompareCriteria::Integer, "NOPE")
            .unwrap_err();
        assert!(err.to_string().contains("no column `NOPE`"));
    }

    #[test]
    fn resolve_field_honours_mode() {
        let reg = fixture();
        assert_eq!(
            reg.resolve_field("pcs.csv", "PCS_CODE", "7", CompareCriteria::Integer, "PCS_NAME"),
            "Seven"
        );
        // "7" is not the string "07", so string modes find nothing
        for mode in [CompareCriteria::ExactString, CompareCriteria::ApproximateString] {
            assert_eq!(
                reg.resolve_field("pcs.csv", "PCS_CODE", "7", mode, "PCS_NAME"),
                ""
            );
        }
        assert_eq!(
            reg.resolve_field("pcs.csv", "PCS_NAME", "unnamed", CompareCriteria::ExactString, "PCS_CODE"),
            "20500"
        );
    }

    #[test]
    fn mode_strings_select_criteria() {
        let reg = fixture();
        assert_eq!(
            reg.resolve_field_by_mode("pcs.csv", "PCS_CODE", "7", "2", "PCS_NAME"),
            "Seven"
        );
        assert_eq!(
            reg.resolve_field_by_mode("pcs.csv", "PCS_CODE", "7", "integer", "PCS_NAME"),
            "Seven"
        );
        assert_eq!(
            reg.resolve_field_by_mode("pcs.csv", "PCS_CODE", "07", "exact", "PCS_NAME"),
            "Seven"
        );
        assert_eq!(
            reg.scan_row_by_mode("pcs.csv", "PCS_NAME", "UNNAMED", "1"),
            Some(&["20500", "Unnamed"][..])
        );
    }

    #[test]
    fn unknown_mode_matches_nothing() {
        let reg = fixture();
        for mode in ["9", "-1", "fuzzy", ""] {
            assert_eq!(
                reg.resolve_field_by_mode("pcs.csv", "PCS_CODE", "20500", mode, "PCS_NAME"),
                "",
                "{:?}",
                mode
            );
            assert!(reg
                .scan_row_by_mode("pcs.csv", "PCS_CODE", "20500", mode)
                .is_none());
        }
        assert_eq!(
            resolve_field_by_mode("pcs.csv", "PCS_CODE", "20500", "7", "PCS_NAME"),
            ""
        );
    }

    #[test]
    fn first_match_wins() {
        let reg = TableRegistry::new(vec![
            Table::new("dup", &[&["K", "V"], &["1", "first"], &["01", "second"]]),
            Table::new("dup", &[&["K", "V"], &["1", "other table"]]),
        ]);
        assert_eq!(reg.resolve_table_index("dup.csv"), Some(0));
        assert_eq!(
            reg.resolve_field("dup.csv", "K", "1", CompareCriteria::Integer, "V"),
            "first"
        );
    }

    #[test]
    fn concurrent_readers() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    resolve_field("pcs.csv", "PCS_CODE", "32631", CompareCriteria::Integer, "PCS_NAME")
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "WGS 84 / UTM zone 31N");
        }
    }
}
