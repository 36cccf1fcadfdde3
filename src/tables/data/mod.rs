//! EPSG parameter tables compiled into the binary.
//!
//! These are a small subset of the EPSG dataset, a few common systems per
//! table (7 to 16 data rows each), not the full EPSG 6.2.2 export. Codes
//! that are not listed here resolve to not-found.
//!
//! Each module exposes `ROWS`: the header row followed by data rows, every
//! data row carrying exactly one field per header column. Empty strings stand
//! for cells that are blank in the EPSG export.

pub mod datum;
pub mod ellipsoid;
pub mod gcs;
pub mod pcs;
pub mod prime_meridian;
pub mod projop_wparm;
pub mod unit_of_measure;
