use crate::tables::Row;

/// Linear, angular and scale units. `FACTOR_B / FACTOR_C` converts to the target unit.
pub static ROWS: &[Row] = &[
    &[
        "UOM_CODE",
        "UNIT_OF_MEAS_NAME",
        "UNIT_OF_MEAS_TYPE",
        "TARGET_UOM_CODE",
        "FACTOR_B",
        "FACTOR_C",
    ],
    &["9001", "metre", "length", "9001", "1", "1"],
    &["9002", "foot", "length", "9001", "0.3048", "1"],
    &["9003", "US survey foot", "length", "9001", "12", "39.37"],
    &["9030", "nautical mile", "length", "9001", "1852", "1"],
    &["9036", "kilometre", "length", "9001", "1000", "1"],
    &["9101", "radian", "angle", "9101", "1", "1"],
    &["9102", "degree", "angle", "9101", "3.14159265358979", "180"],
    &["9105", "grad", "angle", "9101", "3.14159265358979", "200"],
    &["9110", "sexagesimal DMS", "angle", "9102", "", ""],
    &["9122", "degree (supplier to define representation)", "angle", "9101", "3.14159265358979", "180"],
    &["9201", "unity", "scale", "9201", "1", "1"],
];
