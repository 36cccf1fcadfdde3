use crate::tables::Row;

pub static ROWS: &[Row] = &[
    &[
        "ELLIPSOID_CODE",
        "ELLIPSOID_NAME",
        "SEMI_MAJOR_AXIS",
        "UOM_CODE",
        "INV_FLATTENING",
        "SEMI_MINOR_AXIS",
    ],
    &["7001", "Airy 1830", "6377563.396", "9001", "299.3249646", ""],
    &["7004", "Bessel 1841", "6377397.155", "9001", "299.1528128", ""],
    &["7008", "Clarke 1866", "6378206.4", "9001", "", "6356583.8"],
    &["7011", "Clarke 1880 (IGN)", "6378249.2", "9001", "", "6356515"],
    &["7019", "GRS 1980", "6378137", "9001", "298.257222101", ""],
    &["7022", "International 1924", "6378388", "9001", "297", ""],
    &["7024", "Krassowsky 1940", "6378245", "9001", "298.3", ""],
    &["7030", "WGS 84", "6378137", "9001", "298.257223563", ""],
    &["7043", "WGS 72", "6378135", "9001", "298.26", ""],
];
