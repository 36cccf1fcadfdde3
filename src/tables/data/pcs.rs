use crate::tables::Row;

/// Projected coordinate reference systems.
pub static ROWS: &[Row] = &[
    &[
        "PCS_CODE",
        "PCS_NAME",
        "UOM_CODE",
        "SOURCE_GEOGCRS_CODE",
        "COORD_OP_CODE",
        "COORD_OP_METHOD_CODE",
    ],
    &["20500", "Unnamed", "", "", "", ""],
    &["23031", "ED50 / UTM zone 31N", "9001", "4230", "16031", "9807"],
    &["23032", "ED50 / UTM zone 32N", "9001", "4230", "16032", "9807"],
    &["25832", "ETRS89 / UTM zone 32N", "9001", "4258", "16032", "9807"],
    &["25833", "ETRS89 / UTM zone 33N", "9001", "4258", "16033", "9807"],
    &["26717", "NAD27 / UTM zone 17N", "9001", "4267", "16017", "9807"],
    &["26911", "NAD83 / UTM zone 11N", "9001", "4269", "16011", "9807"],
    &["26917", "NAD83 / UTM zone 17N", "9001", "4269", "16017", "9807"],
    &["27700", "OSGB 1936 / British National Grid", "9001", "4277", "19916", "9807"],
    &["31467", "DHDN / 3-degree Gauss-Kruger zone 3", "9001", "4314", "16263", "9807"],
    &["32211", "WGS 72 / UTM zone 11N", "9001", "4322", "16011", "9807"],
    &["32611", "WGS 84 / UTM zone 11N", "9001", "4326", "16011", "9807"],
    &["32617", "WGS 84 / UTM zone 17N", "9001", "4326", "16017", "9807"],
    &["32631", "WGS 84 / UTM zone 31N", "9001", "4326", "16031", "9807"],
    &["32632", "WGS 84 / UTM zone 32N", "9001", "4326", "16032", "9807"],
    &["32633", "WGS 84 / UTM zone 33N", "9001", "4326", "16033", "9807"],
];
