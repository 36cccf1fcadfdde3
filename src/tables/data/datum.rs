use crate::tables::Row;

pub static ROWS: &[Row] = &[
    &[
        "DATUM_CODE",
        "DATUM_NAME",
        "DATUM_TYPE",
        "ELLIPSOID_CODE",
        "PRIME_MERIDIAN_CODE",
    ],
    &["6230", "European Datum 1950", "geodetic", "7022", "8901"],
    &["6258", "European Terrestrial Reference System 1989", "geodetic", "7019", "8901"],
    &["6267", "North American Datum 1927", "geodetic", "7008", "8901"],
    &["6269", "North American Datum 1983", "geodetic", "7019", "8901"],
    &["6275", "Nouvelle Triangulation Francaise", "geodetic", "7011", "8901"],
    &["6277", "OSGB 1936", "geodetic", "7001", "8901"],
    &["6284", "Pulkovo 1942", "geodetic", "7024", "8901"],
    &["6314", "Deutsches Hauptdreiecksnetz", "geodetic", "7004", "8901"],
    &["6322", "World Geodetic System 1972", "geodetic", "7043", "8901"],
    &["6326", "World Geodetic System 1984", "geodetic", "7030", "8901"],
    &["6807", "Nouvelle Triangulation Francaise (Paris)", "geodetic", "7011", "8903"],
];
