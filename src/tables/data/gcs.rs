use crate::tables::Row;

/// Geographic coordinate reference systems.
pub static ROWS: &[Row] = &[
    &[
        "COORD_REF_SYS_CODE",
        "COORD_REF_SYS_NAME",
        "DATUM_CODE",
        "DATUM_NAME",
        "GREENWICH_DATUM",
        "UOM_CODE",
        "ELLIPSOID_CODE",
        "PRIME_MERIDIAN_CODE",
    ],
    &["4230", "ED50", "6230", "European Datum 1950", "6230", "9122", "7022", "8901"],
    &["4258", "ETRS89", "6258", "European Terrestrial Reference System 1989", "6258", "9122", "7019", "8901"],
    &["4267", "NAD27", "6267", "North American Datum 1927", "6267", "9122", "7008", "8901"],
    &["4269", "NAD83", "6269", "North American Datum 1983", "6269", "9122", "7019", "8901"],
    &["4277", "OSGB 1936", "6277", "OSGB 1936", "6277", "9122", "7001", "8901"],
    &["4284", "Pulkovo 1942", "6284", "Pulkovo 1942", "6284", "9122", "7024", "8901"],
    &["4314", "DHDN", "6314", "Deutsches Hauptdreiecksnetz", "6314", "9122", "7004", "8901"],
    &["4322", "WGS 72", "6322", "World Geodetic System 1972", "6322", "9122", "7043", "8901"],
    &["4326", "WGS 84", "6326", "World Geodetic System 1984", "6326", "9122", "7030", "8901"],
    &["4807", "NTF (Paris)", "6807", "Nouvelle Triangulation Francaise (Paris)", "6275", "9105", "7011", "8903"],
];
