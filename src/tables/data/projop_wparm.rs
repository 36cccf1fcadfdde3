use crate::tables::Row;

/// Map projections with up to five method parameters each.
pub static ROWS: &[Row] = &[
    &[
        "COORD_OP_CODE",
        "COORD_OP_NAME",
        "COORD_OP_METHOD_CODE",
        "PARAMETER_CODE_1",
        "PARAMETER_VALUE_1",
        "PARAMETER_UOM_1",
        "PARAMETER_CODE_2",
        "PARAMETER_VALUE_2",
        "PARAMETER_UOM_2",
        "PARAMETER_CODE_3",
        "PARAMETER_VALUE_3",
        "PARAMETER_UOM_3",
        "PARAMETER_CODE_4",
        "PARAMETER_VALUE_4",
        "PARAMETER_UOM_4",
        "PARAMETER_CODE_5",
        "PARAMETER_VALUE_5",
        "PARAMETER_UOM_5",
    ],
    &[
        "16011", "UTM zone 11N", "9807", "8801", "0", "9110", "8802", "-117", "9110", "8805",
        "0.9996", "9201", "8806", "500000", "9001", "8807", "0", "9001",
    ],
    &[
        "16017", "UTM zone 17N", "9807", "8801", "0", "9110", "8802", "-81", "9110", "8805",
        "0.9996", "9201", "8806", "500000", "9001", "8807", "0", "9001",
    ],
    &[
        "16031", "UTM zone 31N", "9807", "8801", "0", "9110", "8802", "3", "9110", "8805",
        "0.9996", "9201", "8806", "500000", "9001", "8807", "0", "9001",
    ],
    &[
        "16032", "UTM zone 32N", "9807", "8801", "0", "9110", "8802", "9", "9110", "8805",
        "0.9996", "9201", "8806", "500000", "9001", "8807", "0", "9001",
    ],
    &[
        "16033", "UTM zone 33N", "9807", "8801", "0", "9110", "8802", "15", "9110", "8805",
        "0.9996", "9201", "8806", "500000", "9001", "8807", "0", "9001",
    ],
    &[
        "16263", "3-degree Gauss-Kruger zone 3", "9807", "8801", "0", "9110", "8802", "9",
        "9110", "8805", "1", "9201", "8806", "3500000", "9001", "8807", "0", "9001",
    ],
    &[
        "19916", "British National Grid", "9807", "8801", "49", "9110", "8802", "-2", "9110",
        "8805", "0.9996012717", "9201", "8806", "400000", "9001", "8807", "-100000", "9001",
    ],
];
