use gotc_atom::{AtomId, gen_atoms, paste};

gen_atoms!(
    PREDECLARED_TYS,
    (BOOL, "bool"),
    (STRING, "string"),
    (INT8, "int8"),
    (INT16, "int16"),
    (INT32, "int32"),
    (INT64, "int64"),
    (UINT8, "uint8"),
    (UINT16, "uint16"),
    (UINT32, "uint32"),
    (UINT64, "uint64"),
    (FLOAT32, "float32"),
    (FLOAT64, "float64"),
    (BYTE, "byte"),
    (RUNE, "rune"),
    (ANY, "any"),
);
