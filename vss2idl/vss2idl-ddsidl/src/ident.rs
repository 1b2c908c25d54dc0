//! Identifier sanitizing for IDL / C output.

/// C keywords.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Reserved words of OMG IDL 4.2, plus the IDL 4 integer type names.
const IDL_KEYWORDS: &[&str] = &[
    "abstract", "any", "alias", "attribute", "bitfield", "bitmask", "bitset", "boolean", "case",
    "char", "component", "connector", "const", "consumes", "context", "custom", "default",
    "double", "exception", "emits", "enum", "eventtype", "factory", "FALSE", "finder", "fixed",
    "float", "getraises", "home", "import", "in", "inout", "interface", "local", "long", "manages",
    "map", "mirrorport", "module", "multiple", "native", "Object", "octet", "oneway", "out",
    "primarykey", "private", "port", "porttype", "provides", "public", "publishes", "raises",
    "readonly", "setraises", "sequence", "short", "string", "struct", "supports", "switch", "TRUE",
    "truncatable", "typedef", "typeid", "typename", "typeprefix", "unsigned", "union", "uses",
    "ValueBase", "valuetype", "void", "wchar", "wstring", "int8", "uint8", "int16", "int32",
    "int64", "uint16", "uint32", "uint64",
];

/// Returns `true` if `name` collides, ignoring ASCII case, with a C keyword or
/// an IDL reserved word.
pub fn is_reserved(name: &str) -> bool {
    C_KEYWORDS
        .iter()
        .chain(IDL_KEYWORDS)
        .any(|kw| kw.eq_ignore_ascii_case(name))
}

/// Map a signal or branch name to an identifier that is safe to emit.
///
/// Reserved words get a leading underscore; the original spelling is kept.
pub fn sanitize_identifier(name: &str) -> String {
    if is_reserved(name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}
