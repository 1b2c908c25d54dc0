//! VSS datatype → IDL type mapping.

/// IDL type of a signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdlType {
    /// IDL primitive keyword of the (element) type.
    pub keyword: &'static str,
    /// The source datatype was an array (`T[]` / `T[N]`) and maps to `sequence<T>`.
    pub is_sequence: bool,
}

impl IdlType {
    /// Render the declaration type, wrapping `base` in `sequence<>` for arrays.
    ///
    /// `base` is normally [`IdlType::keyword`], but may be an enum type that
    /// replaces the primitive.
    pub fn declare(&self, base: &str) -> String {
        if self.is_sequence {
            format!("sequence<{base}>")
        } else {
            base.to_string()
        }
    }
}

/// Map a VSS primitive datatype to its IDL keyword.
pub fn map_primitive(datatype: &str) -> Option<&'static str> {
    let keyword = match datatype {
        "uint8" | "int8" => "octet",
        "uint16" => "unsigned short",
        "int16" => "short",
        "uint32" => "unsigned long",
        "int32" => "long",
        "uint64" => "unsigned long long",
        "int64" => "long long",
        "boolean" => "boolean",
        "float" => "float",
        "double" => "double",
        "string" => "string",
        _ => return None,
    };
    Some(keyword)
}

/// Split a datatype at its first `[` into the element type and whether an
/// array marker was present.
pub fn split_array(datatype: &str) -> (&str, bool) {
    match datatype.split_once('[') {
        Some((base, _)) => (base, true),
        None => (datatype, false),
    }
}

/// Map a VSS datatype, including array forms, to an [`IdlType`].
///
/// Returns `None` when the (element) type has no IDL mapping.
pub fn map_datatype(datatype: &str) -> Option<IdlType> {
    let (base, is_sequence) = split_array(datatype);
    map_primitive(base).map(|keyword| IdlType {
        keyword,
        is_sequence,
    })
}

/// Whether allowed values of this datatype can become an IDL enum.
pub fn is_string_like(datatype: &str) -> bool {
    split_array(datatype).0 == "string"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_table() {
        let cases = [
            ("uint8", "octet"),
            ("int8", "octet"),
            ("uint16", "unsigned short"),
            ("int16", "short"),
            ("uint32", "unsigned long"),
            ("int32", "long"),
            ("uint64", "unsigned long long"),
            ("int64", "long long"),
            ("boolean", "boolean"),
            ("float", "float"),
            ("double", "double"),
            ("string", "string"),
        ];
        for (vss, idl) in cases {
            assert_eq!(
                map_datatype(vss),
                Some(IdlType {
                    keyword: idl,
                    is_sequence: false
                }),
                "{vss}"
            );
        }
    }

    #[test]
    fn arrays_become_sequences() {
        let ty = map_datatype("uint16[]").unwrap();
        assert_eq!(ty.keyword, "unsigned short");
        assert!(ty.is_sequence);
        assert_eq!(ty.declare(ty.keyword), "sequence<unsigned short>");

        let ty = map_datatype("float[3]").unwrap();
        assert_eq!(ty.declare(ty.keyword), "sequence<float>");
    }

    #[test]
    fn unknown_types_have_no_mapping() {
        assert_eq!(map_datatype("Types.Position"), None);
        assert_eq!(map_datatype("Types.Position[]"), None);
        assert_eq!(map_datatype("char"), None);
        assert_eq!(map_datatype(""), None);
    }

    #[test]
    fn string_like() {
        assert!(is_string_like("string"));
        assert!(is_string_like("string[]"));
        assert!(!is_string_like("uint8"));
        assert!(!is_string_like("strings"));
    }
}
