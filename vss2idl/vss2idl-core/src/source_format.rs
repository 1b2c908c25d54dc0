use std::{fmt, path::Path};

/// Serialization formats accepted for exported spec trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// JSON tree export (`.json`)
    Json,
    /// YAML tree export (`.yaml` / `.yml`)
    Yaml,
}

impl SourceFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::SourceFormat;

    #[test]
    fn infers_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("vss.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("vss.YML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("vss.vspec")), None);
        assert_eq!(SourceFormat::from_path(Path::new("vss")), None);
    }
}
