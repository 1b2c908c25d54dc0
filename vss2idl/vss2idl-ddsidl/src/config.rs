use std::str::FromStr;

/// Which rendering path produces the IDL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One module per branch and one single-`value` struct per signal.
    #[default]
    PerSignal,
    /// One struct per distinct group shape, shared by every branch path that
    /// holds the same members.
    Consolidated,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::PerSignal => "per-signal",
            Layout::Consolidated => "consolidated",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-signal" => Ok(Layout::PerSignal),
            "consolidated" => Ok(Layout::Consolidated),
            _ => Err(format!(
                "invalid layout '{s}', expected one of: per-signal, consolidated"
            )),
        }
    }
}

/// Options of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Accepted for command-line compatibility; does not change the output.
    pub generate_uuid: bool,
    /// Emit `@range` annotations and `default` clauses. Some DDS code
    /// generators reject default values, so this is off by default.
    pub all_idl_features: bool,
    pub layout: Layout,
}

#[cfg(test)]
mod tests {
    use super::Layout;

    #[test]
    fn layout_round_trips_through_text() {
        for layout in [Layout::PerSignal, Layout::Consolidated] {
            assert_eq!(layout.as_str().parse::<Layout>(), Ok(layout));
        }
        assert!("flat".parse::<Layout>().is_err());
    }
}
