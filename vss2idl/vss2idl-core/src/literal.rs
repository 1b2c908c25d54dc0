use std::fmt;

use serde::{Deserialize, Serialize};

/// A metadata value (`min`, `max`, `default`, allowed entry) as written in the
/// source document.
///
/// The source type is kept so that the IDL emitter can quote strings and
/// leave numbers and booleans bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`, e.g. `uint64` bounds.
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Empty strings and empty lists carry no information and are treated as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            Literal::Str(s) => s.is_empty(),
            Literal::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            Literal::UInt(u) => write!(f, "{u}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Str(s) => f.write_str(s),
            Literal::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::UInt(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Literal;

    #[test]
    fn display_keeps_raw_text() {
        assert_eq!(Literal::from("P").to_string(), "P");
        assert_eq!(Literal::from(-40).to_string(), "-40");
        assert_eq!(Literal::from(2.5).to_string(), "2.5");
        assert_eq!(Literal::from(true).to_string(), "true");
        assert_eq!(Literal::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(
            Literal::List(vec![Literal::from(1), Literal::from(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn blank_values() {
        assert!(Literal::from("").is_blank());
        assert!(Literal::List(vec![]).is_blank());
        assert!(!Literal::from(0).is_blank());
    }
}
