//! Input model for the VSS → DDS IDL exporter.
//!
//! This crate provides the vehicle signal specification tree ([`SpecNode`])
//! with presence-tagged leaf metadata, and a loader for the JSON / YAML tree
//! exports produced by the VSS tooling ([`load_spec_tree`]).

mod error;
mod literal;
mod loader;
mod source_format;
mod tree;

pub use error::SpecLoadError;
pub use literal::Literal;
pub use loader::{load_spec_tree, parse_spec_tree};
pub use source_format::SourceFormat;
pub use tree::{LeafSignal, NodeKind, SignalKind, SpecNode, format_tree};
