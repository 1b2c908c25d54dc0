//! Vehicle signal specification tree.

mod format;
mod types;

pub use format::format_tree;
pub use types::{LeafSignal, NodeKind, SignalKind, SpecNode};
