//! Error types for the spec tree loader.

/// Error returned by [`load_spec_tree`](crate::load_spec_tree) and
/// [`parse_spec_tree`](crate::parse_spec_tree).
#[derive(Debug, thiserror::Error)]
pub enum SpecLoadError {
    /// The tree file could not be read.
    #[error("failed to read spec tree '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not have the expected shape.
    #[error("failed to parse JSON spec tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid YAML, or does not have the expected shape.
    #[error("failed to parse YAML spec tree: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No format was given and none could be inferred from the file name.
    #[error("cannot infer spec tree format from '{path}' (expected .json, .yaml or .yml)")]
    UnknownFormat { path: String },

    /// A node object has no `type` key.
    #[error("node '{path}' has no type")]
    MissingType { path: String },

    /// A node object has a `type` that is neither a branch nor a signal kind.
    #[error("node '{path}' has unsupported type '{node_type}'")]
    UnknownNodeType { path: String, node_type: String },

    /// The top level of the document must name exactly one root node.
    #[error("expected exactly one root node, found {count}")]
    RootCount { count: usize },
}
