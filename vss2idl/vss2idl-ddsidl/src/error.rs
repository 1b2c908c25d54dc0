//! Error and warning types for the exporter.

/// Fatal export failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write IDL output '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Non-fatal condition reported while rendering; the export continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportWarning {
    /// Allowed values on a signal whose datatype cannot carry an IDL enum.
    /// No enum is generated and the plain value type is used.
    #[error(
        "VSS2IDL can only handle allowed values for string type, signal {signal} has type {datatype}"
    )]
    AllowedValuesOnNonString { signal: String, datatype: String },
}
