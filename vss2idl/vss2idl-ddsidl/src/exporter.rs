//! Export entry point.

use std::{fs, path::Path};

use vss2idl_core::SpecNode;

use crate::{
    ExportConfig, ExportError, ExportWarning, Layout,
    collect::collect_path_groups,
    consolidate::{Consolidation, consolidate},
    emit::{emit_consolidated, emit_per_signal},
};

/// Converts spec trees into DDS IDL text.
///
/// An exporter holds only its configuration; every call to
/// [`export`](Self::export) starts from fresh state, so one exporter can be
/// reused and shared.
#[derive(Debug, Clone, Default)]
pub struct IdlExporter {
    config: ExportConfig,
}

/// Builder for configuring [`IdlExporter`].
#[derive(Debug, Clone, Default)]
pub struct IdlExporterBuilder {
    config: ExportConfig,
}

impl IdlExporterBuilder {
    pub fn with_all_idl_features(mut self, enabled: bool) -> Self {
        self.config.all_idl_features = enabled;
        self
    }

    pub fn with_uuid(mut self, enabled: bool) -> Self {
        self.config.generate_uuid = enabled;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn build(self) -> IdlExporter {
        IdlExporter::new(self.config)
    }
}

/// Result of one export run.
#[derive(Debug, Clone)]
pub struct IdlDocument {
    lines: Vec<String>,
    warnings: Vec<ExportWarning>,
    consolidation: Option<Consolidation>,
    struct_names: Vec<String>,
}

impl IdlDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-joined IDL text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn warnings(&self) -> &[ExportWarning] {
        &self.warnings
    }

    /// Struct records behind a [`Layout::Consolidated`] export.
    pub fn consolidation(&self) -> Option<&Consolidation> {
        self.consolidation.as_ref()
    }

    /// `::`-qualified names of the emitted consolidated structs, in record
    /// order. Empty for [`Layout::PerSignal`].
    pub fn struct_names(&self) -> &[String] {
        &self.struct_names
    }
}

impl IdlExporter {
    /// Create a builder for [`IdlExporter`].
    pub fn builder() -> IdlExporterBuilder {
        IdlExporterBuilder::default()
    }

    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Group the tree's leaves by branch path and fold identical groups.
    pub fn consolidate(&self, root: &SpecNode) -> Consolidation {
        consolidate(&collect_path_groups(root))
    }

    /// Render `root` as IDL in memory.
    pub fn export(&self, root: &SpecNode) -> IdlDocument {
        match self.config.layout {
            Layout::PerSignal => {
                let (buffer, warnings) = emit_per_signal(root, &self.config);
                IdlDocument {
                    lines: buffer.into_lines(),
                    warnings,
                    consolidation: None,
                    struct_names: Vec::new(),
                }
            }
            Layout::Consolidated => {
                let consolidation = self.consolidate(root);
                let output = emit_consolidated(&consolidation, &self.config);
                IdlDocument {
                    lines: output.buffer.into_lines(),
                    warnings: output.warnings,
                    consolidation: Some(consolidation),
                    struct_names: output.struct_names,
                }
            }
        }
    }

    /// Render `root` and write the IDL text to `path`.
    pub fn write(&self, root: &SpecNode, path: &Path) -> Result<IdlDocument, ExportError> {
        let document = self.export(root);
        fs::write(path, document.text()).map_err(|e| ExportError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(
            path = %path.display(),
            lines = document.lines().len(),
            warnings = document.warnings().len(),
            "wrote IDL file"
        );
        Ok(document)
    }
}
