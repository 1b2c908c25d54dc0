use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use vss2idl_core::load_spec_tree;
use vss2idl_ddsidl::IdlExporter;

use crate::format::{InputFormat, LayoutChoice};

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the exported signal tree (.json, .yaml, .yml)
    input: PathBuf,

    /// Output IDL file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format (guessed from the file extension if not specified)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Emit @range annotations and default values
    #[arg(long)]
    all_idl_features: bool,

    /// Accepted for compatibility with other exporters; has no effect
    #[arg(long)]
    uuid: bool,

    /// Struct layout of the generated IDL
    #[arg(long, value_enum, default_value_t = LayoutChoice::PerSignal)]
    layout: LayoutChoice,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let root = load_spec_tree(&self.input, self.format.map(Into::into))?;
        let exporter = IdlExporter::builder()
            .with_all_idl_features(self.all_idl_features)
            .with_uuid(self.uuid)
            .with_layout(self.layout.into())
            .build();

        tracing::info!("Generating DDS-IDL output...");
        let document = match &self.output {
            Some(path) => exporter.write(&root, path)?,
            None => {
                let document = exporter.export(&root);
                println!("{}", document.text());
                document
            }
        };

        if !document.warnings().is_empty() {
            tracing::info!(
                warnings = document.warnings().len(),
                "some allowed values were not exported"
            );
        }
        if let Some(path) = &self.output {
            tracing::info!("IDL file generated at location : {}", path.display());
        }
        Ok(())
    }
}
