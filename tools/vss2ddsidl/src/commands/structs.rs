use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use vss2idl_core::load_spec_tree;
use vss2idl_ddsidl::{IdlExporter, format_struct_summary};

use crate::format::InputFormat;

#[derive(Args)]
pub struct StructsArgs {
    /// Path to the exported signal tree (.json, .yaml, .yml)
    input: PathBuf,

    /// Input format (guessed from the file extension if not specified)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl StructsArgs {
    pub fn run(self) -> Result<()> {
        let root = load_spec_tree(&self.input, self.format.map(Into::into))?;
        let consolidation = IdlExporter::default().consolidate(&root);
        let text = format_struct_summary(&consolidation)?;

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
