use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use vss2idl_core::{format_tree, load_spec_tree};

use crate::format::InputFormat;

#[derive(Args)]
pub struct TreeArgs {
    /// Path to the exported signal tree (.json, .yaml, .yml)
    input: PathBuf,

    /// Input format (guessed from the file extension if not specified)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl TreeArgs {
    pub fn run(self) -> Result<()> {
        let root = load_spec_tree(&self.input, self.format.map(Into::into))?;
        let text = format_tree(&root)?;
        tracing::debug!(signals = root.signal_count(), "loaded signal tree");

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
