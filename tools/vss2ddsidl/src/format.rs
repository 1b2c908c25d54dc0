use clap::ValueEnum;
use vss2idl_core::SourceFormat;
use vss2idl_ddsidl::Layout;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum InputFormat {
    Json,
    Yaml,
}

impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => SourceFormat::Json,
            InputFormat::Yaml => SourceFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum LayoutChoice {
    #[default]
    PerSignal,
    Consolidated,
}

impl From<LayoutChoice> for Layout {
    fn from(choice: LayoutChoice) -> Self {
        match choice {
            LayoutChoice::PerSignal => Layout::PerSignal,
            LayoutChoice::Consolidated => Layout::Consolidated,
        }
    }
}
