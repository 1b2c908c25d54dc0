//! DDS IDL exporter for vehicle signal specification trees.
//!
//! Two rendering paths are provided, selected by [`Layout`]:
//!
//! - **per-signal**: one IDL module per branch and one struct with a single
//!   `value` field per leaf signal.
//! - **consolidated**: leaves are grouped by branch path, groups with the
//!   same member content are folded into one struct, and each struct is named
//!   by diffing the paths it was found at.
//!
//! # Pipeline (consolidated)
//!
//! ```text
//! SpecNode tree
//!   └─ collect_path_groups   : path → ordered members
//!       └─ consolidate       : fingerprint → StructRecord { paths, members }
//!           └─ derive_struct_name : shared namespace + struct name
//!               └─ emit      : IDL lines
//! ```

pub mod collect;
mod config;
pub mod consolidate;
mod emit;
mod error;
mod exporter;
pub mod ident;
pub mod naming;
mod summary;
pub mod type_map;

pub use collect::{MemberRecord, PathGroup, PathGroups, collect_path_groups};
pub use config::{ExportConfig, Layout};
pub use consolidate::{Consolidation, Fingerprint, StructRecord, consolidate};
pub use emit::IdlBuffer;
pub use error::{ExportError, ExportWarning};
pub use exporter::{IdlDocument, IdlExporter, IdlExporterBuilder};
pub use ident::sanitize_identifier;
pub use naming::{StructName, derive_struct_name};
pub use summary::format_struct_summary;
pub use type_map::{IdlType, map_datatype};
