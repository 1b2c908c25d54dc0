//! IDL text rendering.
//!
//! Both rendering paths write into an [`IdlBuffer`] and share the rules for a
//! single value field: type mapping, `sequence<>` wrapping, enum replacement
//! of string types with allowed values, and the `@range` / `default` clauses
//! that are only written with all IDL features enabled.

mod consolidated;
mod per_signal;

use vss2idl_core::Literal;

pub(crate) use consolidated::emit_consolidated;
pub(crate) use per_signal::emit_per_signal;

use crate::{
    ExportConfig, ExportWarning,
    collect::MemberRecord,
    type_map::{is_string_like, map_datatype},
};

/// Ordered sink of IDL text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdlBuffer {
    lines: Vec<String>,
}

impl IdlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Newline-joined text of all lines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub(crate) fn open_block(&mut self, keyword: &str, name: &str) {
        self.push(format!("{keyword} {name}"));
        self.push("{");
    }

    pub(crate) fn close_block(&mut self) {
        self.push("};");
    }

    pub(crate) fn close_module(&mut self) {
        self.push("};");
        self.push("");
    }
}

/// An enum generated for a member's allowed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumRef {
    /// Enclosing module path, e.g. `Gear_M` or `Transmission_M::Gear_M`.
    pub module: String,
    /// Enum type name, e.g. `GearValues`.
    pub name: String,
}

impl EnumRef {
    pub fn for_member(module: String, member: &str) -> Self {
        Self {
            module,
            name: format!("{member}Values"),
        }
    }

    pub fn type_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// Enumerators live in the enum's enclosing module scope.
    pub fn value(&self, value: &str) -> String {
        format!("{}::{}", self.module, value)
    }
}

/// How a member's allowed values are rendered.
pub(crate) enum AllowedValues<'a> {
    None,
    Enum(&'a [Literal]),
    Unsupported,
}

pub(crate) fn allowed_values(member: &MemberRecord) -> AllowedValues<'_> {
    match (&member.allowed, member.datatype.as_deref()) {
        (None, _) => AllowedValues::None,
        (Some(values), Some(datatype)) if is_string_like(datatype) => AllowedValues::Enum(values),
        (Some(_), _) => AllowedValues::Unsupported,
    }
}

pub(crate) fn unsupported_allowed(signal: String, member: &MemberRecord) -> ExportWarning {
    let warning = ExportWarning::AllowedValuesOnNonString {
        signal,
        datatype: member.datatype.clone().unwrap_or_default(),
    };
    tracing::warn!("{warning}");
    warning
}

/// `enum <name>{A,B,C};` with the raw allowed values, in order.
pub(crate) fn push_enum(out: &mut IdlBuffer, enum_ref: &EnumRef, values: &[Literal]) {
    let values = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    out.push(format!("enum {}{{{values}}};", enum_ref.name));
}

/// Write the declaration of one value field. Nothing is written when the
/// datatype has no IDL mapping.
pub(crate) fn push_field(
    out: &mut IdlBuffer,
    member: &MemberRecord,
    field: &str,
    enum_ref: Option<&EnumRef>,
    config: &ExportConfig,
) {
    let Some(ty) = member.datatype.as_deref().and_then(map_datatype) else {
        return;
    };
    let base = match enum_ref {
        Some(e) => e.type_name(),
        None => ty.keyword.to_string(),
    };
    let decl = ty.declare(&base);

    if !config.all_idl_features {
        out.push(format!("{decl} {field};"));
        return;
    }

    if let (Some(min), Some(max)) = (&member.min, &member.max) {
        out.push(format!("@range(min={min}, max={max})"));
    }
    match &member.default {
        Some(default) => out.push(format!(
            "{decl} {field} default {};",
            render_default(default, enum_ref)
        )),
        None => out.push(format!("{decl} {field};")),
    }
}

fn render_default(value: &Literal, enum_ref: Option<&EnumRef>) -> String {
    match (value, enum_ref) {
        (Literal::Str(s), Some(e)) => e.value(s),
        (Literal::Str(s), None) => format!("\"{s}\""),
        (Literal::List(items), _) => {
            let items = items
                .iter()
                .map(|item| render_default(item, enum_ref))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{items}}}")
        }
        (other, _) => other.to_string(),
    }
}
