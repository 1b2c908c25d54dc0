use vss2idl_core::{NodeKind, SpecNode};

use super::{AllowedValues, EnumRef, IdlBuffer, allowed_values, push_enum, push_field};
use crate::{ExportConfig, ExportWarning, collect::MemberRecord, ident::sanitize_identifier};

/// Render one module per branch and one single-field struct per leaf.
pub(crate) fn emit_per_signal(
    root: &SpecNode,
    config: &ExportConfig,
) -> (IdlBuffer, Vec<ExportWarning>) {
    let mut emitter = PerSignalEmitter {
        config,
        out: IdlBuffer::new(),
        warnings: Vec::new(),
        path: Vec::new(),
    };
    emitter.visit(root);
    (emitter.out, emitter.warnings)
}

struct PerSignalEmitter<'a> {
    config: &'a ExportConfig,
    out: IdlBuffer,
    warnings: Vec<ExportWarning>,
    /// Source names of the enclosing branches, for warnings.
    path: Vec<String>,
}

impl PerSignalEmitter<'_> {
    fn visit(&mut self, node: &SpecNode) {
        match &node.kind {
            NodeKind::Branch { children } => {
                self.out.open_block("module", &sanitize_identifier(&node.name));
                self.path.push(node.name.clone());
                for child in children {
                    self.visit(child);
                }
                self.path.pop();
                self.out.close_module();
            }
            NodeKind::Leaf(signal) => {
                let member = MemberRecord::from_leaf(node, signal);
                self.emit_leaf(&node.name, &member);
            }
        }
    }

    fn emit_leaf(&mut self, source_name: &str, member: &MemberRecord) {
        let name = &member.name;
        let enum_ref = match allowed_values(member) {
            AllowedValues::None => None,
            AllowedValues::Enum(values) => {
                let enum_ref = EnumRef::for_member(format!("{name}_M"), name);
                self.out.open_block("module", &enum_ref.module);
                push_enum(&mut self.out, &enum_ref, values);
                self.out.close_block();
                Some(enum_ref)
            }
            AllowedValues::Unsupported => {
                let signal = self
                    .path
                    .iter()
                    .map(String::as_str)
                    .chain([source_name])
                    .collect::<Vec<_>>()
                    .join(".");
                self.warnings.push(super::unsupported_allowed(signal, member));
                None
            }
        };

        self.out.open_block("struct", name);
        push_field(&mut self.out, member, "value", enum_ref.as_ref(), self.config);
        self.out.close_block();
    }
}
