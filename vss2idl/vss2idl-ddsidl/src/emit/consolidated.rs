//! Rendering of consolidated struct records.
//!
//! Each record becomes one struct, with one field per member, inside the
//! nested modules of its derived namespace. Modules and structs appear in the
//! order their records were first seen. A struct whose derived name is
//! already used in its module (by a module, an earlier struct, or an enum
//! module) or by one of its own fields gets the first free `_2`, `_3`, ...
//! suffix.
//!
//! Enums of a struct live in `<Struct>_M`, each in its own `<Member>_M`
//! module, since enumerators share the scope of their enclosing module.

use std::collections::{HashMap, HashSet};

use super::{AllowedValues, EnumRef, IdlBuffer, allowed_values, push_enum, push_field};
use crate::{
    ExportConfig, ExportWarning,
    collect::{MemberRecord, PATH_SEPARATOR},
    consolidate::{Consolidation, StructRecord},
};

/// Output of [`emit_consolidated`].
pub(crate) struct ConsolidatedOutput {
    pub buffer: IdlBuffer,
    pub warnings: Vec<ExportWarning>,
    /// Final `::`-qualified struct name per record, in record order.
    pub struct_names: Vec<String>,
}

pub(crate) fn emit_consolidated(
    consolidation: &Consolidation,
    config: &ExportConfig,
) -> ConsolidatedOutput {
    let records = consolidation.records();
    let tree = ModuleTree::build(records);
    let names = tree.assign_names(records);

    let ctx = EmitContext {
        config,
        records,
        tree: &tree,
        names: &names,
    };
    let mut buffer = IdlBuffer::new();
    let mut warnings = Vec::new();
    ctx.emit_scope(ModuleTree::ROOT, &mut buffer, &mut warnings);

    let struct_names = (0..records.len())
        .map(|i| {
            let mut qualified = tree.module_path(tree.placement[i]);
            qualified.push(names[i].clone());
            qualified.join("::")
        })
        .collect();

    ConsolidatedOutput {
        buffer,
        warnings,
        struct_names,
    }
}

enum Item {
    Module(usize),
    Struct(usize),
}

struct Scope {
    name: String,
    parent: Option<usize>,
    items: Vec<Item>,
    children: HashMap<String, usize>,
}

struct ModuleTree {
    scopes: Vec<Scope>,
    /// Scope index per record.
    placement: Vec<usize>,
}

impl ModuleTree {
    const ROOT: usize = 0;

    fn build(records: &[StructRecord]) -> Self {
        let mut scopes = vec![Scope {
            name: String::new(),
            parent: None,
            items: Vec::new(),
            children: HashMap::new(),
        }];
        let mut placement = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let mut scope = Self::ROOT;
            for segment in record.name().namespace {
                scope = match scopes[scope].children.get(&segment) {
                    Some(&child) => child,
                    None => {
                        let child = scopes.len();
                        scopes.push(Scope {
                            name: segment.clone(),
                            parent: Some(scope),
                            items: Vec::new(),
                            children: HashMap::new(),
                        });
                        scopes[scope].children.insert(segment, child);
                        scopes[scope].items.push(Item::Module(child));
                        child
                    }
                };
            }
            scopes[scope].items.push(Item::Struct(idx));
            placement.push(scope);
        }

        Self { scopes, placement }
    }

    fn assign_names(&self, records: &[StructRecord]) -> Vec<String> {
        let mut taken: Vec<HashSet<String>> = self
            .scopes
            .iter()
            .map(|s| s.children.keys().cloned().collect())
            .collect();

        records
            .iter()
            .zip(&self.placement)
            .map(|(record, &scope)| {
                let base = record.name().name;
                let has_enums = record
                    .members
                    .iter()
                    .any(|m| matches!(allowed_values(m), AllowedValues::Enum(_)));
                let taken = &mut taken[scope];
                let mut n = 1;
                loop {
                    let candidate = if n == 1 {
                        base.clone()
                    } else {
                        format!("{base}_{n}")
                    };
                    let enum_module = format!("{candidate}_M");
                    let is_field = record.members.iter().any(|m| m.name == candidate);
                    if !is_field
                        && !taken.contains(&candidate)
                        && !(has_enums && taken.contains(&enum_module))
                    {
                        if has_enums {
                            taken.insert(enum_module);
                        }
                        taken.insert(candidate.clone());
                        break candidate;
                    }
                    n += 1;
                }
            })
            .collect()
    }

    fn module_path(&self, mut scope: usize) -> Vec<String> {
        let mut path = Vec::new();
        while let Some(parent) = self.scopes[scope].parent {
            path.push(self.scopes[scope].name.clone());
            scope = parent;
        }
        path.reverse();
        path
    }
}

struct EmitContext<'a> {
    config: &'a ExportConfig,
    records: &'a [StructRecord],
    tree: &'a ModuleTree,
    names: &'a [String],
}

impl EmitContext<'_> {
    fn emit_scope(&self, scope: usize, out: &mut IdlBuffer, warnings: &mut Vec<ExportWarning>) {
        for item in &self.tree.scopes[scope].items {
            match *item {
                Item::Module(child) => {
                    out.open_block("module", &self.tree.scopes[child].name);
                    self.emit_scope(child, out, warnings);
                    out.close_module();
                }
                Item::Struct(idx) => self.emit_struct(idx, out, warnings),
            }
        }
    }

    fn emit_struct(&self, idx: usize, out: &mut IdlBuffer, warnings: &mut Vec<ExportWarning>) {
        let record = &self.records[idx];
        let name = &self.names[idx];
        let enum_module = format!("{name}_M");

        let mut enum_refs = Vec::with_capacity(record.members.len());
        let mut module_open = false;
        for member in &record.members {
            let enum_ref = match allowed_values(member) {
                AllowedValues::None => None,
                AllowedValues::Enum(values) => {
                    if !module_open {
                        out.open_block("module", &enum_module);
                        module_open = true;
                    }
                    let member_module = format!("{}_M", member.name);
                    out.open_block("module", &member_module);
                    let enum_ref = EnumRef::for_member(
                        format!("{enum_module}::{member_module}"),
                        &member.name,
                    );
                    push_enum(out, &enum_ref, values);
                    out.close_block();
                    Some(enum_ref)
                }
                AllowedValues::Unsupported => {
                    let signal = signal_path(record, member);
                    warnings.push(super::unsupported_allowed(signal, member));
                    None
                }
            };
            enum_refs.push(enum_ref);
        }
        if module_open {
            out.close_block();
        }

        out.open_block("struct", name);
        for (member, enum_ref) in record.members.iter().zip(&enum_refs) {
            push_field(out, member, &member.name, enum_ref.as_ref(), self.config);
        }
        out.close_block();
    }
}

/// Dotted path of a member at the record's first group key.
fn signal_path(record: &StructRecord, member: &MemberRecord) -> String {
    let group = record.paths[0].replace(PATH_SEPARATOR, ".");
    if group.is_empty() {
        member.name.clone()
    } else {
        format!("{group}.{}", member.name)
    }
}
