use std::fmt::{Error, Result, Write as _};

use super::{NodeKind, SpecNode};

/// Format a spec tree as an indented outline:
/// leaves are rendered in one line, branches as nested blocks.
pub fn format_tree(root: &SpecNode) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_node(root, 0, &mut out)?;
    Ok(out)
}

fn format_node(node: &SpecNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match &node.kind {
        NodeKind::Leaf(signal) => {
            write!(out, "{pad}{}: {{ type: {}", node.name, signal.kind)?;
            if let Some(datatype) = &signal.datatype {
                write!(out, ", datatype: {datatype}")?;
            }
            if let Some(unit) = &signal.unit {
                write!(out, ", unit: {unit}")?;
            }
            writeln!(out, " }}")?;
        }
        NodeKind::Branch { children } => {
            writeln!(out, "{pad}{}:", node.name)?;
            writeln!(out, "{pad}    type: branch")?;
            if !children.is_empty() {
                writeln!(out, "{pad}    children:")?;
                for child in children {
                    format_node(child, indent + 8, out)?;
                }
            }
        }
    }
    Ok(())
}
