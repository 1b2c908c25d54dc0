//! Loader for the JSON / YAML tree exports of a VSS specification.
//!
//! The document is a mapping of one root name to a node object; branch nodes
//! nest their children in a `children` mapping. Mapping order is the child
//! order of the tree, so mappings are deserialized into ordered entry lists
//! rather than hash maps.

use std::{fmt, fs, marker::PhantomData, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::{LeafSignal, Literal, NodeKind, SignalKind, SourceFormat, SpecLoadError, SpecNode};

/// Read and parse a spec tree file.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load_spec_tree(
    path: &Path,
    format: Option<SourceFormat>,
) -> Result<SpecNode, SpecLoadError> {
    let format = format
        .or_else(|| SourceFormat::from_path(path))
        .ok_or_else(|| SpecLoadError::UnknownFormat {
            path: path.display().to_string(),
        })?;
    let text = fs::read_to_string(path).map_err(|e| SpecLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_spec_tree(&text, format)
}

/// Parse a spec tree document held in memory.
pub fn parse_spec_tree(text: &str, format: SourceFormat) -> Result<SpecNode, SpecLoadError> {
    let document: OrderedEntries<RawNode> = match format {
        SourceFormat::Json => serde_json::from_str(text)?,
        SourceFormat::Yaml => serde_yaml::from_str(text)?,
    };

    let count = document.0.len();
    let mut entries = document.0.into_iter();
    let (name, raw) = match (entries.next(), count) {
        (Some(entry), 1) => entry,
        _ => return Err(SpecLoadError::RootCount { count }),
    };

    let mut path = Vec::new();
    let root = convert_node(name, raw, &mut path)?;
    tracing::debug!(
        root = %root.name,
        signals = root.signal_count(),
        "loaded spec tree"
    );
    Ok(root)
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    node_type: Option<String>,
    datatype: Option<String>,
    unit: Option<String>,
    min: Option<Literal>,
    max: Option<Literal>,
    default: Option<Literal>,
    allowed: Option<Vec<Literal>>,
    description: Option<String>,
    comment: Option<String>,
    children: Option<OrderedEntries<RawNode>>,
}

/// A mapping deserialized as `(key, value)` pairs in document order.
#[derive(Debug)]
struct OrderedEntries<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedEntries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of node names to node objects")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

fn convert_node(
    name: String,
    raw: RawNode,
    path: &mut Vec<String>,
) -> Result<SpecNode, SpecLoadError> {
    path.push(name.clone());
    let node_type = raw
        .node_type
        .ok_or_else(|| SpecLoadError::MissingType {
            path: path.join("."),
        })?
        .to_ascii_lowercase();

    let kind = if node_type == "branch" {
        let mut children = Vec::new();
        for (child_name, child) in raw.children.map(|c| c.0).unwrap_or_default() {
            children.push(convert_node(child_name, child, path)?);
        }
        NodeKind::Branch { children }
    } else {
        let kind = SignalKind::from_type_name(&node_type).ok_or_else(|| {
            SpecLoadError::UnknownNodeType {
                path: path.join("."),
                node_type: node_type.clone(),
            }
        })?;
        NodeKind::Leaf(LeafSignal {
            kind,
            datatype: non_blank(raw.datatype),
            unit: non_blank(raw.unit),
            min: present(raw.min),
            max: present(raw.max),
            default: present(raw.default),
            allowed: raw.allowed.filter(|values| !values.is_empty()),
        })
    };
    path.pop();

    Ok(SpecNode {
        name,
        description: non_blank(raw.description),
        comment: non_blank(raw.comment),
        kind,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn present(value: Option<Literal>) -> Option<Literal> {
    value.filter(|v| !v.is_blank())
}
