//! Tree collector: groups leaf signals by their enclosing branch path.
//!
//! A group key is the `:`-joined list of sanitized branch names from the root
//! down to the leaf's parent, e.g. `Vehicle:Cabin:Door`. Groups and their
//! members are kept in traversal order.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};
use vss2idl_core::{LeafSignal, Literal, NodeKind, SignalKind, SpecNode};

use crate::ident::sanitize_identifier;

/// Separator between branch names in a group key.
pub const PATH_SEPARATOR: &str = ":";

/// Flattened, sanitized metadata of one leaf signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    /// Sanitized leaf name.
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "vsstype")]
    pub kind: SignalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Literal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl MemberRecord {
    pub fn from_leaf(node: &SpecNode, signal: &LeafSignal) -> Self {
        Self {
            name: sanitize_identifier(&node.name),
            kind: signal.kind,
            datatype: signal.datatype.clone(),
            allowed: signal.allowed.clone(),
            default: signal.default.clone(),
            min: signal.min.clone(),
            max: signal.max.clone(),
            unit: signal.unit.clone(),
            description: node.description.clone(),
            comment: node.comment.clone(),
        }
    }
}

/// Serializes a member list as an ordered `name → record` mapping.
pub struct MembersView<'a>(pub &'a [MemberRecord]);

impl Serialize for MembersView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for member in self.0 {
            map.serialize_entry(&member.name, member)?;
        }
        map.end()
    }
}

/// Leaf members sharing one branch path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    pub key: String,
    pub members: Vec<MemberRecord>,
}

impl PathGroup {
    pub fn member(&self, name: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Path groups in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct PathGroups {
    groups: Vec<PathGroup>,
    index: HashMap<String, usize>,
}

impl PathGroups {
    pub fn get(&self, key: &str) -> Option<&PathGroup> {
        self.index.get(key).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn insert(&mut self, key: String, member: MemberRecord) {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.groups.push(PathGroup {
                    key: key.clone(),
                    members: Vec::new(),
                });
                self.index.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        let members = &mut self.groups[idx].members;
        match members.iter_mut().find(|m| m.name == member.name) {
            Some(existing) => *existing = member,
            None => members.push(member),
        }
    }
}

/// Walk `root` depth-first and group every leaf under its branch path.
pub fn collect_path_groups(root: &SpecNode) -> PathGroups {
    let mut collector = Collector::default();
    collector.visit(root);
    tracing::debug!(groups = collector.groups.len(), "collected path groups");
    collector.groups
}

#[derive(Default)]
struct Collector {
    path: Vec<String>,
    groups: PathGroups,
}

impl Collector {
    fn visit(&mut self, node: &SpecNode) {
        match &node.kind {
            NodeKind::Branch { children } => {
                self.path.push(sanitize_identifier(&node.name));
                for child in children {
                    self.visit(child);
                }
                self.path.pop();
            }
            NodeKind::Leaf(signal) => {
                let key = self.path.join(PATH_SEPARATOR);
                self.groups.insert(key, MemberRecord::from_leaf(node, signal));
            }
        }
    }
}
