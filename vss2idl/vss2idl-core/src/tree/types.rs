use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::Literal;

/// Kind of a leaf signal, mirroring the VSS element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Sensor,
    Actuator,
    Attribute,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Sensor => "sensor",
            SignalKind::Actuator => "actuator",
            SignalKind::Attribute => "attribute",
        }
    }

    /// Parse a lower-case VSS element type. Branches are not signal kinds.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "sensor" => Some(SignalKind::Sensor),
            "actuator" => Some(SignalKind::Actuator),
            "attribute" => Some(SignalKind::Attribute),
            _ => None,
        }
    }
}

impl Display for SignalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Metadata carried by a leaf signal. Absent source attributes are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSignal {
    pub kind: SignalKind,
    pub datatype: Option<String>,
    pub unit: Option<String>,
    pub min: Option<Literal>,
    pub max: Option<Literal>,
    pub default: Option<Literal>,
    pub allowed: Option<Vec<Literal>>,
}

impl LeafSignal {
    pub fn new(kind: SignalKind, datatype: impl Into<String>) -> Self {
        Self {
            kind,
            datatype: Some(datatype.into()),
            unit: None,
            min: None,
            max: None,
            default: None,
            allowed: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_min(mut self, min: impl Into<Literal>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Literal>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Literal>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_allowed<I, T>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Literal>,
    {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }
}

/// Branch-or-leaf payload of a [`SpecNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Branch { children: Vec<SpecNode> },
    Leaf(LeafSignal),
}

impl NodeKind {
    /// Lower-case VSS element type (`branch`, `sensor`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Branch { .. } => "branch",
            NodeKind::Leaf(signal) => signal.kind.as_str(),
        }
    }
}

/// A node of the spec tree. Children are owned and kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecNode {
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub kind: NodeKind,
}

impl SpecNode {
    pub fn branch(name: impl Into<String>, children: Vec<SpecNode>) -> Self {
        Self {
            name: name.into(),
            description: None,
            comment: None,
            kind: NodeKind::Branch { children },
        }
    }

    pub fn leaf(name: impl Into<String>, signal: LeafSignal) -> Self {
        Self {
            name: name.into(),
            description: None,
            comment: None,
            kind: NodeKind::Leaf(signal),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, NodeKind::Branch { .. })
    }

    /// Children in source order; empty for leaves.
    pub fn children(&self) -> &[SpecNode] {
        match &self.kind {
            NodeKind::Branch { children } => children,
            NodeKind::Leaf(_) => &[],
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafSignal> {
        match &self.kind {
            NodeKind::Leaf(signal) => Some(signal),
            NodeKind::Branch { .. } => None,
        }
    }

    /// Look up a node by its dotted path, starting with this node's own name
    /// (e.g. `Vehicle.Cabin.Door`).
    pub fn find(&self, path: &str) -> Option<&SpecNode> {
        let mut segments = path.split('.');
        if segments.next()? != self.name {
            return None;
        }
        let mut current = self;
        for segment in segments {
            current = current.children().iter().find(|c| c.name == segment)?;
        }
        Some(current)
    }

    /// Number of leaf signals in this subtree.
    pub fn signal_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Branch { children } => children.iter().map(SpecNode::signal_count).sum(),
        }
    }
}
