//! Struct consolidation: folds path groups with identical member content into
//! one [`StructRecord`].
//!
//! Groups are compared by a content [`Fingerprint`] over their ordered member
//! metadata. Member descriptions are left out of the digest, so groups that
//! differ only in descriptive text still fold together. Groups that share a
//! fingerprint are not compared member by member.

use std::{collections::HashMap, fmt};

use crate::{
    collect::{MemberRecord, PathGroup, PathGroups},
    naming::{StructName, derive_struct_name},
};

/// Content digest of a path group's ordered member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    pub fn of_members(members: &[MemberRecord]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for member in members {
            update_field(&mut hasher, b'n', &member.name);
            update_field(&mut hasher, b'k', member.kind.as_str());
            if let Some(datatype) = &member.datatype {
                update_field(&mut hasher, b't', datatype);
            }
            if let Some(allowed) = &member.allowed {
                let joined = allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                update_field(&mut hasher, b'a', &joined);
            }
            if let Some(default) = &member.default {
                update_field(&mut hasher, b'd', &default.to_string());
            }
            if let Some(min) = &member.min {
                update_field(&mut hasher, b'<', &min.to_string());
            }
            if let Some(max) = &member.max {
                update_field(&mut hasher, b'>', &max.to_string());
            }
            if let Some(unit) = &member.unit {
                update_field(&mut hasher, b'u', unit);
            }
            if let Some(comment) = &member.comment {
                update_field(&mut hasher, b'c', comment);
            }
        }
        Self(hasher.finalize())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Tag and length prefix keep adjacent fields from running into each other.
fn update_field(hasher: &mut blake3::Hasher, tag: u8, value: &str) {
    hasher.update(&[tag]);
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// One deduplicated struct shape and every group key it was found at.
#[derive(Debug, Clone, PartialEq)]
pub struct StructRecord {
    pub fingerprint: Fingerprint,
    /// Group keys in traversal order; never empty.
    pub paths: Vec<String>,
    /// Members of the first contributing group.
    pub members: Vec<MemberRecord>,
}

impl StructRecord {
    fn new(fingerprint: Fingerprint, group: &PathGroup) -> Self {
        Self {
            fingerprint,
            paths: vec![group.key.clone()],
            members: group.members.clone(),
        }
    }

    /// Namespace and struct name derived from the full path list.
    pub fn name(&self) -> StructName {
        derive_struct_name(&self.paths)
    }
}

/// Struct records in first-seen order, addressable by fingerprint.
#[derive(Debug, Clone, Default)]
pub struct Consolidation {
    records: Vec<StructRecord>,
    index: HashMap<Fingerprint, usize>,
}

impl Consolidation {
    pub fn records(&self) -> &[StructRecord] {
        &self.records
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&StructRecord> {
        self.index.get(fingerprint).map(|&i| &self.records[i])
    }

    /// The record a group key was folded into.
    pub fn find_path(&self, key: &str) -> Option<&StructRecord> {
        self.records
            .iter()
            .find(|r| r.paths.iter().any(|p| p == key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn add(&mut self, group: &PathGroup) {
        let fingerprint = Fingerprint::of_members(&group.members);
        match self.index.get(&fingerprint) {
            Some(&idx) => self.records[idx].paths.push(group.key.clone()),
            None => {
                self.records.push(StructRecord::new(fingerprint, group));
                self.index.insert(fingerprint, self.records.len() - 1);
            }
        }
    }
}

/// Fold `groups`, in their traversal order, into struct records.
pub fn consolidate(groups: &PathGroups) -> Consolidation {
    let mut consolidation = Consolidation::default();
    for group in groups.iter() {
        consolidation.add(group);
    }
    tracing::debug!(
        groups = groups.len(),
        structs = consolidation.len(),
        "consolidated path groups"
    );
    consolidation
}
