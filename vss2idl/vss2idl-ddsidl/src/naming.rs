//! Struct naming from the set of paths that share one struct shape.
//!
//! With a single path the last segment names the struct and the rest is its
//! namespace. With several paths, every segment index at which any path
//! differs from the first one is a diverging index: those segments are cut
//! from the first path to form the shared namespace, and the cut segments of
//! each path form its discriminator.

use std::collections::BTreeSet;

use crate::collect::PATH_SEPARATOR;

/// Name appended when a path has no segment left to name the struct with.
pub const SYNTHETIC_NAME: &str = "State";

/// Result of diffing the paths of one struct record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructName {
    /// Module path enclosing the struct.
    pub namespace: Vec<String>,
    pub name: String,
    /// Segment indices at which the paths differ, ascending.
    pub diverging: Vec<usize>,
    /// Per path (in input order), its segments at the diverging indices, `:`-joined.
    pub discriminators: Vec<String>,
}

impl StructName {
    /// `:`-joined namespace.
    pub fn namespace_path(&self) -> String {
        self.namespace.join(PATH_SEPARATOR)
    }
}

fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split(PATH_SEPARATOR).collect()
    }
}

/// Compute the shared namespace and struct name for a path list.
pub fn derive_struct_name<S: AsRef<str>>(paths: &[S]) -> StructName {
    let split: Vec<Vec<&str>> = paths.iter().map(|p| split_path(p.as_ref())).collect();

    match split.as_slice() {
        [] => finish(Vec::new(), Vec::new(), Vec::new()),
        [single] => {
            let mut segments: Vec<String> = single.iter().map(ToString::to_string).collect();
            if segments.len() < 2 {
                segments.push(SYNTHETIC_NAME.to_string());
            }
            finish(segments, Vec::new(), Vec::new())
        }
        [reference, others @ ..] => {
            let mut diverging = BTreeSet::new();
            for other in others {
                for (idx, (a, b)) in reference.iter().zip(other).enumerate() {
                    if a != b {
                        diverging.insert(idx);
                    }
                }
            }

            let discriminators = split
                .iter()
                .map(|segments| {
                    diverging
                        .iter()
                        .filter_map(|&idx| segments.get(idx).copied())
                        .collect::<Vec<_>>()
                        .join(PATH_SEPARATOR)
                })
                .collect();

            // Highest index first so that earlier removals do not shift later ones.
            let mut common: Vec<String> = reference.iter().map(ToString::to_string).collect();
            for &idx in diverging.iter().rev() {
                common.remove(idx);
            }

            finish(common, diverging.into_iter().collect(), discriminators)
        }
    }
}

fn finish(
    mut segments: Vec<String>,
    diverging: Vec<usize>,
    discriminators: Vec<String>,
) -> StructName {
    let name = segments
        .pop()
        .unwrap_or_else(|| SYNTHETIC_NAME.to_string());
    StructName {
        namespace: segments,
        name,
        diverging,
        discriminators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_splits_off_last_segment() {
        let name = derive_struct_name(&["Vehicle:Cabin:Door"]);
        assert_eq!(name.namespace, vec!["Vehicle", "Cabin"]);
        assert_eq!(name.name, "Door");
        assert!(name.diverging.is_empty());
        assert!(name.discriminators.is_empty());
    }

    #[test]
    fn single_segment_gets_synthetic_name() {
        let name = derive_struct_name(&["Engine"]);
        assert_eq!(name.namespace, vec!["Engine"]);
        assert_eq!(name.name, "State");
    }

    #[test]
    fn empty_path_is_a_top_level_synthetic_struct() {
        let name = derive_struct_name(&[""]);
        assert!(name.namespace.is_empty());
        assert_eq!(name.name, "State");
    }

    #[test]
    fn one_diverging_segment() {
        let name = derive_struct_name(&["A:B:X", "A:C:X"]);
        assert_eq!(name.namespace, vec!["A"]);
        assert_eq!(name.name, "X");
        assert_eq!(name.diverging, vec![1]);
        assert_eq!(name.discriminators, vec!["B", "C"]);
    }

    #[test]
    fn divergences_accumulate_across_all_paths() {
        let name = derive_struct_name(&[
            "Vehicle:Cabin:Door:Row1:Left",
            "Vehicle:Cabin:Door:Row1:Right",
            "Vehicle:Cabin:Door:Row2:Left",
        ]);
        assert_eq!(name.diverging, vec![3, 4]);
        assert_eq!(name.namespace, vec!["Vehicle", "Cabin"]);
        assert_eq!(name.name, "Door");
        assert_eq!(
            name.discriminators,
            vec!["Row1:Left", "Row1:Right", "Row2:Left"]
        );
    }

    #[test]
    fn removal_keeps_segments_between_diverging_indices() {
        let name = derive_struct_name(&["A:B:C:D:E", "A:X:C:Y:E"]);
        assert_eq!(name.diverging, vec![1, 3]);
        assert_eq!(name.namespace, vec!["A", "C"]);
        assert_eq!(name.name, "E");
    }

    #[test]
    fn shorter_path_contributes_no_segment_past_its_end() {
        let name = derive_struct_name(&["A:B:C:D", "A:X:C", "A:Y:Z:D"]);
        assert_eq!(name.diverging, vec![1, 2]);
        assert_eq!(name.discriminators, vec!["B:C", "X:C", "Y:Z"]);
        assert_eq!(name.namespace, vec!["A"]);
        assert_eq!(name.name, "D");
    }

    #[test]
    fn fully_diverging_paths_fall_back_to_synthetic_name() {
        let name = derive_struct_name(&["Left", "Right"]);
        assert!(name.namespace.is_empty());
        assert_eq!(name.name, "State");
        assert_eq!(name.discriminators, vec!["Left", "Right"]);
    }
}
