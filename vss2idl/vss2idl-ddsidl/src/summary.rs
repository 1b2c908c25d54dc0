//! Human-readable dump of consolidated struct records.

use crate::{collect::MembersView, consolidate::Consolidation};

/// One header line per record followed by its members as pretty JSON:
///
/// ```text
/// P: Vehicle:Cabin, S: Door, V: [Row1:Left, Row1:Right], members: 2
/// {
///   "IsOpen": { ... },
///   ...
/// }
/// ```
pub fn format_struct_summary(consolidation: &Consolidation) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for record in consolidation.records() {
        let name = record.name();
        out.push_str(&format!(
            "P: {}, S: {}, V: [{}], members: {}\n",
            name.namespace_path(),
            name.name,
            name.discriminators.join(", "),
            record.members.len()
        ));
        out.push_str(&serde_json::to_string_pretty(&MembersView(&record.members))?);
        out.push('\n');
    }
    Ok(out)
}
