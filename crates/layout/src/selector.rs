//! Content selection: order-preserving filters over the full record sets.
//!
//! The selection is advisory, not authoritative — identifiers that match
//! nothing are silently dropped, and the relative order of the supplied
//! sets is preserved in the result.

use folio_records::{AchievementRecord, Selection, SkillRecord};

/// Filters achievements down to the selected ids, preserving input order.
pub fn select_achievements(
    all: &[AchievementRecord],
    selection: &Selection,
) -> Vec<AchievementRecord> {
    all.iter()
        .filter(|a| selection.achievement_ids.contains(&a.id))
        .cloned()
        .collect()
}

/// Filters skills down to the selected names, preserving input order.
pub fn select_skills(all: &[SkillRecord], selection: &Selection) -> Vec<SkillRecord> {
    all.iter()
        .filter(|s| selection.skill_names.contains(&s.name))
        .cloned()
        .collect()
}
