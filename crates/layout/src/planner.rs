//! Section planning: which sections render, in which order, with which
//! achievement bucket.

use folio_records::AchievementCategory;
use folio_style::{SectionKind, TemplateStyle};

/// Returns the ordered section list for a template.
///
/// The template drives ordering verbatim; there is no per-call override.
pub fn plan(style: &TemplateStyle) -> Vec<SectionKind> {
    style.section_order.clone()
}

/// Resolves the projects/research placeholder: whether an achievement with
/// the given category belongs to the given section's bucket.
///
/// The two buckets are disjoint, so no achievement can ever appear in both.
pub fn bucket_accepts(section: SectionKind, category: AchievementCategory) -> bool {
    use AchievementCategory::*;
    match section {
        SectionKind::Projects => matches!(category, Project | Workshop | Competition | Internship),
        SectionKind::Research => category == Research,
        _ => false,
    }
}
