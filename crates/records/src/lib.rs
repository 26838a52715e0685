//! Input record model for the composition engine.
//!
//! This crate defines the immutable, caller-supplied snapshot the engine
//! renders from. The engine owns no persistent state: every record arrives
//! fresh per call from a caller-owned store, already approval-filtered
//! (the upstream store tracks Pending/Approved/Rejected achievements and
//! only hands Approved ones to the engine).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Identity and contact data shown in the document header. One per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub bio: String,
}

/// A single education entry. Insertion order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Closed category tag for achievements.
///
/// The wire format is the upstream store's display string ("Volunteer Work"
/// included); anything outside the fixed vocabulary deserializes to `Other`
/// so a newly introduced upstream tag can never fail a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Workshop,
    Certification,
    Competition,
    Research,
    Project,
    Internship,
    VolunteerWork,
    Other,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Workshop => "Workshop",
            AchievementCategory::Certification => "Certification",
            AchievementCategory::Competition => "Competition",
            AchievementCategory::Research => "Research",
            AchievementCategory::Project => "Project",
            AchievementCategory::Internship => "Internship",
            AchievementCategory::VolunteerWork => "Volunteer Work",
            AchievementCategory::Other => "Other",
        }
    }

    fn parse(s: &str) -> Self {
        match s {
            "Workshop" => AchievementCategory::Workshop,
            "Certification" => AchievementCategory::Certification,
            "Competition" => AchievementCategory::Competition,
            "Research" => AchievementCategory::Research,
            "Project" => AchievementCategory::Project,
            "Internship" => AchievementCategory::Internship,
            "Volunteer Work" => AchievementCategory::VolunteerWork,
            _ => AchievementCategory::Other,
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AchievementCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AchievementCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// An approved achievement as handed over by the data layer.
///
/// `category` is the structural tag driving section bucketing; the optional
/// `category_label` is free-form display text (e.g. "National Level") and
/// never participates in bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: AchievementCategory,
    pub organization: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default, rename = "category")]
    pub category_label: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub contributions: Option<String>,
}

/// Ordinal proficiency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        };
        write!(f, "{}", s)
    }
}

/// A skill; `name` is the unique key a `Selection` refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: Proficiency,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

/// The caller's content choice, passed by value into the engine.
///
/// Advisory, not authoritative: identifiers that match nothing in the
/// supplied record sets are silently ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub achievement_ids: HashSet<u32>,
    pub skill_names: HashSet<String>,
}

impl Selection {
    pub fn new(
        achievement_ids: impl IntoIterator<Item = u32>,
        skill_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            achievement_ids: achievement_ids.into_iter().collect(),
            skill_names: skill_names.into_iter().collect(),
        }
    }

    /// Selects every record in the given sets.
    pub fn all_of(achievements: &[AchievementRecord], skills: &[SkillRecord]) -> Self {
        Self {
            achievement_ids: achievements.iter().map(|a| a.id).collect(),
            skill_names: skills.iter().map(|s| s.name.clone()).collect(),
        }
    }
}
