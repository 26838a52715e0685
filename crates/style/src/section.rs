use serde::{Deserialize, Serialize};
use std::fmt;

/// One thematic block of the document.
///
/// `Projects` and `Research` are the two mutually exclusive bucket
/// resolutions of the achievement list; a template's section order carries
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Skills,
    Projects,
    Research,
    Certifications,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Research => "research",
            SectionKind::Certifications => "certifications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
