//! # folio-core
//!
//! The integration layer: takes a caller-owned snapshot of a student's
//! records plus a template choice, runs the single layout pass, and exposes
//! every output sink over that one result.
//!
//! The critical property lives here: [`compose`] is called once, and the
//! PDF download, the data-URI share payload and the flowed preview are all
//! derived from its return value. There is no second layout path to drift.
//!
//! The engine performs no I/O and holds no state between calls, so it can
//! be driven from an async UI handler and a batch exporter alike.

pub mod error;

pub use error::PipelineError;

use folio_layout::{plan, render, select_achievements, select_skills, LaidOutDocument};
use folio_records::{
    AchievementRecord, CertificationRecord, EducationRecord, Selection, SkillRecord,
    StudentProfile,
};
use folio_render_flow::FlowNode;
use serde::{Deserialize, Serialize};

/// A read-only snapshot of everything one rendering call needs.
///
/// The achievement list is expected to be approval-filtered by the data
/// layer; the engine renders whatever it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub template_id: String,
    pub profile: StudentProfile,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
    #[serde(default)]
    pub selection: Selection,
}

impl ComposeRequest {
    /// Decodes a JSON snapshot as produced by the data layer.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Runs the full composition pipeline: registry lookup, content selection,
/// section planning, layout. Fails only on an unknown template id.
pub fn compose(request: &ComposeRequest) -> Result<LaidOutDocument, PipelineError> {
    let style = folio_style::lookup(&request.template_id)?;
    log::debug!(
        "composing portfolio for '{}' with template '{}'",
        request.profile.name,
        style.id
    );

    let sections = plan(style);
    let achievements = select_achievements(&request.achievements, &request.selection);
    let skills = select_skills(&request.skills, &request.selection);
    let commands = render(
        &request.profile,
        &sections,
        &achievements,
        &skills,
        &request.education,
        &request.certifications,
        style,
    );
    Ok(LaidOutDocument { font: style.font, commands })
}

/// The downloadable document: one A4 PDF page.
pub fn export_pdf(document: &LaidOutDocument) -> Result<Vec<u8>, PipelineError> {
    Ok(folio_render_lopdf::render_pdf(document)?)
}

/// The embeddable share payload: the same PDF, self-encoded as a data URI.
pub fn export_data_uri(document: &LaidOutDocument) -> Result<String, PipelineError> {
    let bytes = folio_render_lopdf::render_pdf(document)?;
    Ok(folio_render_lopdf::pdf_data_uri(&bytes))
}

/// The live preview: the same commands as DOM-flowable nodes.
pub fn preview(document: &LaidOutDocument) -> Vec<FlowNode> {
    folio_render_flow::flow(&document.commands)
}

/// The preview rendered as an HTML fragment.
pub fn preview_html(document: &LaidOutDocument) -> String {
    folio_render_flow::to_html(&preview(document), document.font)
}

/// Suggested download filename: spaces in the student name become
/// underscores, suffixed with the year.
pub fn suggested_filename(student_name: &str, year: i32) -> String {
    let name = student_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_Portfolio_{}.pdf", name, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::StyleError;

    fn minimal_request(template_id: &str) -> ComposeRequest {
        ComposeRequest::from_json(&format!(
            r#"{{
                "templateId": "{template_id}",
                "profile": {{
                    "name": "Vaibhav Mishra",
                    "rollNumber": "BTCS20250123",
                    "email": "vaibhav@example.com",
                    "phone": "+91-9876543210",
                    "bio": "Full-stack developer."
                }},
                "achievements": [{{
                    "id": 1,
                    "title": "AcadVault EdTech Platform",
                    "type": "Project",
                    "organization": "Smart India Hackathon",
                    "date": "2024-03-01",
                    "description": "Full-stack educational technology system.",
                    "skills": ["React"]
                }}],
                "skills": [{{
                    "name": "Python",
                    "level": "Expert",
                    "category": "Programming"
                }}],
                "selection": {{
                    "achievementIds": [1],
                    "skillNames": ["Python"]
                }}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn compose_runs_the_whole_pipeline() {
        let document = compose(&minimal_request("tech")).unwrap();
        assert_eq!(document.font, folio_style::FontFamily::Helvetica);
        let texts: Vec<&str> = document
            .commands
            .iter()
            .filter_map(|c| c.text_content())
            .collect();
        assert!(texts.contains(&"AcadVault EdTech Platform"));
        assert!(texts.contains(&"CORE COMPETENCIES"));
    }

    #[test]
    fn unknown_template_is_the_only_hard_error() {
        let err = compose(&minimal_request("corporate")).unwrap_err();
        match err {
            PipelineError::Style(StyleError::UnknownTemplate(id)) => assert_eq!(id, "corporate"),
            other => panic!("expected UnknownTemplate, got {other}"),
        }
    }

    #[test]
    fn preview_and_exports_share_one_document() {
        let document = compose(&minimal_request("tech")).unwrap();
        let nodes = preview(&document);
        let pdf = export_pdf(&document).unwrap();
        let uri = export_data_uri(&document).unwrap();
        assert!(!nodes.is_empty());
        assert!(pdf.starts_with(b"%PDF"));
        assert!(uri.starts_with("data:application/pdf;base64,"));
    }

    #[test]
    fn filename_substitutes_spaces() {
        assert_eq!(
            suggested_filename("Vaibhav Mishra", 2026),
            "Vaibhav_Mishra_Portfolio_2026.pdf"
        );
        assert_eq!(suggested_filename("Cher", 2026), "Cher_Portfolio_2026.pdf");
    }

    #[test]
    fn missing_record_sets_default_to_empty() {
        let request = ComposeRequest::from_json(
            r#"{
                "templateId": "creative",
                "profile": {
                    "name": "A B",
                    "rollNumber": "R1",
                    "email": "a@b.c",
                    "phone": "1",
                    "bio": "bio"
                }
            }"#,
        )
        .unwrap();
        let document = compose(&request).unwrap();
        // Header, empty sections, footer: still a complete document.
        assert!(document.commands.len() > 5);
    }
}
