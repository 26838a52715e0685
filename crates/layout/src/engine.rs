//! The composition pass: records + template style → draw commands.
//!
//! One call lays out one single-page document. The vertical cursor only
//! ever moves down; content that would start past the printable area is
//! dropped (whole sections past [`SECTION_CUTOFF`], individual
//! achievements past [`RECORD_CUTOFF`]) rather than paginated. The footer
//! always renders.

use crate::command::{DrawCommand, EllipseCommand, RectCommand, RuleCommand, TextCommand};
use crate::config::*;
use crate::metrics::text_width;
use crate::planner::bucket_accepts;
use crate::wrap::wrap_text;
use chrono::NaiveDate;
use folio_records::{
    AchievementRecord, CertificationRecord, EducationRecord, SkillRecord, StudentProfile,
};
use folio_style::{FontSpec, FontWeight, FrameKind, SectionKind, TemplateStyle};
use folio_types::{Color, Point, Size};
use itertools::Itertools;
use log::{debug, trace};

/// Caption under the page content; renders regardless of overflow.
const FOOTER_CAPTION: &str = "Generated by Folio Portfolio Generator";

/// Lays out one portfolio as an ordered draw-command list.
///
/// `sections` comes from the planner, `achievements` and `skills` from the
/// selector; `education` and `certifications` render unfiltered in list
/// order. Missing optional fields are omitted, empty collections render as
/// empty sections (certifications skip entirely), and identical inputs
/// always produce an identical command sequence.
pub fn render(
    profile: &StudentProfile,
    sections: &[SectionKind],
    achievements: &[AchievementRecord],
    skills: &[SkillRecord],
    education: &[EducationRecord],
    certifications: &[CertificationRecord],
    style: &TemplateStyle,
) -> Vec<DrawCommand> {
    let mut composer = Composer {
        style,
        commands: Vec::new(),
        cursor: 0.0,
    };

    composer.header(profile);

    for section in sections {
        if composer.cursor > SECTION_CUTOFF {
            debug!(
                "dropping section '{}' at y={:.1}: past the printable area",
                section, composer.cursor
            );
            continue;
        }
        trace!("laying out section '{}' at y={:.1}", section, composer.cursor);
        match section {
            SectionKind::Education => composer.education(education),
            SectionKind::Skills => composer.skills(skills),
            SectionKind::Projects | SectionKind::Research => {
                composer.achievements(*section, achievements)
            }
            SectionKind::Certifications => composer.certifications(certifications),
        }
    }

    composer.footer();
    composer.commands
}

/// Holds the growing command list and the vertical write position.
struct Composer<'a> {
    style: &'a TemplateStyle,
    commands: Vec<DrawCommand>,
    cursor: f32,
}

impl Composer<'_> {
    fn text(&mut self, x: f32, y: f32, content: impl Into<String>, size: f32, font: FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text(TextCommand {
            origin: Point::new(x, y),
            content: content.into(),
            size,
            font,
            color,
        }));
    }

    fn rule(&mut self, from: Point, to: Point, thickness: f32) {
        self.commands.push(DrawCommand::Rule(RuleCommand {
            from,
            to,
            color: self.style.primary,
            thickness,
        }));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect(RectCommand {
            origin: Point::new(x, y),
            size: Size::new(width, height),
            color,
        }));
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
        self.commands.push(DrawCommand::Ellipse(EllipseCommand {
            center: Point::new(cx, cy),
            radii: Size::new(rx, ry),
            color,
        }));
    }

    fn measure(&self, text: &str, weight: FontWeight, size: f32) -> f32 {
        text_width(text, self.style.font, weight, size)
    }

    /// The filled band, frame decoration and identity lines at the top of
    /// the page. Leaves the cursor at the first body baseline.
    fn header(&mut self, profile: &StudentProfile) {
        self.fill_rect(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, self.style.primary);

        match self.style.frame {
            FrameKind::Modern => {
                self.fill_ellipse(PAGE_WIDTH - 20.0, 20.0, 15.0, 15.0, self.style.secondary);
                self.fill_rect(0.0, 40.0, PAGE_WIDTH, 5.0, self.style.accent);
            }
            FrameKind::Artistic => {
                self.fill_ellipse(30.0, 25.0, 25.0, 15.0, self.style.secondary);
                self.fill_rect(PAGE_WIDTH - 40.0, 10.0, 20.0, 20.0, self.style.accent);
            }
            FrameKind::Classic | FrameKind::Structured | FrameKind::None => {}
        }

        self.text(MARGIN_LEFT, 25.0, profile.name.clone(), 28.0, FontSpec::BOLD, Color::WHITE);
        self.text(MARGIN_LEFT, 33.0, profile.bio.clone(), 14.0, FontSpec::REGULAR, Color::WHITE);

        let contact = format!(
            "Email: {} | Phone: {} | Roll No: {}",
            profile.email, profile.phone, profile.roll_number
        );
        self.text(MARGIN_LEFT, 40.0, contact, 10.0, FontSpec::REGULAR, Color::WHITE);

        self.cursor = BODY_TOP;
    }

    /// Section title and separator rule; `body_gap` is the extra advance
    /// between the rule and the first record.
    fn heading(&mut self, title: &str, body_gap: f32) {
        self.text(MARGIN_LEFT, self.cursor, title, 16.0, FontSpec::BOLD, self.style.primary);
        self.cursor += 8.0;
        self.rule(
            Point::new(MARGIN_LEFT, self.cursor - 5.0),
            Point::new(CONTENT_RIGHT, self.cursor - 5.0),
            RULE_THICKNESS,
        );
        self.cursor += body_gap;
    }

    fn education(&mut self, records: &[EducationRecord]) {
        self.heading("EDUCATION", 2.0);
        for record in records {
            self.text(
                MARGIN_LEFT,
                self.cursor,
                format!("{} | {}", record.degree, record.grade),
                12.0,
                FontSpec::BOLD,
                Color::gray(60),
            );
            self.cursor += 5.0;
            self.text(
                MARGIN_LEFT,
                self.cursor,
                format!("{} ({})", record.institution, record.year),
                10.0,
                FontSpec::REGULAR,
                Color::gray(60),
            );
            if let Some(specialization) = &record.specialization {
                self.cursor += 4.0;
                self.text(
                    INDENT_LEFT,
                    self.cursor,
                    format!("Specialization: {}", specialization),
                    10.0,
                    FontSpec::ITALIC,
                    self.style.accent,
                );
            }
            self.cursor += 8.0;
        }
        self.cursor += 5.0;
    }

    fn skills(&mut self, skills: &[SkillRecord]) {
        self.heading("CORE COMPETENCIES", 5.0);

        // Group by category, first-seen order.
        let mut groups: Vec<(&str, Vec<&SkillRecord>)> = Vec::new();
        for skill in skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }

        for (category, members) in groups {
            self.text(
                MARGIN_LEFT,
                self.cursor,
                format!("{}:", category),
                11.0,
                FontSpec::BOLD,
                self.style.primary,
            );
            self.cursor += 5.0;

            let joined = members
                .iter()
                .map(|s| format!("{} ({})", s.name, s.level))
                .join(" | ");
            let lines = wrap_text(
                &joined,
                self.style.font,
                FontWeight::Regular,
                10.0,
                SKILLS_WRAP_WIDTH,
            );
            for (i, line) in lines.iter().enumerate() {
                self.text(
                    INDENT_LEFT,
                    self.cursor + i as f32 * WRAPPED_LINE_STEP,
                    line.clone(),
                    10.0,
                    FontSpec::REGULAR,
                    Color::gray(80),
                );
            }
            self.cursor += lines.len() as f32 * WRAPPED_LINE_STEP + 3.0;
        }
        self.cursor += 5.0;
    }

    fn achievements(&mut self, section: SectionKind, records: &[AchievementRecord]) {
        let title = match section {
            SectionKind::Research => "RESEARCH & PUBLICATIONS",
            _ => "PROJECTS & EXPERIENCE",
        };
        self.heading(title, 5.0);

        for record in records.iter().filter(|a| bucket_accepts(section, a.category)) {
            if self.cursor > RECORD_CUTOFF {
                debug!(
                    "dropping achievement '{}' at y={:.1}: past the printable area",
                    record.title, self.cursor
                );
                continue;
            }

            self.text(
                MARGIN_LEFT,
                self.cursor,
                record.title.clone(),
                12.0,
                FontSpec::BOLD,
                self.style.primary,
            );
            self.cursor += 5.0;

            let lines = wrap_text(
                &record.description,
                self.style.font,
                FontWeight::Regular,
                10.0,
                DESCRIPTION_WRAP_WIDTH,
            );
            for (i, line) in lines.iter().enumerate() {
                self.text(
                    INDENT_LEFT,
                    self.cursor + i as f32 * WRAPPED_LINE_STEP,
                    line.clone(),
                    10.0,
                    FontSpec::REGULAR,
                    Color::gray(80),
                );
            }
            self.cursor += lines.len() as f32 * WRAPPED_LINE_STEP;

            let mut metadata = format!(
                "{} | {}",
                record.organization,
                format_event_date(&record.date)
            );
            if let Some(technologies) = &record.technologies {
                metadata.push_str(&format!(" | Tech: {}", technologies.join(", ")));
            }
            if let Some(impact) = &record.impact {
                metadata.push_str(&format!(" | {}", impact));
            }
            self.text(INDENT_LEFT, self.cursor, metadata, 9.0, FontSpec::REGULAR, self.style.primary);
            self.cursor += 8.0;
        }
        self.cursor += 5.0;
    }

    fn certifications(&mut self, records: &[CertificationRecord]) {
        // Skip entirely: no title, no rule.
        if records.is_empty() {
            debug!("certification list empty, section skipped");
            return;
        }
        self.heading("CERTIFICATIONS", 5.0);

        for record in records {
            self.text(
                MARGIN_LEFT,
                self.cursor,
                record.name.clone(),
                11.0,
                FontSpec::BOLD,
                Color::gray(80),
            );
            self.cursor += 4.0;
            self.text(
                INDENT_LEFT,
                self.cursor,
                format!("{} | {} | ID: {}", record.issuer, record.date, record.credential_id),
                9.0,
                FontSpec::REGULAR,
                Color::gray(80),
            );
            self.cursor += 7.0;
        }
        self.cursor += 5.0;
    }

    /// Centred caption plus the page border, regardless of the cursor.
    fn footer(&mut self) {
        let caption_width = self.measure(FOOTER_CAPTION, FontWeight::Regular, 10.0);
        self.text(
            PAGE_CENTER - caption_width / 2.0,
            FOOTER_Y,
            FOOTER_CAPTION,
            10.0,
            FontSpec::REGULAR,
            self.style.primary,
        );

        let left = BORDER_INSET;
        let right = PAGE_WIDTH - BORDER_INSET;
        let top = BORDER_INSET;
        let bottom = PAGE_HEIGHT - BORDER_INSET;
        let corners = [
            (Point::new(left, top), Point::new(right, top)),
            (Point::new(right, top), Point::new(right, bottom)),
            (Point::new(right, bottom), Point::new(left, bottom)),
            (Point::new(left, bottom), Point::new(left, top)),
        ];
        for (from, to) in corners {
            self.rule(from, to, BORDER_THICKNESS);
        }
    }
}

/// Formats an ISO `YYYY-MM-DD` date for metadata rows; anything else (e.g.
/// `2023-ongoing`) passes through verbatim.
fn format_event_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
