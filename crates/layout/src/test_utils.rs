//! Shared demo dataset for engine tests.

use folio_records::{
    AchievementCategory, AchievementRecord, CertificationRecord, EducationRecord, Proficiency,
    SkillRecord, StudentProfile,
};

pub fn demo_profile() -> StudentProfile {
    StudentProfile {
        name: "Vaibhav Mishra".into(),
        roll_number: "BTCS20250123".into(),
        email: "vaibhav@example.com".into(),
        phone: "+91-9876543210".into(),
        profile_image: None,
        bio: "Passionate Computer Science student with expertise in full-stack development and AI research.".into(),
    }
}

pub fn demo_education() -> Vec<EducationRecord> {
    vec![
        EducationRecord {
            id: 1,
            degree: "B.Tech Computer Science".into(),
            institution: "AKTU Lucknow".into(),
            year: "2021-2025".into(),
            grade: "8.6 CGPA".into(),
            specialization: Some("Artificial Intelligence & Machine Learning".into()),
        },
        EducationRecord {
            id: 2,
            degree: "XII (Science)".into(),
            institution: "DAV Public School".into(),
            year: "2021".into(),
            grade: "92.4%".into(),
            specialization: None,
        },
    ]
}

pub fn demo_achievements() -> Vec<AchievementRecord> {
    vec![
        AchievementRecord {
            id: 1,
            title: "AcadVault EdTech Platform".into(),
            category: AchievementCategory::Project,
            organization: "Smart India Hackathon".into(),
            date: "2024-03-01".into(),
            description: "Full-stack educational technology system with AI-powered features for enhanced learning experience.".into(),
            skills: vec!["React".into(), "Django".into(), "PostgreSQL".into(), "AI/ML".into()],
            technologies: Some(vec!["React".into(), "Django".into(), "PostgreSQL".into(), "AI/ML".into()]),
            category_label: None,
            impact: None,
            contributions: None,
        },
        AchievementRecord {
            id: 2,
            title: "Best Presenter Award".into(),
            category: AchievementCategory::Competition,
            organization: "Government of India".into(),
            date: "2024-02-15".into(),
            description: "Outstanding presentation on EdTech innovation solutions at national level competition.".into(),
            skills: vec!["Presentation".into(), "Innovation".into(), "Leadership".into()],
            technologies: None,
            category_label: Some("National Level".into()),
            impact: None,
            contributions: None,
        },
        AchievementRecord {
            id: 3,
            title: "Research Paper Publication".into(),
            category: AchievementCategory::Research,
            organization: "IEEE Conference".into(),
            date: "2024-01-23".into(),
            description: "Transformer Models in Educational Technology: A Comprehensive Study published in IEEE conference.".into(),
            skills: vec!["Research".into(), "AI".into(), "Academic Writing".into()],
            technologies: None,
            category_label: None,
            impact: Some("Cited by 15+ papers".into()),
            contributions: None,
        },
        AchievementRecord {
            id: 4,
            title: "Open Source Contributor".into(),
            category: AchievementCategory::Workshop,
            organization: "GitHub".into(),
            date: "2023-ongoing".into(),
            description: "Active contributor to React ecosystem with 500+ GitHub contributions across multiple projects.".into(),
            skills: vec!["React".into(), "Open Source".into(), "Collaboration".into()],
            technologies: None,
            category_label: None,
            impact: None,
            contributions: Some("15+ repositories".into()),
        },
    ]
}

pub fn demo_skills() -> Vec<SkillRecord> {
    vec![
        SkillRecord { name: "React.js".into(), level: Proficiency::Advanced, category: "Frontend".into() },
        SkillRecord { name: "Next.js".into(), level: Proficiency::Intermediate, category: "Frontend".into() },
        SkillRecord { name: "Django".into(), level: Proficiency::Advanced, category: "Backend".into() },
        SkillRecord { name: "Python".into(), level: Proficiency::Expert, category: "Programming".into() },
        SkillRecord { name: "Machine Learning".into(), level: Proficiency::Intermediate, category: "AI/ML".into() },
        SkillRecord { name: "PostgreSQL".into(), level: Proficiency::Intermediate, category: "Database".into() },
        SkillRecord { name: "Public Speaking".into(), level: Proficiency::Advanced, category: "Soft Skills".into() },
        SkillRecord { name: "Leadership".into(), level: Proficiency::Advanced, category: "Soft Skills".into() },
    ]
}

pub fn demo_certifications() -> Vec<CertificationRecord> {
    vec![
        CertificationRecord {
            id: 1,
            name: "AWS Cloud Practitioner".into(),
            issuer: "Amazon Web Services".into(),
            date: "2024-01-15".into(),
            credential_id: "ABC123XYZ".into(),
        },
        CertificationRecord {
            id: 2,
            name: "Google AI/ML Certificate".into(),
            issuer: "Google".into(),
            date: "2023-11-20".into(),
            credential_id: "GOOGLE456".into(),
        },
    ]
}
