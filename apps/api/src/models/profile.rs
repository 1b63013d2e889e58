//! Expected-shape schema for the structuring call's output.
//!
//! The model treats every key as optional, so every field here is defaulted
//! at the serde layer. The explicit defaulting table (role -> "Candidate",
//! level -> "Unknown", sequences -> empty) is applied exactly once, at
//! interview assembly — not scattered across read sites.

use serde::{Deserialize, Serialize};

/// Seniority level. Closed enumeration; anything else from the model is a
/// parse failure, not a sixth level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Fresher,
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    Senior,
    Lead,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fresher => "Fresher",
            Level::Junior => "Junior",
            Level::MidLevel => "Mid-level",
            Level::Senior => "Senior",
            Level::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institute: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Structured candidate data produced by round 1 of the interview pipeline.
/// Created once per request, never mutated; consumed by the question prompt
/// and by interview assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub years_of_experience: Option<f64>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_with_defaults() {
        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.full_name.is_none());
        assert!(profile.skills.is_empty());
        assert!(profile.level.is_none());
        assert!(profile.tech_stack.is_empty());
    }

    #[test]
    fn test_full_profile_deserializes() {
        let raw = r#"{
            "full_name": "Ada Lovelace",
            "contact": {"phone": "+1-555-0100", "email": "ada@example.com"},
            "skills": ["Rust", "SQL"],
            "work_experience": [{"company": "Analytical Engines", "title": "Engineer", "duration": "2 years"}],
            "projects": [{"title": "Notes", "technologies": ["Rust"], "description": "First program"}],
            "education": [{"degree": "BSc", "institute": "London", "year": "1840"}],
            "certifications": ["Mathematics"],
            "years_of_experience": 2,
            "level": "Junior",
            "tech_stack": ["Rust", "SQL"]
        }"#;
        let profile: CandidateProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.level, Some(Level::Junior));
        assert_eq!(profile.work_experience.len(), 1);
    }

    #[test]
    fn test_mid_level_round_trips_with_hyphen() {
        let level: Level = serde_json::from_str(r#""Mid-level""#).unwrap();
        assert_eq!(level, Level::MidLevel);
        assert_eq!(level.as_str(), "Mid-level");
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""Mid-level""#);
    }

    #[test]
    fn test_unknown_level_is_a_parse_error() {
        assert!(serde_json::from_str::<Level>(r#""Principal""#).is_err());
    }
}
