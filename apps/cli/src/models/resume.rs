//! The Resume record — produced wholesale by the refine call, consumed
//! unmodified by preview and export.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub date: String,
    /// Bullet points, one string per printed bullet.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A section the original resume carried that has no dedicated slot,
/// e.g. "Projects" or "Certifications". Content is free text; newlines
/// separate list items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

/// The full resume record. Field names follow the JSON contract the model
/// is instructed to emit (`customSections` stays camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    #[serde(
        rename = "customSections",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_sections: Option<Vec<CustomSection>>,
}

impl ResumeData {
    /// Checks the required non-null fields. A refine result failing this is
    /// retried by the caller before being rejected.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("contact.name", &self.contact.name),
            ("contact.email", &self.contact.email),
            ("contact.phone", &self.contact.phone),
            ("contact.location", &self.contact.location),
            ("summary", &self.summary),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("required field '{field}' is empty"));
            }
        }
        if self.experience.iter().any(|e| e.role.trim().is_empty()) {
            return Err("an experience entry is missing its role".to_string());
        }
        Ok(())
    }

    /// Custom sections as a slice, present or not.
    pub fn extra_sections(&self) -> &[CustomSection] {
        self.custom_sections.as_deref().unwrap_or(&[])
    }

    /// File-name stem for exported documents: the candidate name with
    /// whitespace collapsed to underscores ("Jane Doe" -> "Jane_Doe").
    pub fn export_file_stem(&self) -> String {
        let stem: String = self
            .contact
            .name
            .trim()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        if stem.is_empty() {
            "Resume".to_string()
        } else {
            stem
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> ResumeData {
        ResumeData {
            contact: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
                portfolio: None,
            },
            summary: "Senior engineer with eight years of distributed systems work."
                .to_string(),
            experience: vec![Experience {
                role: "Senior Engineer".to_string(),
                company: "Acme Corp".to_string(),
                location: "San Francisco, CA".to_string(),
                date: "2020 - Present".to_string(),
                description: vec![
                    "Reduced p99 latency by 40% across three services".to_string(),
                ],
            }],
            education: vec![Education {
                degree: "B.S. Computer Science".to_string(),
                institution: "State University".to_string(),
                date: "2016".to_string(),
            }],
            skills: vec![SkillGroup {
                category: "Languages".to_string(),
                items: vec!["Rust".to_string(), "Python".to_string()],
            }],
            custom_sections: None,
        }
    }

    #[test]
    fn test_round_trips_through_json() {
        let resume = fixture();
        let json = serde_json::to_string(&resume).unwrap();
        let recovered: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.contact.name, "Jane Doe");
        assert_eq!(recovered.experience.len(), 1);
        assert_eq!(recovered.skills[0].items, vec!["Rust", "Python"]);
    }

    #[test]
    fn test_custom_sections_use_camel_case_on_the_wire() {
        let mut resume = fixture();
        resume.custom_sections = Some(vec![CustomSection {
            title: "Projects".to_string(),
            content: "Built a thing".to_string(),
        }]);
        let json = serde_json::to_string(&resume).unwrap();
        assert!(json.contains("\"customSections\""));
        assert!(!json.contains("custom_sections"));

        let recovered: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.extra_sections().len(), 1);
        assert_eq!(recovered.extra_sections()[0].title, "Projects");
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        // No summary at all — the record is rejected before validation.
        let bad = json!({
            "contact": {
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555",
                "location": "SF"
            },
            "experience": [],
            "education": [],
            "skills": []
        });
        let result: Result<ResumeData, _> = serde_json::from_value(bad);
        assert!(result.is_err(), "ResumeData without summary must fail");
    }

    #[test]
    fn test_absent_custom_sections_deserializes_to_none() {
        let json = serde_json::to_string(&fixture()).unwrap();
        let recovered: ResumeData = serde_json::from_str(&json).unwrap();
        assert!(recovered.custom_sections.is_none());
        assert!(recovered.extra_sections().is_empty());
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut resume = fixture();
        resume.contact.name = "   ".to_string();
        let err = resume.validate().unwrap_err();
        assert!(err.contains("contact.name"));
    }

    #[test]
    fn test_validate_rejects_empty_summary() {
        let mut resume = fixture();
        resume.summary = String::new();
        assert!(resume.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_roleless_experience() {
        let mut resume = fixture();
        resume.experience[0].role = String::new();
        assert!(resume.validate().is_err());
    }

    #[test]
    fn test_export_file_stem_replaces_whitespace() {
        assert_eq!(fixture().export_file_stem(), "Jane_Doe");

        let mut resume = fixture();
        resume.contact.name = "  Mary Jane  Watson ".to_string();
        assert_eq!(resume.export_file_stem(), "Mary_Jane_Watson");
    }

    #[test]
    fn test_export_file_stem_falls_back_for_empty_name() {
        let mut resume = fixture();
        resume.contact.name = String::new();
        assert_eq!(resume.export_file_stem(), "Resume");
    }
}
