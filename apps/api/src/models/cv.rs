//! The CV document schema.
//!
//! Every struct decodes with `#[serde(default)]` so a pasted or fetched
//! document that omits a section (or a field) still loads: missing
//! collections become empty and missing text becomes blank. Type mismatches
//! are still decode errors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvDocument {
    pub basics: Basics,
    pub work: Vec<WorkItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub languages: Vec<LanguageItem>,
    pub portfolio: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub summary: String,
    pub location: Location,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkItem {
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// `None` means the position is ongoing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillItem {
    pub name: String,
    pub level: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageItem {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub cover_image: String,
    pub images: Vec<PortfolioImage>,
    pub tools: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<PortfolioLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<Vec<Collaborator>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PortfolioStats>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_steps: Option<Vec<ProcessStep>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioLink {
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Live,
    Github,
    Behance,
    Dribbble,
    #[default]
    Other,
}

impl LinkKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "live" => Some(LinkKind::Live),
            "github" => Some(LinkKind::Github),
            "behance" => Some(LinkKind::Behance),
            "dribbble" => Some(LinkKind::Dribbble),
            "other" => Some(LinkKind::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Live => "live",
            LinkKind::Github => "github",
            LinkKind::Behance => "behance",
            LinkKind::Dribbble => "dribbble",
            LinkKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collaborator {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Top-level sections of a [`CvDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Basics,
    Work,
    Education,
    Skills,
    Languages,
    Portfolio,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Basics,
        SectionKey::Work,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Languages,
        SectionKey::Portfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Basics => "basics",
            SectionKey::Work => "work",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Languages => "languages",
            SectionKey::Portfolio => "portfolio",
        }
    }

    #[cfg(test)]
    pub fn is_collection(&self) -> bool {
        !matches!(self, SectionKey::Basics)
    }
}

/// A replacement value for exactly one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Basics(Basics),
    Work(Vec<WorkItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillItem>),
    Languages(Vec<LanguageItem>),
    Portfolio(Vec<PortfolioItem>),
}

impl Section {
    pub fn key(&self) -> SectionKey {
        match self {
            Section::Basics(_) => SectionKey::Basics,
            Section::Work(_) => SectionKey::Work,
            Section::Education(_) => SectionKey::Education,
            Section::Skills(_) => SectionKey::Skills,
            Section::Languages(_) => SectionKey::Languages,
            Section::Portfolio(_) => SectionKey::Portfolio,
        }
    }

    /// Decodes a raw JSON value as the section named by `key`.
    pub fn from_value(key: SectionKey, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match key {
            SectionKey::Basics => Section::Basics(serde_json::from_value(value)?),
            SectionKey::Work => Section::Work(serde_json::from_value(value)?),
            SectionKey::Education => Section::Education(serde_json::from_value(value)?),
            SectionKey::Skills => Section::Skills(serde_json::from_value(value)?),
            SectionKey::Languages => Section::Languages(serde_json::from_value(value)?),
            SectionKey::Portfolio => Section::Portfolio(serde_json::from_value(value)?),
        })
    }
}

impl CvDocument {
    /// Number of items in a collection section; `None` for `basics`.
    pub fn section_len(&self, key: SectionKey) -> Option<usize> {
        match key {
            SectionKey::Basics => None,
            SectionKey::Work => Some(self.work.len()),
            SectionKey::Education => Some(self.education.len()),
            SectionKey::Skills => Some(self.skills.len()),
            SectionKey::Languages => Some(self.languages.len()),
            SectionKey::Portfolio => Some(self.portfolio.len()),
        }
    }
}

/// Returns `value` unless it is blank, treating `""` like an absent field.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CvDocument {
        CvDocument {
            basics: Basics {
                name: "Ada Lovelace".into(),
                label: "Analyst".into(),
                email: "ada@example.com".into(),
                summary: "Notes on the engine".into(),
                location: Location {
                    city: "London".into(),
                    country: "UK".into(),
                },
                profiles: vec![Profile {
                    network: "GitHub".into(),
                    url: "https://github.com/ada".into(),
                }],
            },
            work: vec![WorkItem {
                company: "Analytical Engines".into(),
                position: "Programmer".into(),
                start_date: "1842".into(),
                end_date: None,
                summary: "First published algorithm".into(),
                highlights: vec!["Bernoulli numbers".into(), "Bernoulli numbers".into()],
            }],
            portfolio: vec![PortfolioItem {
                title: "Note G".into(),
                links: vec![PortfolioLink {
                    kind: LinkKind::Github,
                    url: "https://example.com".into(),
                    label: None,
                }],
                stats: Some(PortfolioStats {
                    views: Some(10),
                    likes: None,
                    comments: None,
                }),
                featured: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_is_structurally_equal() {
        let doc = sample();
        let text = serde_json::to_string_pretty(&doc).unwrap();
        let back: CvDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_missing_sections_decode_as_empty() {
        let doc: CvDocument = serde_json::from_str(r#"{"basics":{"name":"X"}}"#).unwrap();
        assert_eq!(doc.basics.name, "X");
        assert!(doc.work.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.portfolio.is_empty());
        assert_eq!(doc.basics.location, Location::default());
    }

    #[test]
    fn test_absent_end_date_is_omitted() {
        let item = WorkItem::default();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"company":"","position":"","startDate":"","summary":"","highlights":[]})
        );
    }

    #[test]
    fn test_link_kind_uses_type_key() {
        let link: PortfolioLink =
            serde_json::from_value(json!({"type":"dribbble","url":"u"})).unwrap();
        assert_eq!(link.kind, LinkKind::Dribbble);
        assert!(serde_json::from_value::<PortfolioLink>(json!({"type":"myspace"})).is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<CvDocument>(r#"{"work": 5}"#).is_err());
    }

    #[test]
    fn test_section_from_value() {
        let section = Section::from_value(SectionKey::Languages, json!([{"language":"Spanish"}]))
            .unwrap();
        assert_eq!(
            section,
            Section::Languages(vec![LanguageItem {
                language: "Spanish".into(),
                fluency: String::new(),
            }])
        );
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("2020")), Some("2020"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
