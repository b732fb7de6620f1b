use crate::models::cv::{
    Basics, CvDocument, EducationItem, LanguageItem, LinkKind, Location, PortfolioItem,
    PortfolioLink, Profile, SkillItem, WorkItem,
};

/// Bundled demo CV, rendered when a remote fetch fails and the caller asked
/// for a fallback.
pub fn sample_document() -> CvDocument {
    CvDocument {
        basics: Basics {
            name: "Jordan Rivera".into(),
            label: "Full-stack developer".into(),
            email: "jordan@example.com".into(),
            summary: "Developer with several years of experience building web services \
                      and mobile apps, focused on architecture and performance."
                .into(),
            location: Location {
                city: "Buenos Aires".into(),
                country: "Argentina".into(),
            },
            profiles: vec![
                Profile {
                    network: "LinkedIn".into(),
                    url: "https://linkedin.com/in/example".into(),
                },
                Profile {
                    network: "GitHub".into(),
                    url: "https://github.com/example".into(),
                },
            ],
        },
        work: vec![
            WorkItem {
                company: "Carpool Co".into(),
                position: "Backend developer".into(),
                start_date: "2022-02".into(),
                end_date: Some("2023-07".into()),
                summary: "Built and tuned backend services for a ride-sharing platform.".into(),
                highlights: vec![
                    "Query and procedure optimisation".into(),
                    "Geospatial matching algorithms".into(),
                    "Software-as-a-service on GCP".into(),
                ],
            },
            WorkItem {
                company: "Studio Web".into(),
                position: "Tech lead".into(),
                start_date: "2021-11".into(),
                end_date: None,
                summary: "Technical leadership and project management.".into(),
                highlights: vec![
                    "Requirements gathering".into(),
                    "Scoping and estimates".into(),
                ],
            },
        ],
        education: vec![EducationItem {
            institution: "National Technological University".into(),
            area: "Systems Engineering".into(),
            study_type: "Degree".into(),
            start_date: "2015".into(),
            end_date: Some("2020".into()),
        }],
        skills: vec![
            SkillItem {
                name: "Backend".into(),
                level: "Advanced".into(),
                keywords: vec!["PHP".into(), "Node.js".into(), "Python".into(), "SQL".into()],
            },
            SkillItem {
                name: "Frontend".into(),
                level: "Intermediate".into(),
                keywords: vec!["JavaScript".into(), "React".into(), "CSS".into()],
            },
        ],
        languages: vec![
            LanguageItem {
                language: "Spanish".into(),
                fluency: "Native".into(),
            },
            LanguageItem {
                language: "English".into(),
                fluency: "Professional".into(),
            },
        ],
        portfolio: vec![PortfolioItem {
            title: "Route planner".into(),
            description: "Shared-ride route planner with live map updates.".into(),
            category: "Web".into(),
            date: "2023".into(),
            tools: vec!["Rust".into(), "PostGIS".into()],
            links: vec![PortfolioLink {
                kind: LinkKind::Github,
                url: "https://github.com/example/route-planner".into(),
                label: Some("Source".into()),
            }],
            featured: true,
            ..Default::default()
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trips() {
        let doc = sample_document();
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(serde_json::from_str::<CvDocument>(&text).unwrap(), doc);
    }
}
