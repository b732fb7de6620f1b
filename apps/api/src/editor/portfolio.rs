use serde::Deserialize;

use crate::editor::section::{
    apply_nested, apply_nested_optional, EditError, FieldValue, NestedEdit, NestedRecord,
    SectionItem,
};
use crate::models::cv::{
    Collaborator, LinkKind, PortfolioImage, PortfolioItem, PortfolioLink, PortfolioStats,
    ProcessStep,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortfolioField {
    Title,
    Description,
    Category,
    Date,
    CoverImage,
    Featured,
    /// Comma-separated tool text.
    Tools,
    /// Comma-separated tag text.
    Tags,
    Views,
    Likes,
    Comments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortfolioList {
    Images,
    Links,
    Collaborators,
    ProcessSteps,
    Tools,
    Tags,
}

impl SectionItem for PortfolioItem {
    type Field = PortfolioField;
    type List = PortfolioList;

    const SECTION: &'static str = "portfolio";
    const DRAGGABLE: bool = true;
    const PANELS_START_OPEN: bool = false;

    fn empty() -> Self {
        PortfolioItem {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            date: String::new(),
            cover_image: String::new(),
            images: Vec::new(),
            tools: Vec::new(),
            tags: Vec::new(),
            links: Vec::new(),
            collaborators: None,
            stats: None,
            featured: false,
            process_steps: None,
        }
    }

    fn set_field(&mut self, field: PortfolioField, value: FieldValue) -> Result<(), EditError> {
        match field {
            PortfolioField::Title => self.title = value.into_text("title")?,
            PortfolioField::Description => self.description = value.into_text("description")?,
            PortfolioField::Category => self.category = value.into_text("category")?,
            PortfolioField::Date => self.date = value.into_text("date")?,
            PortfolioField::CoverImage => self.cover_image = value.into_text("coverImage")?,
            PortfolioField::Featured => self.featured = value.into_flag("featured")?,
            PortfolioField::Tools => self.tools = value.into_list("tools")?,
            PortfolioField::Tags => self.tags = value.into_list("tags")?,
            PortfolioField::Views => self.stats_mut().views = value.into_count("views")?,
            PortfolioField::Likes => self.stats_mut().likes = value.into_count("likes")?,
            PortfolioField::Comments => {
                self.stats_mut().comments = value.into_count("comments")?
            }
        }
        Ok(())
    }

    fn edit_list(&mut self, list: PortfolioList, edit: NestedEdit) -> Result<(), EditError> {
        match list {
            PortfolioList::Images => self.images = apply_nested("images", &self.images, edit)?,
            PortfolioList::Links => self.links = apply_nested("links", &self.links, edit)?,
            PortfolioList::Tools => self.tools = apply_nested("tools", &self.tools, edit)?,
            PortfolioList::Tags => self.tags = apply_nested("tags", &self.tags, edit)?,
            PortfolioList::Collaborators => {
                self.collaborators = apply_nested_optional(
                    "collaborators",
                    self.collaborators.as_deref(),
                    edit,
                )?
            }
            PortfolioList::ProcessSteps => {
                self.process_steps = apply_nested_optional(
                    "processSteps",
                    self.process_steps.as_deref(),
                    edit,
                )?
            }
        }
        Ok(())
    }
}

impl PortfolioItem {
    fn stats_mut(&mut self) -> &mut PortfolioStats {
        self.stats.get_or_insert_with(PortfolioStats::default)
    }
}

fn unknown(what: &'static str, field: Option<&str>) -> EditError {
    EditError::UnknownField {
        what,
        field: field.unwrap_or("<none>").to_string(),
    }
}

impl NestedRecord for PortfolioImage {
    fn blank() -> Self {
        PortfolioImage::default()
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        match field {
            Some("url") => self.url = value.into_text("url")?,
            Some("caption") => self.caption = value.into_optional_text("caption")?,
            other => return Err(unknown("image", other)),
        }
        Ok(())
    }
}

impl NestedRecord for PortfolioLink {
    fn blank() -> Self {
        PortfolioLink {
            kind: LinkKind::Other,
            url: String::new(),
            label: None,
        }
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        match field {
            Some("type") => {
                let text = value.into_text("type")?;
                self.kind = LinkKind::parse(&text).ok_or_else(|| {
                    EditError::invalid(
                        "type",
                        format!("'{text}' is not one of live, github, behance, dribbble, other"),
                    )
                })?;
            }
            Some("url") => self.url = value.into_text("url")?,
            Some("label") => self.label = value.into_optional_text("label")?,
            other => return Err(unknown("link", other)),
        }
        Ok(())
    }
}

impl NestedRecord for Collaborator {
    fn blank() -> Self {
        Collaborator::default()
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        match field {
            Some("name") => self.name = value.into_text("name")?,
            Some("role") => self.role = value.into_text("role")?,
            Some("url") => self.url = value.into_optional_text("url")?,
            other => return Err(unknown("collaborator", other)),
        }
        Ok(())
    }
}

impl NestedRecord for ProcessStep {
    fn blank() -> Self {
        ProcessStep::default()
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        match field {
            Some("title") => self.title = value.into_text("title")?,
            Some("description") => self.description = value.into_text("description")?,
            Some("image") => self.image = value.into_optional_text("image")?,
            other => return Err(unknown("process step", other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::section::{ItemEdit, SectionEditor};
    use serde_json::json;

    fn project(title: &str) -> PortfolioItem {
        PortfolioItem {
            title: title.to_string(),
            ..PortfolioItem::empty()
        }
    }

    #[test]
    fn test_empty_item_omits_optional_collections() {
        assert_eq!(
            serde_json::to_value(PortfolioItem::empty()).unwrap(),
            json!({
                "title": "", "description": "", "category": "", "date": "",
                "coverImage": "", "images": [], "tools": [], "tags": [],
                "links": [], "featured": false
            })
        );
    }

    #[test]
    fn test_panels_start_collapsed() {
        let editor = SectionEditor::<PortfolioItem>::new(2);
        assert_eq!(editor.panels().as_slice(), &[false, false]);
    }

    #[test]
    fn test_link_kind_must_be_known() {
        let mut item = project("P");
        item.edit_list(PortfolioList::Links, NestedEdit::Add).unwrap();
        item.edit_list(
            PortfolioList::Links,
            NestedEdit::Set {
                index: 0,
                field: Some("type".into()),
                value: FieldValue::text("github"),
            },
        )
        .unwrap();
        assert_eq!(item.links[0].kind, LinkKind::Github);

        let err = item
            .edit_list(
                PortfolioList::Links,
                NestedEdit::Set {
                    index: 0,
                    field: Some("type".into()),
                    value: FieldValue::text("myspace"),
                },
            )
            .unwrap_err();
        assert!(matches!(err, EditError::InvalidValue { .. }));
        assert_eq!(item.links[0].kind, LinkKind::Github);
    }

    #[test]
    fn test_collaborators_created_on_first_add() {
        let mut item = project("P");
        assert!(item.collaborators.is_none());
        item.edit_list(PortfolioList::Collaborators, NestedEdit::Add)
            .unwrap();
        assert_eq!(item.collaborators.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_stats_follow_parse_int_rules() {
        let mut item = project("P");
        item.set_field(PortfolioField::Views, FieldValue::text("120"))
            .unwrap();
        item.set_field(PortfolioField::Likes, FieldValue::Count(0))
            .unwrap();
        let stats = item.stats.clone().unwrap();
        assert_eq!(stats.views, Some(120));
        assert_eq!(stats.likes, None);
    }

    #[test]
    fn test_featured_takes_a_flag() {
        let mut item = project("P");
        item.set_field(PortfolioField::Featured, FieldValue::Flag(true))
            .unwrap();
        assert!(item.featured);
        assert!(item
            .set_field(PortfolioField::Featured, FieldValue::text("yes"))
            .is_err());
    }

    #[test]
    fn test_unknown_subfield_is_rejected() {
        let mut item = project("P");
        item.edit_list(PortfolioList::Images, NestedEdit::Add).unwrap();
        let err = item
            .edit_list(
                PortfolioList::Images,
                NestedEdit::Set {
                    index: 0,
                    field: Some("alt".into()),
                    value: FieldValue::text("x"),
                },
            )
            .unwrap_err();
        assert!(matches!(err, EditError::UnknownField { what: "image", .. }));
    }

    #[test]
    fn test_drag_reorder() {
        let items = vec![project("A"), project("B"), project("C")];
        let mut editor = SectionEditor::<PortfolioItem>::new(3);
        let next = editor
            .apply(&items, ItemEdit::Reorder { from: 2, to: 0 })
            .unwrap()
            .unwrap();
        let titles: Vec<_> = next.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_tag_text_is_split() {
        let mut item = project("P");
        item.set_field(PortfolioField::Tags, FieldValue::text("ui, ux"))
            .unwrap();
        assert_eq!(item.tags, vec!["ui", "ux"]);
    }
}
