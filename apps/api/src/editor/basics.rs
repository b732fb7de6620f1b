use serde::Deserialize;

use crate::editor::section::{apply_nested, EditError, FieldValue, NestedEdit, NestedRecord};
use crate::models::cv::{Basics, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasicsField {
    Name,
    Label,
    Email,
    Summary,
    City,
    Country,
}

/// Edits to the `basics` singleton.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BasicsEdit {
    SetField { field: BasicsField, value: FieldValue },
    Profiles { edit: NestedEdit },
}

/// Returns the edited copy of `basics`.
pub fn apply_basics(basics: &Basics, edit: BasicsEdit) -> Result<Basics, EditError> {
    let mut next = basics.clone();
    match edit {
        BasicsEdit::SetField { field, value } => match field {
            BasicsField::Name => next.name = value.into_text("name")?,
            BasicsField::Label => next.label = value.into_text("label")?,
            BasicsField::Email => next.email = value.into_text("email")?,
            BasicsField::Summary => next.summary = value.into_text("summary")?,
            BasicsField::City => next.location.city = value.into_text("city")?,
            BasicsField::Country => next.location.country = value.into_text("country")?,
        },
        BasicsEdit::Profiles { edit } => {
            next.profiles = apply_nested("profiles", &basics.profiles, edit)?;
        }
    }
    Ok(next)
}

impl NestedRecord for Profile {
    fn blank() -> Self {
        Profile::default()
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        match field {
            Some("network") => self.network = value.into_text("network")?,
            Some("url") => self.url = value.into_text("url")?,
            other => {
                return Err(EditError::UnknownField {
                    what: "profile",
                    field: other.unwrap_or("<none>").to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_city_edit_leaves_country() {
        let mut basics = Basics::default();
        basics.location.country = "Argentina".into();
        let next = apply_basics(
            &basics,
            BasicsEdit::SetField {
                field: BasicsField::City,
                value: FieldValue::text("Buenos Aires"),
            },
        )
        .unwrap();
        assert_eq!(next.location.city, "Buenos Aires");
        assert_eq!(next.location.country, "Argentina");
        assert_eq!(basics.location.city, "");
    }

    #[test]
    fn test_profile_add_and_set() {
        let basics = Basics::default();
        let added = apply_basics(&basics, BasicsEdit::Profiles { edit: NestedEdit::Add }).unwrap();
        let edit: BasicsEdit = serde_json::from_value(json!({
            "op": "profiles",
            "edit": {"op": "set", "index": 0, "field": "network", "value": "GitHub"}
        }))
        .unwrap();
        let set = apply_basics(&added, edit).unwrap();
        assert_eq!(set.profiles[0].network, "GitHub");
        assert_eq!(set.profiles[0].url, "");
    }

    #[test]
    fn test_profile_move_out_of_range() {
        let basics = Basics::default();
        let err = apply_basics(
            &basics,
            BasicsEdit::Profiles {
                edit: NestedEdit::MoveUp { index: 0 },
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { what: "profiles", .. }));
    }
}
