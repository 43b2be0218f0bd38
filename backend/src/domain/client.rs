//! Clients owned by a user.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{client_name_regex, phone_regex, strict_email_regex};
use super::{ClientId, UserId, ValidationErrors};

/// Customer record belonging to exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    /// Stable identifier.
    pub id: ClientId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    #[schema(example = "Grace Hopper")]
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone number formatted `###-###-####`.
    #[schema(example = "555-123-4567")]
    pub phone: String,
    /// Optional company name.
    pub company: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
    /// Free-form notes.
    pub notes: String,
}

impl Client {
    /// Attach identity and owner to validated content.
    #[must_use]
    pub fn from_draft(id: ClientId, user_id: UserId, draft: ClientDraft) -> Self {
        let ClientDraft {
            name,
            email,
            phone,
            company,
            address,
            notes,
        } = draft;
        Self {
            id,
            user_id,
            name,
            email,
            phone,
            company,
            address,
            notes,
        }
    }
}

/// Validated client content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    /// Trimmed name, 2..=30 characters.
    pub name: String,
    /// Email matching the strict address pattern.
    pub email: String,
    /// `###-###-####`.
    pub phone: String,
    /// Blank input is stored as `None`.
    pub company: Option<String>,
    /// Blank input is stored as `None`.
    pub address: Option<String>,
    /// Trimmed notes, 20..=1000 characters.
    pub notes: String,
}

/// Raw client fields as submitted. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFields {
    /// Submitted name.
    pub name: Option<String>,
    /// Submitted email.
    pub email: Option<String>,
    /// Submitted phone number.
    pub phone: Option<String>,
    /// Submitted company.
    pub company: Option<String>,
    /// Submitted address.
    pub address: Option<String>,
    /// Submitted notes.
    pub notes: Option<String>,
}

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 30;
const NOTES_MIN: usize = 20;
const NOTES_MAX: usize = 1000;

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

impl ClientFields {
    /// Validate a complete submission.
    pub fn into_draft(self) -> Result<ClientDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required("name", self.name.as_deref()).map(str::trim);
        if let Some(text) = name {
            let length = text.chars().count();
            if length < NAME_MIN {
                errors.add("name", "Client name must be at least 2 characters long");
            } else if length > NAME_MAX {
                errors.add("name", "Client name must be 30 characters or less");
            } else if !client_name_regex().is_match(text) {
                errors.add(
                    "name",
                    "Client name can only contain letters, numbers, spaces, hyphens, apostrophes, and periods",
                );
            }
        }

        let email = errors.required("email", self.email.as_deref()).map(str::trim);
        if let Some(address) = email {
            if !address.contains('@') {
                errors.add("email", "Invalid email format");
            } else if address.chars().count() < 5 {
                errors.add("email", "Email must be at least 5 characters long");
            } else if !strict_email_regex().is_match(address) {
                errors.add("email", "Invalid email format");
            }
        }

        let phone = match self.phone.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => {
                if !phone_regex().is_match(number) {
                    errors.add("phone", "Phone number must be in format: ###-###-####");
                }
                Some(number)
            }
            _ => {
                errors.add("phone", "Phone number is required");
                None
            }
        };

        let notes = errors.required("notes", self.notes.as_deref()).map(str::trim);
        if let Some(text) = notes {
            let length = text.chars().count();
            if length < NOTES_MIN {
                errors.add("notes", "Client notes must be at least 20 characters long");
            } else if length > NOTES_MAX {
                errors.add("notes", "Client notes must be 1000 characters or less");
            }
        }

        match (name, email, phone, notes) {
            (Some(name), Some(email), Some(phone), Some(notes)) => {
                errors.finish(ClientDraft {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    phone: phone.to_owned(),
                    company: optional_text(self.company),
                    address: optional_text(self.address),
                    notes: notes.to_owned(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Merge the supplied fields over `client` and validate the result.
    pub fn merge_over(self, client: &Client) -> Result<ClientDraft, ValidationErrors> {
        Self {
            name: self.name.or_else(|| Some(client.name.clone())),
            email: self.email.or_else(|| Some(client.email.clone())),
            phone: self.phone.or_else(|| Some(client.phone.clone())),
            company: self.company.or_else(|| client.company.clone()),
            address: self.address.or_else(|| client.address.clone()),
            notes: self.notes.or_else(|| Some(client.notes.clone())),
        }
        .into_draft()
    }
}

#[cfg(test)]
mod tests {
    //! Client field rules.
    use super::*;
    use rstest::{fixture, rstest};

    fn valid_fields() -> ClientFields {
        ClientFields {
            name: Some("  O'Neil-Smith Jr.  ".to_owned()),
            email: Some("oneil@example.com".to_owned()),
            phone: Some("555-123-4567".to_owned()),
            company: Some("   ".to_owned()),
            address: Some("12 Elm Street".to_owned()),
            notes: Some("Prefers contact in the morning.".to_owned()),
        }
    }

    #[fixture]
    fn valid() -> ClientFields {
        valid_fields()
    }

    #[rstest]
    fn accepts_and_normalises_valid_fields(valid: ClientFields) {
        let draft = valid.into_draft().expect("valid client");
        assert_eq!(draft.name, "O'Neil-Smith Jr.");
        assert_eq!(draft.company, None);
        assert_eq!(draft.address.as_deref(), Some("12 Elm Street"));
    }

    #[rstest]
    #[case::short_name(ClientFields { name: Some("A".into()), ..valid_fields() }, "name", "Client name must be at least 2 characters long")]
    #[case::bad_name(ClientFields { name: Some("Ann & Co".into()), ..valid_fields() }, "name", "Client name can only contain letters, numbers, spaces, hyphens, apostrophes, and periods")]
    #[case::email(ClientFields { email: Some("ann@example".into()), ..valid_fields() }, "email", "Invalid email format")]
    #[case::missing_phone(ClientFields { phone: None, ..valid_fields() }, "phone", "Phone number is required")]
    #[case::phone(ClientFields { phone: Some("5551234567".into()), ..valid_fields() }, "phone", "Phone number must be in format: ###-###-####")]
    #[case::notes(ClientFields { notes: Some("too short".into()), ..valid_fields() }, "notes", "Client notes must be at least 20 characters long")]
    fn rejects_invalid_fields(
        #[case] fields: ClientFields,
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let errors = fields.into_draft().expect_err("invalid client");
        assert_eq!(errors.get(field), Some(message));
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = ClientFields::default().into_draft().expect_err("empty client");
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["email", "name", "notes", "phone"]);
    }
}
