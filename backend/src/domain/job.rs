//! Jobs in the shared catalogue.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{JobId, ValidationErrors};

/// Catalogue entry describing a kind of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Job {
    /// Stable identifier.
    pub id: JobId,
    /// Short title.
    #[schema(example = "Kitchen remodel")]
    pub title: String,
    /// Free-form description of the work.
    pub description: String,
    /// Category label, e.g. "Renovation".
    pub category: String,
    /// Expected duration, e.g. "2 weeks".
    pub duration: String,
}

impl Job {
    /// Attach an identifier to validated content.
    #[must_use]
    pub fn from_draft(id: JobId, draft: JobDraft) -> Self {
        let JobDraft {
            title,
            description,
            category,
            duration,
        } = draft;
        Self {
            id,
            title,
            description,
            category,
            duration,
        }
    }
}

/// Validated job content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    /// At least five characters.
    pub title: String,
    /// At least ten characters.
    pub description: String,
    /// Non-blank.
    pub category: String,
    /// Non-blank.
    pub duration: String,
}

/// Raw job fields as submitted. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFields {
    /// Submitted title.
    pub title: Option<String>,
    /// Submitted description.
    pub description: Option<String>,
    /// Submitted category.
    pub category: Option<String>,
    /// Submitted duration.
    pub duration: Option<String>,
}

impl JobFields {
    /// Validate a complete submission.
    ///
    /// # Examples
    /// ```
    /// use jobdesk::domain::JobFields;
    ///
    /// let fields = JobFields {
    ///     title: Some("Fence".into()),
    ///     ..JobFields::default()
    /// };
    /// let errors = fields.into_draft().expect_err("incomplete job");
    /// assert_eq!(errors.get("title"), Some("Job title must be at least 5 characters long"));
    /// assert_eq!(errors.get("category"), Some("Category is required"));
    /// ```
    pub fn into_draft(self) -> Result<JobDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = errors.required("title", self.title.as_deref());
        if let Some(text) = title {
            errors.min_chars("title", text, 5, "Job title must be at least 5 characters long");
        }
        let description = errors.required("description", self.description.as_deref());
        if let Some(text) = description {
            errors.min_chars(
                "description",
                text,
                10,
                "Job description must be at least 10 characters long",
            );
        }
        let category = errors.required("category", self.category.as_deref());
        let duration = errors.required("duration", self.duration.as_deref());

        match (title, description, category, duration) {
            (Some(title), Some(description), Some(category), Some(duration)) => {
                errors.finish(JobDraft {
                    title: title.to_owned(),
                    description: description.to_owned(),
                    category: category.to_owned(),
                    duration: duration.to_owned(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Merge the supplied fields over `job` and validate the result.
    pub fn merge_over(self, job: &Job) -> Result<JobDraft, ValidationErrors> {
        Self {
            title: self.title.or_else(|| Some(job.title.clone())),
            description: self.description.or_else(|| Some(job.description.clone())),
            category: self.category.or_else(|| Some(job.category.clone())),
            duration: self.duration.or_else(|| Some(job.duration.clone())),
        }
        .into_draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> JobFields {
        JobFields {
            title: Some("Gutter repair".to_owned()),
            description: Some("Clear and reseal every gutter".to_owned()),
            category: Some("Maintenance".to_owned()),
            duration: Some("1 day".to_owned()),
        }
    }

    #[rstest]
    #[case::padded_title(Some("  Fix  "), None)]
    #[case::padded_description(None, Some("  Clean up  "))]
    fn lengths_count_surrounding_whitespace(
        #[case] title: Option<&str>,
        #[case] description: Option<&str>,
    ) {
        let base = complete();
        let fields = JobFields {
            title: title.map(str::to_owned).or(base.title),
            description: description.map(str::to_owned).or(base.description),
            ..complete()
        };
        let draft = fields.clone().into_draft().expect("raw length is long enough");
        assert_eq!(Some(draft.title), fields.title);
        assert_eq!(Some(draft.description), fields.description);
    }

    #[test]
    fn short_unpadded_title_is_rejected() {
        let errors = JobFields {
            title: Some("Fix".to_owned()),
            ..complete()
        }
        .into_draft()
        .expect_err("title too short");
        assert_eq!(errors.get("title"), Some("Job title must be at least 5 characters long"));
    }

    fn stored() -> Job {
        Job {
            id: JobId::new(1),
            title: "Deck staining".to_owned(),
            description: "Sand and stain a cedar deck".to_owned(),
            category: "Outdoor".to_owned(),
            duration: "3 days".to_owned(),
        }
    }

    #[test]
    fn merge_keeps_stored_values_for_absent_fields() {
        let draft = JobFields {
            duration: Some("1 week".to_owned()),
            ..JobFields::default()
        }
        .merge_over(&stored())
        .expect("valid merge");
        assert_eq!(draft.title, "Deck staining");
        assert_eq!(draft.duration, "1 week");
    }

    #[test]
    fn merge_validates_the_merged_result() {
        let errors = JobFields {
            description: Some("short".to_owned()),
            ..JobFields::default()
        }
        .merge_over(&stored())
        .expect_err("description too short");
        assert_eq!(
            errors.get("description"),
            Some("Job description must be at least 10 characters long")
        );
        assert_eq!(errors.iter().count(), 1);
    }
}
