//! crates/study_desk_core/src/forms.rs
//!
//! Input state for the add-material form, the question box, and profile edits.

use crate::domain::{MaterialKind, NewMaterial, Profile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a question")]
    EmptyQuestion,
}

/// The add-material form panel.
#[derive(Debug, Clone, Default)]
pub struct AddMaterialForm {
    pub title: String,
    pub content: String,
    pub subject: String,
    pub kind: MaterialKind,
    visible: bool,
}

impl AddMaterialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Collects the fields into a create payload. Only presence is checked.
    pub fn submission(&self) -> Result<NewMaterial, FormError> {
        if self.title.is_empty() || self.content.is_empty() || self.subject.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(NewMaterial {
            title: self.title.clone(),
            content: self.content.clone(),
            subject: self.subject.clone(),
            kind: self.kind.clone(),
        })
    }

    /// Clears the text fields after a successful save. The type selection stays.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.subject.clear();
    }
}

/// The question input of the chat widget.
#[derive(Debug, Clone, Default)]
pub struct QuestionInput {
    draft: String,
}

impl QuestionInput {
    pub fn set(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Takes the trimmed question out of the input, leaving it empty.
    /// An empty or blank draft is left untouched.
    pub fn take_question(&mut self) -> Result<String, FormError> {
        let question = self.draft.trim();
        if question.is_empty() {
            return Err(FormError::EmptyQuestion);
        }
        let question = question.to_string();
        self.draft.clear();
        Ok(question)
    }
}

/// The replies to the three profile prompts. `None` means cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdits {
    pub name: Option<String>,
    pub school: Option<String>,
    pub course: Option<String>,
}

impl Profile {
    /// Applies the non-empty replies; cancelled or empty replies keep the old value.
    pub fn apply(&mut self, edits: ProfileEdits) {
        fn update(field: &mut String, reply: Option<String>) {
            if let Some(value) = reply.filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
        update(&mut self.name, edits.name);
        update(&mut self.school, edits.school);
        update(&mut self.course, edits.course);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddMaterialForm {
        let mut form = AddMaterialForm::new();
        form.title = "Newton's laws".to_string();
        form.content = "F = ma".to_string();
        form.subject = "Physics".to_string();
        form.kind = MaterialKind::Lecture;
        form
    }

    #[test]
    fn complete_form_yields_submission() {
        let submission = filled_form().submission().unwrap();
        assert_eq!(submission.title, "Newton's laws");
        assert_eq!(submission.kind, MaterialKind::Lecture);
    }

    #[test]
    fn any_missing_text_field_is_rejected() {
        for clear in ["title", "content", "subject"] {
            let mut form = filled_form();
            match clear {
                "title" => form.title.clear(),
                "content" => form.content.clear(),
                _ => form.subject.clear(),
            }
            assert_eq!(form.submission(), Err(FormError::MissingFields), "{clear}");
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = filled_form();
        form.title = "  ".to_string();
        assert!(form.submission().is_ok());
    }

    #[test]
    fn clear_keeps_kind() {
        let mut form = filled_form();
        form.kind = MaterialKind::Book;
        form.clear();
        assert!(form.title.is_empty() && form.content.is_empty() && form.subject.is_empty());
        assert_eq!(form.kind, MaterialKind::Book);
    }

    #[test]
    fn question_is_trimmed_and_taken() {
        let mut input = QuestionInput::default();
        input.set("  What is X?  ");
        assert_eq!(input.take_question().unwrap(), "What is X?");
        assert_eq!(input.draft(), "");
    }

    #[test]
    fn blank_question_is_rejected_and_kept() {
        let mut input = QuestionInput::default();
        input.set("   ");
        assert_eq!(input.take_question(), Err(FormError::EmptyQuestion));
        assert_eq!(input.draft(), "   ");
    }

    #[test]
    fn profile_keeps_fields_for_cancelled_or_empty_replies() {
        let mut profile = Profile {
            name: "Student".to_string(),
            school: "School No. 1".to_string(),
            course: "10th grade".to_string(),
        };
        profile.apply(ProfileEdits {
            name: Some("Anna".to_string()),
            school: None,
            course: Some(String::new()),
        });
        assert_eq!(profile.name, "Anna");
        assert_eq!(profile.school, "School No. 1");
        assert_eq!(profile.course, "10th grade");
    }
}
