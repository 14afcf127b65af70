use services::AcceptedResource;
use study_core::model::{QuestionType, Rating, ResourceError, Subject};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// Transient toast shown after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Destructive => "notice destructive",
        }
    }
}

#[must_use]
pub fn notice_for_submission(result: &Result<AcceptedResource, ResourceError>) -> Notice {
    match result {
        Ok(accepted) => Notice {
            kind: NoticeKind::Success,
            title: "Resource Added Successfully!".to_string(),
            description: format!(
                "{} has been added to your study resources.",
                accepted.resource.title()
            ),
        },
        Err(err) if err.is_missing_required() => Notice {
            kind: NoticeKind::Destructive,
            title: "Missing Information".to_string(),
            description: "Please fill in at least Title, Subject, and Topic.".to_string(),
        },
        Err(err) => Notice {
            kind: NoticeKind::Destructive,
            title: "Check Your Entry".to_string(),
            description: capitalize(&err.to_string()),
        },
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// `(value, label)` pairs for a select input.
pub type SelectOption = (String, String);

#[must_use]
pub fn subject_options() -> Vec<SelectOption> {
    Subject::ALL
        .iter()
        .map(|subject| (subject.label().to_string(), subject.label().to_string()))
        .collect()
}

#[must_use]
pub fn question_type_options() -> Vec<SelectOption> {
    QuestionType::ALL
        .iter()
        .map(|kind| (kind.label().to_string(), kind.label().to_string()))
        .collect()
}

/// Highest rating first, as stars plus a word.
#[must_use]
pub fn rating_options() -> Vec<SelectOption> {
    (Rating::MIN..=Rating::MAX)
        .rev()
        .filter_map(|stars| Rating::new(stars).ok())
        .map(|rating| {
            let stars = "⭐".repeat(usize::from(rating.stars()));
            (rating.stars().to_string(), format!("{stars} {}", rating.label()))
        })
        .collect()
}
