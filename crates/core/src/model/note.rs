use chrono::{DateTime, Utc};

/// A read-only study note shown alongside the flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    subject: String,
    content: String,
    last_modified: DateTime<Utc>,
}

impl Note {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            content: content.into(),
            last_modified,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }
}
