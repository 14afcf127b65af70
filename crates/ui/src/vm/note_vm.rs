use chrono::{DateTime, Utc};
use study_core::model::Note;

use super::time_fmt::format_relative;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteCardVm {
    pub title: String,
    pub subject: String,
    pub content: String,
    pub last_modified_label: String,
}

#[must_use]
pub fn map_note_cards(notes: &[Note], now: DateTime<Utc>) -> Vec<NoteCardVm> {
    notes
        .iter()
        .map(|note| NoteCardVm {
            title: note.title().to_string(),
            subject: note.subject().to_string(),
            content: note.content().to_string(),
            last_modified_label: format!(
                "Last modified: {}",
                format_relative(now, note.last_modified())
            ),
        })
        .collect()
}
