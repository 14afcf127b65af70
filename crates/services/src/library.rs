use std::path::Path;

use chrono::Duration;
use serde::Deserialize;

use study_core::Clock;
use study_core::model::{Deck, Difficulty, Flashcard, Note, Subject};

use crate::error::LibraryError;

/// Deck and notes available to a study session.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyLibrary {
    deck: Deck,
    notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<DeckFileCard>,
}

#[derive(Debug, Deserialize)]
struct DeckFileCard {
    question: String,
    answer: String,
    subject: String,
    #[serde(default = "default_difficulty")]
    difficulty: Difficulty,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

impl StudyLibrary {
    #[must_use]
    pub fn new(deck: Deck, notes: Vec<Note>) -> Self {
        Self { deck, notes }
    }

    /// The sample deck and notes shipped with the app.
    #[must_use]
    pub fn builtin(clock: Clock) -> Self {
        Self::new(builtin_deck(), builtin_notes(clock))
    }

    /// Replace the built-in deck with one read from a TOML file.
    ///
    /// Notes stay the built-in samples.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the file cannot be read or parsed, a card is
    /// invalid, or the file holds no cards.
    pub fn from_deck_file(path: &Path, clock: Clock) -> Result<Self, LibraryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LibraryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = parse_deck(&raw).map_err(|err| match err {
            ParseDeckError::Toml(source) => LibraryError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseDeckError::Library(err) => err,
        })?;
        tracing::info!(path = %path.display(), cards = deck.len().get(), "loaded deck file");
        Ok(Self::new(deck, builtin_notes(clock)))
    }

    /// Load `path` if given, otherwise fall back to the built-in library.
    ///
    /// # Errors
    ///
    /// Propagates `from_deck_file` failures.
    pub fn load(path: Option<&Path>, clock: Clock) -> Result<Self, LibraryError> {
        match path {
            Some(path) => Self::from_deck_file(path, clock),
            None => {
                tracing::debug!("using built-in deck");
                Ok(Self::builtin(clock))
            }
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Subjects offered by the intake form.
    #[must_use]
    pub fn subjects(&self) -> &'static [Subject] {
        &Subject::ALL
    }
}

enum ParseDeckError {
    Toml(toml::de::Error),
    Library(LibraryError),
}

fn parse_deck(raw: &str) -> Result<Deck, ParseDeckError> {
    let file: DeckFile = toml::from_str(raw).map_err(ParseDeckError::Toml)?;
    let cards = file
        .cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            Flashcard::new(card.question, card.answer, card.subject, card.difficulty)
                .map_err(|source| LibraryError::Card { index, source })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(ParseDeckError::Library)?;
    Deck::new(cards).map_err(|err| ParseDeckError::Library(err.into()))
}

fn builtin_deck() -> Deck {
    let cards = [
        (
            "What is the quadratic formula?",
            "x = (-b ± √(b² - 4ac)) / 2a",
            "Mathematics",
            Difficulty::Medium,
        ),
        (
            "Define photosynthesis",
            "The process by which plants convert light energy into chemical energy (glucose) using carbon dioxide and water.",
            "Biology",
            Difficulty::Easy,
        ),
        (
            "What year did World War II end?",
            "1945",
            "History",
            Difficulty::Easy,
        ),
    ]
    .into_iter()
    .filter_map(|(question, answer, subject, difficulty)| {
        Flashcard::new(question, answer, subject, difficulty).ok()
    })
    .collect();

    // The literals above are all non-blank, so neither step can fail.
    Deck::new(cards).unwrap_or_else(|_| unreachable!("built-in deck is non-empty"))
}

fn builtin_notes(clock: Clock) -> Vec<Note> {
    let now = clock.now();
    vec![
        Note::new(
            "Chemical Bonding Summary",
            "Chemistry",
            "Ionic bonds form between metals and non-metals through electron transfer. Covalent bonds form between non-metals through electron sharing.",
            now - Duration::hours(2),
        ),
        Note::new(
            "Shakespearean Sonnets",
            "English",
            "14 lines, ABAB CDCD EFEF GG rhyme scheme. Usually written in iambic pentameter with a volta around line 9.",
            now - Duration::days(1),
        ),
    ]
}
