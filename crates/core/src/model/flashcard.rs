use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard question cannot be empty")]
    EmptyQuestion,

    #[error("flashcard answer cannot be empty")]
    EmptyAnswer,

    #[error("flashcard subject cannot be empty")]
    EmptySubject,

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How hard a card is, as labelled by whoever wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(FlashcardError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = FlashcardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A single question/answer pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    question: String,
    answer: String,
    subject: String,
    difficulty: Difficulty,
}

impl Flashcard {
    /// Build a flashcard, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError` if the question, answer or subject is blank.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        subject: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, FlashcardError> {
        let question = question.into().trim().to_string();
        let answer = answer.into().trim().to_string();
        let subject = subject.into().trim().to_string();

        if question.is_empty() {
            return Err(FlashcardError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(FlashcardError::EmptyAnswer);
        }
        if subject.is_empty() {
            return Err(FlashcardError::EmptySubject);
        }

        Ok(Self {
            question,
            answer,
            subject,
            difficulty,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
