use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Required intake form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceField {
    Title,
    Subject,
    Topic,
}

impl fmt::Display for ResourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "Title",
            Self::Subject => "Subject",
            Self::Topic => "Topic",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingRequired(Vec<ResourceField>),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(String),

    #[error("resource link must be an http(s) URL: {0}")]
    InvalidLink(String),
}

impl ResourceError {
    /// True when the draft was rejected for blank required fields.
    #[must_use]
    pub fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequired(_))
    }
}

fn join_fields(fields: &[ResourceField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    English,
    History,
    Geography,
    ComputerScience,
    Economics,
    Psychology,
}

impl Subject {
    pub const ALL: [Subject; 10] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::English,
        Subject::History,
        Subject::Geography,
        Subject::ComputerScience,
        Subject::Economics,
        Subject::Psychology,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::English => "English",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::ComputerScience => "Computer Science",
            Self::Economics => "Economics",
            Self::Psychology => "Psychology",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ResourceError::UnknownSubject(s.to_string()))
    }
}

//
// ─── QUESTION TYPE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    MultipleChoice,
    ShortAnswer,
    Essay,
    TrueFalse,
    FillInTheBlank,
    Diagram,
    Calculation,
    Analysis,
}

impl QuestionType {
    pub const ALL: [QuestionType; 8] = [
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
        QuestionType::Essay,
        QuestionType::TrueFalse,
        QuestionType::FillInTheBlank,
        QuestionType::Diagram,
        QuestionType::Calculation,
        QuestionType::Analysis,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::ShortAnswer => "Short Answer",
            Self::Essay => "Essay",
            Self::TrueFalse => "True/False",
            Self::FillInTheBlank => "Fill in the Blank",
            Self::Diagram => "Diagram",
            Self::Calculation => "Calculation",
            Self::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ResourceError::UnknownQuestionType(s.to_string()))
    }
}

//
// ─── RATING ────────────────────────────────────────────────────────────────────
//

/// A 1-5 star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `ResourceError::InvalidRating` outside `1..=5`.
    pub fn new(stars: u8) -> Result<Self, ResourceError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ResourceError::InvalidRating(stars.to_string()))
        }
    }

    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            5 => "Excellent",
            4 => "Good",
            3 => "Average",
            2 => "Below Average",
            _ => "Poor",
        }
    }
}

impl FromStr for Rating {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| ResourceError::InvalidRating(s.to_string()))
            .and_then(Self::new)
    }
}

//
// ─── DRAFT / VALIDATED ─────────────────────────────────────────────────────────
//

/// Raw intake form input. Every field is free text as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyResourceDraft {
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub link: String,
    pub description: String,
    pub rating: String,
    pub question_type: String,
}

impl StudyResourceDraft {
    /// Validate the draft into a typed resource.
    ///
    /// Blank required fields are reported together before any other check.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` for missing or malformed fields.
    pub fn validate(self) -> Result<StudyResource, ResourceError> {
        let missing: Vec<ResourceField> = [
            (ResourceField::Title, &self.title),
            (ResourceField::Subject, &self.subject),
            (ResourceField::Topic, &self.topic),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ResourceError::MissingRequired(missing));
        }

        let subject = self.subject.parse::<Subject>()?;
        let link = non_blank(&self.link).map(parse_link).transpose()?;
        let rating = non_blank(&self.rating).map(str::parse::<Rating>).transpose()?;
        let question_type = non_blank(&self.question_type)
            .map(str::parse::<QuestionType>)
            .transpose()?;

        Ok(StudyResource {
            title: self.title.trim().to_string(),
            subject,
            topic: self.topic.trim().to_string(),
            link,
            description: non_blank(&self.description).map(str::to_string),
            rating,
            question_type,
        })
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_link(raw: &str) -> Result<Url, ResourceError> {
    let url = Url::parse(raw).map_err(|_| ResourceError::InvalidLink(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ResourceError::InvalidLink(raw.to_string())),
    }
}

/// A validated study resource. Never stored; it lives as long as the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyResource {
    title: String,
    subject: Subject,
    topic: String,
    link: Option<Url>,
    description: Option<String>,
    rating: Option<Rating>,
    question_type: Option<QuestionType>,
}

impl StudyResource {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn link(&self) -> Option<&Url> {
        self.link.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    #[must_use]
    pub fn question_type(&self) -> Option<QuestionType> {
        self.question_type
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
