mod deck;
mod flashcard;
mod note;
mod resource;

pub use deck::{Deck, DeckError};
pub use flashcard::{Difficulty, Flashcard, FlashcardError};
pub use note::Note;
pub use resource::{
    QuestionType, Rating, ResourceError, ResourceField, StudyResource, StudyResourceDraft,
    Subject,
};
