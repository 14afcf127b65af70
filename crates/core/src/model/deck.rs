use std::num::NonZeroUsize;

use thiserror::Error;

use crate::model::flashcard::Flashcard;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck must contain at least one flashcard")]
    Empty,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A fixed, ordered, non-empty run of flashcards.
///
/// The card list is frozen at construction; nothing adds, removes or
/// reorders cards afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Build a deck from the given cards in order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` when `cards` is empty.
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    /// Number of cards; never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cards.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &Flashcard {
        &self.cards[0]
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn card(q: &str) -> Flashcard {
        Flashcard::new(q, "a", "General", Difficulty::Easy).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn deck_keeps_insertion_order() {
        let deck = Deck::new(vec![card("one"), card("two"), card("three")]).unwrap();
        assert_eq!(deck.len().get(), 3);
        let questions: Vec<_> = deck.iter().map(Flashcard::question).collect();
        assert_eq!(questions, ["one", "two", "three"]);
        assert_eq!(deck.first().question(), "one");
        assert!(deck.get(3).is_none());
    }
}
