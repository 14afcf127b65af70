use crate::model::{Deck, DeckError, Flashcard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub current_index: usize,
    pub answer_revealed: bool,
}

/// Walks a deck in a circle and tracks whether the current answer is shown.
///
/// Moving to another card always hides the answer again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckNavigator {
    deck: Deck,
    current_index: usize,
    answer_revealed: bool,
}

impl DeckNavigator {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current_index: 0,
            answer_revealed: false,
        }
    }

    /// # Errors
    ///
    /// Returns `DeckError::Empty` when `cards` is empty.
    pub fn from_cards(cards: Vec<Flashcard>) -> Result<Self, DeckError> {
        Deck::new(cards).map(Self::new)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len().get()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.answer_revealed
    }

    #[must_use]
    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            current_index: self.current_index,
            answer_revealed: self.answer_revealed,
        }
    }

    #[must_use]
    pub fn current_card(&self) -> &Flashcard {
        // Index stays in range: it only moves modulo the deck length.
        self.deck.get(self.current_index).unwrap_or_else(|| self.deck.first())
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
        self.answer_revealed = false;
    }

    pub fn previous(&mut self) {
        let len = self.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.answer_revealed = false;
    }

    pub fn reveal(&mut self) {
        self.answer_revealed = true;
    }

    /// "Flashcard 2 of 3"
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Flashcard {} of {}", self.current_index + 1, self.len())
    }
}
