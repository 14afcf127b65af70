use study_core::DeckNavigator;

/// Which side of the current card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Question,
    Answer,
}

/// UI-ready view of the navigator's current card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub position_label: String,
    pub subject: String,
    pub difficulty_label: String,
    pub face: CardFace,
    pub face_heading: &'static str,
    pub face_text: String,
}

#[must_use]
pub fn map_flashcard(nav: &DeckNavigator) -> FlashcardVm {
    let card = nav.current_card();
    let (face, face_heading, face_text) = if nav.is_revealed() {
        (CardFace::Answer, "Answer:", card.answer())
    } else {
        (CardFace::Question, "Question:", card.question())
    };

    FlashcardVm {
        position_label: nav.position_label(),
        subject: card.subject().to_string(),
        difficulty_label: format!("Difficulty: {}", card.difficulty()),
        face,
        face_heading,
        face_text: face_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{Difficulty, Flashcard};

    fn nav() -> DeckNavigator {
        DeckNavigator::from_cards(vec![
            Flashcard::new("What year did World War II end?", "1945", "History", Difficulty::Easy)
                .unwrap(),
            Flashcard::new("Define osmosis", "Diffusion of water", "Biology", Difficulty::Hard)
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn hidden_card_shows_question() {
        let vm = map_flashcard(&nav());
        assert_eq!(vm.face, CardFace::Question);
        assert_eq!(vm.face_heading, "Question:");
        assert_eq!(vm.face_text, "What year did World War II end?");
        assert_eq!(vm.position_label, "Flashcard 1 of 2");
        assert_eq!(vm.difficulty_label, "Difficulty: Easy");
    }

    #[test]
    fn revealed_card_shows_answer() {
        let mut nav = nav();
        nav.next();
        nav.reveal();
        let vm = map_flashcard(&nav);
        assert_eq!(vm.face, CardFace::Answer);
        assert_eq!(vm.face_text, "Diffusion of water");
        assert_eq!(vm.subject, "Biology");
    }
}
