mod flashcard_vm;
mod note_vm;
mod resource_form_vm;
mod time_fmt;
mod timer_vm;

pub use flashcard_vm::{CardFace, FlashcardVm, map_flashcard};
pub use note_vm::{NoteCardVm, map_note_cards};
pub use resource_form_vm::{
    Notice, NoticeKind, SelectOption, notice_for_submission, question_type_options,
    rating_options, subject_options,
};
pub use time_fmt::format_relative;
pub use timer_vm::{TimerVm, map_timer};
