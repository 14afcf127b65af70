use std::rc::Rc;

use dioxus::prelude::*;

use services::TimerSnapshot;
use study_core::{DeckNavigator, format_mm_ss};

use crate::context::AppContext;
use crate::vm::{CardFace, map_flashcard, map_note_cards, map_timer};

#[cfg(test)]
use std::cell::RefCell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyTab {
    #[default]
    Flashcards,
    Notes,
    Timer,
}

impl StudyTab {
    const ALL: [Self; 3] = [Self::Flashcards, Self::Notes, Self::Timer];

    const fn label(self) -> &'static str {
        match self {
            Self::Flashcards => "Flashcards",
            Self::Notes => "Notes",
            Self::Timer => "Study Timer",
        }
    }

    const fn id(self) -> &'static str {
        match self {
            Self::Flashcards => "tab-flashcards",
            Self::Notes => "tab-notes",
            Self::Timer => "tab-timer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StudyIntent {
    Reveal,
    Next,
    Previous,
    ToggleTimer,
    ResetTimer,
}

#[component]
pub fn StudyView() -> Element {
    rsx! { StudySession { initial_tab: StudyTab::Flashcards } }
}

/// Navigator and timer live here, above the tabs, so switching tabs keeps
/// the current card and a running countdown.
#[component]
pub(crate) fn StudySession(initial_tab: StudyTab) -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();
    let duration_secs = ctx.timer_duration_secs();

    let mut tab = use_signal(|| initial_tab);
    let navigator = use_signal(|| DeckNavigator::new(library.deck().clone()));

    // Dropped with this scope, which cancels any pending ticks.
    let timer = use_hook(|| Rc::new(ctx.new_timer()));
    let mut snapshot = use_signal(|| timer.snapshot());
    let updates = use_hook(|| timer.watch());
    use_future(move || {
        let mut updates = updates.clone();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    let dispatch_intent = {
        let timer = Rc::clone(&timer);
        use_callback(move |intent: StudyIntent| {
            let mut navigator = navigator;
            tracing::debug!(?intent, "study intent");
            match intent {
                StudyIntent::Reveal => navigator.write().reveal(),
                StudyIntent::Next => navigator.write().next(),
                StudyIntent::Previous => navigator.write().previous(),
                StudyIntent::ToggleTimer => {
                    timer.toggle();
                    snapshot.set(timer.snapshot());
                }
                StudyIntent::ResetTimer => {
                    timer.reset(i64::from(duration_secs));
                    snapshot.set(timer.snapshot());
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch_intent, navigator);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if tab() != StudyTab::Flashcards {
            return;
        }
        match evt.data.key() {
            Key::ArrowRight => dispatch_intent.call(StudyIntent::Next),
            Key::ArrowLeft => dispatch_intent.call(StudyIntent::Previous),
            Key::Character(ref c) if c == " " => {
                evt.prevent_default();
                dispatch_intent.call(StudyIntent::Reveal);
            }
            _ => {}
        }
    });

    let active = tab();

    rsx! {
        div { class: "page study-page", tabindex: "0", onkeydown: on_key,
            header { class: "page-header",
                h1 { "Study Session" }
                p { class: "page-header__lead",
                    "Focus on your studies with flashcards, notes, and productivity tools"
                }
            }
            div { class: "tabs", role: "tablist",
                for candidate in StudyTab::ALL {
                    button {
                        key: "{candidate.id()}",
                        id: "{candidate.id()}",
                        class: if candidate == active { "tab active" } else { "tab" },
                        role: "tab",
                        aria_selected: "{candidate == active}",
                        onclick: move |_| {
                            tracing::trace!(tab = candidate.label(), "study tab selected");
                            tab.set(candidate);
                        },
                        "{candidate.label()}"
                    }
                }
            }
            match active {
                StudyTab::Flashcards => rsx! {
                    FlashcardPanel { navigator, on_intent: dispatch_intent }
                },
                StudyTab::Notes => rsx! { NotesPanel {} },
                StudyTab::Timer => rsx! {
                    TimerPanel { snapshot, duration_secs, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn FlashcardPanel(
    navigator: Signal<DeckNavigator>,
    on_intent: EventHandler<StudyIntent>,
) -> Element {
    let vm = map_flashcard(&navigator.read());

    rsx! {
        div { class: "card flashcard",
            div { class: "card__header flashcard__header",
                h2 { class: "card__title", "{vm.position_label}" }
                span { class: "badge outline", "{vm.subject}" }
            }
            p { class: "card__description", "{vm.difficulty_label}" }
            div { class: "flashcard__face",
                h3 { "{vm.face_heading}" }
                p { class: "flashcard__text", "{vm.face_text}" }
            }
            div { class: "flashcard__actions",
                match vm.face {
                    CardFace::Question => rsx! {
                        button {
                            class: "button primary",
                            id: "flashcard-reveal",
                            onclick: move |_| on_intent.call(StudyIntent::Reveal),
                            "Show Answer"
                        }
                    },
                    CardFace::Answer => rsx! {
                        button {
                            class: "button outline",
                            id: "flashcard-previous",
                            onclick: move |_| on_intent.call(StudyIntent::Previous),
                            "Previous"
                        }
                        button {
                            class: "button outline",
                            id: "flashcard-next",
                            onclick: move |_| on_intent.call(StudyIntent::Next),
                            "Next Card"
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn NotesPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();
    let notes = map_note_cards(library.notes(), ctx.clock().now());

    rsx! {
        div { class: "notes",
            for note in notes {
                div { class: "card note", key: "{note.title}",
                    div { class: "card__header",
                        h2 { class: "card__title", "{note.title}" }
                        span { class: "badge secondary", "{note.subject}" }
                    }
                    p { class: "card__description", "{note.last_modified_label}" }
                    p { class: "note__content", "{note.content}" }
                }
            }
        }
        div { class: "card notes-empty",
            h3 { "Create Your First Note" }
            p { "Start taking notes to organize your study materials" }
            button { class: "button primary", disabled: true, "Add Note" }
        }
    }
}

#[component]
fn TimerPanel(
    snapshot: Signal<TimerSnapshot>,
    duration_secs: u32,
    on_intent: EventHandler<StudyIntent>,
) -> Element {
    let vm = map_timer(&snapshot.read());
    let session_label = session_length_label(duration_secs);

    rsx! {
        div { class: "card timer",
            div { class: "card__header",
                h2 { class: "card__title", "Pomodoro Timer" }
                p { class: "card__description",
                    "{session_label} focused study sessions with 5-minute breaks"
                }
            }
            div { class: "timer__display", id: "timer-display", "{vm.display}" }
            div { class: "timer__status", "{vm.status}" }
            div { class: "timer__actions",
                button {
                    class: "{vm.toggle_class}",
                    id: "timer-toggle",
                    disabled: !vm.can_toggle,
                    onclick: move |_| on_intent.call(StudyIntent::ToggleTimer),
                    "{vm.toggle_label}"
                }
                button {
                    class: "button outline",
                    id: "timer-reset",
                    onclick: move |_| on_intent.call(StudyIntent::ResetTimer),
                    "Reset"
                }
            }
            p { class: "timer__hint", "Studies show 25-minute focused sessions improve retention" }
        }
    }
}

fn session_length_label(secs: u32) -> String {
    if secs % 60 == 0 {
        format!("{}-minute", secs / 60)
    } else {
        format_mm_ss(secs)
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<StudyIntent>>>>,
    navigator: Rc<RefCell<Option<Signal<DeckNavigator>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<StudyIntent>, navigator: Signal<DeckNavigator>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.navigator.borrow_mut() = Some(navigator);
    }

    pub(crate) fn dispatch(&self) -> Callback<StudyIntent> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }

    pub(crate) fn navigator(&self) -> Signal<DeckNavigator> {
        (*self.navigator.borrow()).expect("study navigator registered")
    }
}
