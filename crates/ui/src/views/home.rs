use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

const FEATURES: [(&str, &str); 4] = [
    (
        "Study Resources",
        "Access curated exam materials organized by subject and topic",
    ),
    (
        "Study Timer",
        "Boost productivity with focused study sessions and breaks",
    ),
    (
        "Flashcards",
        "Master concepts with interactive flashcards and spaced repetition",
    ),
    (
        "Track Progress",
        "Monitor your study progress and identify areas for improvement",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Study Resources"),
    ("98%", "Success Rate"),
    ("10k+", "Students"),
    ("24/7", "Access"),
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();
    let deck_label = format!("{} flashcards ready", library.deck().len());

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { class: "hero__title", "Study Sprint" }
                p { class: "hero__tagline", "Ace Your Exams!" }
                p { class: "hero__lead",
                    "Your ultimate companion for high school exam preparation. Organize resources, create flashcards, and track your progress with our comprehensive study platform."
                }
                div { class: "hero__actions",
                    Link { class: "button primary quick-action", to: Route::Study {},
                        span { class: "quick-action__title", "Start Studying" }
                        span { class: "quick-action__hint", "Jump into your study session" }
                    }
                    Link { class: "button outline quick-action", to: Route::Input {},
                        span { class: "quick-action__title", "Add Resources" }
                        span { class: "quick-action__hint", "Input new study materials" }
                    }
                }
                p { class: "hero__deck", "{deck_label}" }
            }

            section { class: "features",
                h2 { "Everything You Need to Excel" }
                div { class: "features__grid",
                    for (title, description) in FEATURES {
                        div { class: "card feature", key: "{title}",
                            h3 { class: "card__title", "{title}" }
                            p { class: "card__description", "{description}" }
                        }
                    }
                }
            }

            section { class: "stats",
                for (value, label) in STATS {
                    div { class: "stat", key: "{label}",
                        div { class: "stat__value", "{value}" }
                        div { class: "stat__label", "{label}" }
                    }
                }
            }
        }
    }
}
