use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, InputView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/input", InputView)] Input {},
        #[route("/study", StudyView)] Study {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    rsx! {
        nav { class: "topnav",
            Link { class: "brand", to: Route::Home {}, "Study Sprint" }
            ul {
                li { Link { to: Route::Home {}, active_class: "active", "Home" } }
                li { Link { to: Route::Input {}, active_class: "active", "Input" } }
                li { Link { to: Route::Study {}, active_class: "active", "Study" } }
            }
        }
    }
}
