use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { "The page /{path} does not exist." }
            Link { to: Route::Landing {}, class: "btn btn-primary",
                "Back to home"
            }
        }
    )
}
