use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

/// Neighborhoods the shop covers; served statically since coverage changes
/// a few times a year at most.
const SERVICE_AREAS: [&str; 6] = [
    "Downtown & Riverside",
    "North Hills",
    "Eastgate",
    "Maplewood",
    "Cedar Valley",
    "Airport District",
];

#[component]
pub fn ServiceAreas() -> Element {
    rsx!(
        Title { "Service Areas | Curbside" }
        Meta {
            name: "description",
            content: "Neighborhoods covered by Curbside mobile auto repair."
        }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold", "Where we work" }
            p { class: "max-w-[640px] text-center",
                "We currently cover the areas below. Inside the coverage zone there is
                no travel fee; just outside it, book anyway and we'll confirm by phone
                whether we can make the trip."
            }
            ul { class: "grid grid-cols-1 sm:grid-cols-2 gap-2 w-full max-w-[480px]",
                for area in SERVICE_AREAS.iter() {
                    li { key: "{area}", class: "card bg-base-200 p-3 text-center",
                        "{area}"
                    }
                }
            }
            Link { to: Route::Booking {}, class: "btn btn-primary",
                "Book a Service"
            }
        }
    )
}
