use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn EmergencyService() -> Element {
    rsx!(
        Title { "Emergency Service | Curbside" }
        Meta {
            name: "description",
            content: "Same-day emergency mobile auto repair: no-starts, dead batteries, and roadside fixes."
        }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold", "Emergency service" }
            div { class: "max-w-[640px] flex flex-col gap-2",
                p {
                    "Car won't start, battery is dead, or something is leaking? Emergency
                    bookings skip the normal scheduling grid: we dispatch the next free
                    technician rather than the next open slot."
                }
                p {
                    "Use the booking form and check the emergency option, or call the shop
                    directly if the car is blocking traffic."
                }
            }
            Link { to: Route::Booking {}, class: "btn btn-primary",
                "Request Emergency Service"
            }
        }
    )
}
