use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Confirmation(appointment_id: i32) -> Element {
    rsx!(
        Title { "Booking Confirmed | Curbside" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "You're booked!" }
            p { class: "max-w-[560px] text-center",
                "Appointment #{appointment_id} is confirmed. You'll get a confirmation
                message shortly and a reminder the day before your appointment. The
                technician will call when they're on the way."
            }
            div { class: "flex gap-2",
                Link { to: Route::Profile {}, class: "btn btn-primary",
                    "View My Garage"
                }
                Link { to: Route::Landing {}, class: "btn btn-outline",
                    "Back to Home"
                }
            }
        }
    )
}
