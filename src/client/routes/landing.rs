use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Landing() -> Element {
    rsx!(
        Title { "Curbside Mobile Auto Repair" }
        Meta {
            name: "description",
            content: "Mobile auto repair that comes to your driveway. Oil changes, brakes, diagnostics, and more."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-[720px] text-center",
                h1 { class: "text-4xl font-bold",
                    "We bring the shop to you"
                }
                p { class: "text-lg",
                    "Curbside is a fully mobile auto-repair service. Pick a time, tell us
                    where your car is parked, and a technician shows up with everything
                    needed for the job. No waiting rooms, no shuttle rides."
                }
                div { class: "flex gap-2",
                    Link { to: Route::Booking {}, class: "btn btn-primary w-40",
                        "Book a Service"
                    }
                    Link { to: Route::ServiceAreas {}, class: "btn btn-outline w-40",
                        "Where We Work"
                    }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4 mt-8 w-full",
                    div { class: "card bg-base-200 p-4",
                        h2 { class: "font-semibold", "Routine maintenance" }
                        p { "Oil changes, filters, fluids, and inspections at your home or office." }
                    }
                    div { class: "card bg-base-200 p-4",
                        h2 { class: "font-semibold", "Brakes & diagnostics" }
                        p { "Pads, rotors, check-engine lights, and pre-purchase inspections." }
                    }
                    div { class: "card bg-base-200 p-4",
                        h2 { class: "font-semibold", "Emergency calls" }
                        p { "Dead battery or a no-start in the driveway? We take same-day emergency bookings." }
                    }
                }
            }
        }
    )
}
