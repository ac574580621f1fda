use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaWrench;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Landing {},
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaWrench
                        }
                        p { class: "text-xl",
                            "Curbside"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex items-center gap-2",
                    li {
                        Link { to: Route::ServiceAreas {}, class: "btn btn-ghost",
                            "Service Areas"
                        }
                    }
                    li {
                        Link { to: Route::EmergencyService {}, class: "btn btn-ghost",
                            "Emergency"
                        }
                    }
                    li {
                        Link { to: Route::Profile {}, class: "btn btn-ghost",
                            "My Garage"
                        }
                    }
                    li {
                        Link { to: Route::Booking {}, class: "btn btn-primary",
                            "Book Now"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
