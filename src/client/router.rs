use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        AdminDashboard, Booking, Confirmation, EmergencyService, Landing, NotFound, Profile,
        ServiceAreas,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Landing {},

    #[route("/booking")]
    Booking {},

    #[route("/confirmation/:appointment_id")]
    Confirmation { appointment_id: i32 },

    #[route("/service-areas")]
    ServiceAreas {},

    #[route("/emergency")]
    EmergencyService {},

    #[route("/profile")]
    Profile {},

    #[route("/admin")]
    AdminDashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
