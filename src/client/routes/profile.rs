use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, router::Route};
use crate::model::customer::CustomerMatchDto;

#[component]
pub fn Profile() -> Element {
    let mut profile = use_signal(|| None::<CustomerMatchDto>);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut vehicle_year = use_signal(String::new);
    let mut vehicle_make = use_signal(String::new);
    let mut vehicle_model = use_signal(String::new);

    // Load the signed-in customer's profile; a 404 just means nobody has
    // booked from this browser yet.
    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_profile;

        let future = use_resource(|| async move { get_profile().await });

        match &*future.read_unchecked() {
            Some(Ok(fetched)) => {
                if !loaded() {
                    profile.set(fetched.clone());
                    loaded.set(true);
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load profile: {}", err);
            }
            None => (),
        }
    }

    let add_vehicle = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::{add_vehicle, get_profile};
            use crate::model::customer::NewVehicleDto;

            let year = match vehicle_year().parse::<i16>() {
                Ok(year) => year,
                Err(_) => {
                    error.set(Some("Vehicle year must be a number".to_string()));
                    return;
                }
            };

            let request = NewVehicleDto {
                year,
                make: vehicle_make(),
                model: vehicle_model(),
                license_plate: None,
                vin: None,
                notes: None,
            };

            spawn(async move {
                match add_vehicle(&request).await {
                    Ok(_) => match get_profile().await {
                        Ok(fetched) => {
                            profile.set(fetched);
                            vehicle_year.set(String::new());
                            vehicle_make.set(String::new());
                            vehicle_model.set(String::new());
                        }
                        Err(err) => error.set(Some(err)),
                    },
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx!(
        Title { "My Garage | Curbside" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold", "My garage" }

            if let Some(message) = error() {
                div { class: "alert alert-error max-w-[640px]", "{message}" }
            }

            if let Some(data) = profile() {
                div { class: "flex flex-col gap-4 w-full max-w-[640px]",
                    div { class: "card bg-base-200 p-4",
                        h2 { class: "font-semibold", "Contact" }
                        p { "{data.customer.first_name} {data.customer.last_name}" }
                        p { "{data.customer.phone}" }
                        if let Some(email) = data.customer.email.clone() {
                            p { "{email}" }
                        }
                    }

                    div { class: "card bg-base-200 p-4 flex flex-col gap-2",
                        h2 { class: "font-semibold", "Vehicles" }
                        {data.vehicles.clone().into_iter().map(|vehicle| {
                            let vehicle_id = vehicle.id;

                            rsx! {
                                div { key: "{vehicle_id}", class: "flex items-center justify-between",
                                    span { "{vehicle.label}" }
                                    button {
                                        class: "btn btn-sm btn-ghost",
                                        onclick: move |_| {
                                            #[cfg(feature = "web")]
                                            {
                                                use crate::client::util::api::{delete_vehicle, get_profile};

                                                spawn(async move {
                                                    match delete_vehicle(vehicle_id).await {
                                                        Ok(()) => {
                                                            if let Ok(fetched) = get_profile().await {
                                                                profile.set(fetched);
                                                            }
                                                        }
                                                        Err(err) => error.set(Some(err)),
                                                    }
                                                });
                                            }
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        })}
                        div { class: "flex gap-2",
                            input {
                                class: "input w-1/4",
                                placeholder: "Year",
                                value: "{vehicle_year}",
                                oninput: move |evt| vehicle_year.set(evt.value()),
                            }
                            input {
                                class: "input w-1/3",
                                placeholder: "Make",
                                value: "{vehicle_make}",
                                oninput: move |evt| vehicle_make.set(evt.value()),
                            }
                            input {
                                class: "input w-1/3",
                                placeholder: "Model",
                                value: "{vehicle_model}",
                                oninput: move |evt| vehicle_model.set(evt.value()),
                            }
                            button { class: "btn btn-primary", onclick: add_vehicle,
                                "Add"
                            }
                        }
                    }
                }
            } else {
                div { class: "flex flex-col items-center gap-2",
                    p { "Book an appointment to set up your garage." }
                    Link { to: Route::Booking {}, class: "btn btn-primary",
                        "Book a Service"
                    }
                }
            }
        }
    )
}
