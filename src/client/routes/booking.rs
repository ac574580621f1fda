use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::model::appointment::SlotDto;
use crate::model::service::ServiceOperationDto;

fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[component]
pub fn Booking() -> Element {
    let nav = use_navigator();

    let mut services = use_signal(Vec::<ServiceOperationDto>::new);
    let mut slots = use_signal(Vec::<SlotDto>::new);

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut vehicle_year = use_signal(String::new);
    let mut vehicle_make = use_signal(String::new);
    let mut vehicle_model = use_signal(String::new);
    let mut service_address = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut selected_slot = use_signal(|| None::<chrono::NaiveDateTime>);
    let mut selected_services = use_signal(Vec::<i32>::new);
    let mut emergency = use_signal(|| false);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Load the service catalog on page load
    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_services;

        let future = use_resource(|| async move { get_services().await });

        match &*future.read_unchecked() {
            Some(Ok(catalog)) => {
                if services.read().len() != catalog.len() {
                    services.set(catalog.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load service catalog: {}", err);
            }
            None => (),
        }
    }

    // Refetch open slots whenever the chosen date changes
    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_availability;

        let future = use_resource(move || async move {
            let date = date();
            if date.is_empty() {
                return Ok(Vec::new());
            }

            get_availability(&date).await.map(|a| a.slots)
        });

        match &*future.read_unchecked() {
            Some(Ok(day_slots)) => {
                if *slots.read() != *day_slots {
                    slots.set(day_slots.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load availability: {}", err);
            }
            None => (),
        }
    }

    let submit = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::router::Route;
            use crate::client::util::api::create_booking;
            use crate::model::appointment::BookingRequestDto;

            let scheduled_at = match selected_slot() {
                Some(slot) => slot,
                None => {
                    error.set(Some("Pick an open time slot first".to_string()));
                    return;
                }
            };

            let year = match vehicle_year().parse::<i16>() {
                Ok(year) => year,
                Err(_) => {
                    error.set(Some("Vehicle year must be a number".to_string()));
                    return;
                }
            };

            let request = BookingRequestDto {
                first_name: first_name(),
                last_name: last_name(),
                email: if email().is_empty() { None } else { Some(email()) },
                phone: phone(),
                vehicle_year: year,
                vehicle_make: vehicle_make(),
                vehicle_model: vehicle_model(),
                service_address: service_address(),
                scheduled_at,
                service_ids: selected_services(),
                emergency: emergency(),
                notes: if notes().is_empty() { None } else { Some(notes()) },
            };

            spawn(async move {
                match create_booking(&request).await {
                    Ok(appointment) => {
                        nav.push(Route::Confirmation {
                            appointment_id: appointment.id,
                        });
                    }
                    Err(err) => {
                        error.set(Some(err));
                    }
                }
            });
        }
    };

    rsx!(
        Title { "Book a Service | Curbside" }
        Meta {
            name: "description",
            content: "Book a mobile auto-repair appointment at your home or office."
        }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold", "Book a service" }

            if let Some(message) = error() {
                div { class: "alert alert-error max-w-[640px]", "{message}" }
            }

            div { class: "flex flex-col gap-4 w-full max-w-[640px]",
                fieldset { class: "card bg-base-200 p-4 flex flex-col gap-2",
                    legend { class: "font-semibold", "Services" }
                    {services().into_iter().map(|service| {
                        let service_id = service.id;
                        let price = format_price(service.price_cents);

                        rsx! {
                            label { key: "{service_id}", class: "flex items-center gap-2",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: selected_services.read().contains(&service_id),
                                    onchange: move |_| {
                                        let mut selected = selected_services.write();
                                        match selected.iter().position(|&id| id == service_id) {
                                            Some(index) => {
                                                selected.remove(index);
                                            }
                                            None => selected.push(service_id),
                                        }
                                    },
                                }
                                span { "{service.name}" }
                                span { class: "text-sm opacity-70",
                                    "{price} · {service.duration_minutes} min"
                                }
                            }
                        }
                    })}
                }

                fieldset { class: "card bg-base-200 p-4 flex flex-col gap-2",
                    legend { class: "font-semibold", "When & where" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{date}",
                        oninput: move |evt| date.set(evt.value()),
                    }
                    div { class: "flex flex-wrap gap-2",
                        {slots().into_iter().map(|slot| {
                            let starts_at = slot.starts_at;
                            let time = starts_at.format("%H:%M").to_string();
                            let class = if selected_slot() == Some(starts_at) {
                                "btn btn-sm btn-primary"
                            } else if slot.available {
                                "btn btn-sm btn-outline"
                            } else {
                                "btn btn-sm btn-disabled"
                            };

                            rsx! {
                                button {
                                    key: "{starts_at}",
                                    class: class,
                                    disabled: !slot.available,
                                    onclick: move |_| selected_slot.set(Some(starts_at)),
                                    "{time}"
                                }
                            }
                        })}
                    }
                    input {
                        class: "input",
                        placeholder: "Service address",
                        value: "{service_address}",
                        oninput: move |evt| service_address.set(evt.value()),
                    }
                    label { class: "flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: emergency(),
                            onchange: move |evt| emergency.set(evt.checked()),
                        }
                        span { "This is an emergency (skip the normal schedule)" }
                    }
                }

                fieldset { class: "card bg-base-200 p-4 flex flex-col gap-2",
                    legend { class: "font-semibold", "Contact & vehicle" }
                    div { class: "flex gap-2",
                        input {
                            class: "input w-1/2",
                            placeholder: "First name",
                            value: "{first_name}",
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                        input {
                            class: "input w-1/2",
                            placeholder: "Last name",
                            value: "{last_name}",
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                    input {
                        class: "input",
                        placeholder: "Phone",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    input {
                        class: "input",
                        placeholder: "Email (optional)",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
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
                    }
                    textarea {
                        class: "textarea",
                        placeholder: "Anything we should know? (optional)",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                }

                button { class: "btn btn-primary", onclick: submit,
                    "Book Appointment"
                }
            }
        }
    )
}
