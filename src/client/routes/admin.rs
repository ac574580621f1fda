use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::model::appointment::AppointmentDto;

#[component]
pub fn AdminDashboard() -> Element {
    let token = use_signal(|| None::<String>);
    let display_name = use_signal(String::new);

    rsx!(
        Title { "Dashboard | Curbside" }
        Page { class: "flex flex-col items-center gap-4",
            if token().is_some() {
                AppointmentBoard { token, display_name }
            } else {
                LoginCard { token, display_name }
            }
        }
    )
}

#[component]
fn LoginCard(token: Signal<Option<String>>, display_name: Signal<String>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::admin_login;
            use crate::model::auth::AdminLoginDto;

            let request = AdminLoginDto {
                username: username(),
                password: password(),
            };

            let mut token = token;
            let mut display_name = display_name;

            spawn(async move {
                match admin_login(&request).await {
                    Ok(issued) => {
                        display_name.set(issued.display_name);
                        token.set(Some(issued.token));
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx!(
        div { class: "card bg-base-200 p-4 flex flex-col gap-2 w-full max-w-96",
            h1 { class: "text-xl font-bold", "Dispatch login" }

            if let Some(message) = error() {
                div { class: "alert alert-error", "{message}" }
            }

            input {
                class: "input",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "password",
                class: "input",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            button { class: "btn btn-primary", onclick: submit,
                "Sign In"
            }
        }
    )
}

#[component]
fn AppointmentBoard(token: Signal<Option<String>>, display_name: Signal<String>) -> Element {
    let mut appointments = use_signal(Vec::<AppointmentDto>::new);
    let mut date = use_signal(String::new);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| None::<String>);

    // Reload the board whenever the date changes or a status update bumps
    // the refresh counter.
    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_admin_appointments;

        let future = use_resource(move || async move {
            let _ = refresh();
            let date = date();
            let token = token();

            let (Some(token), false) = (token, date.is_empty()) else {
                return Ok(Vec::new());
            };

            get_admin_appointments(&token, &date).await
        });

        match &*future.read_unchecked() {
            Some(Ok(day_appointments)) => {
                if *appointments.read() != *day_appointments {
                    appointments.set(day_appointments.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load appointments: {}", err);
            }
            None => (),
        }
    }

    rsx!(
        div { class: "flex flex-col gap-4 w-full max-w-[960px]",
            div { class: "flex items-center justify-between",
                h1 { class: "text-xl font-bold", "Appointments" }
                p { "Signed in as {display_name}" }
            }

            if let Some(message) = error() {
                div { class: "alert alert-error", "{message}" }
            }

            input {
                r#type: "date",
                class: "input",
                value: "{date}",
                oninput: move |evt| date.set(evt.value()),
            }

            table { class: "table",
                thead {
                    tr {
                        th { "Time" }
                        th { "Customer" }
                        th { "Vehicle" }
                        th { "Address" }
                        th { "Status" }
                    }
                }
                tbody {
                    {appointments().into_iter().map(|appointment| {
                        let appointment_id = appointment.id;
                        let time = appointment.scheduled_at.format("%H:%M").to_string();
                        let transitions = appointment.allowed_transitions.clone();

                        rsx! {
                            tr { key: "{appointment_id}",
                                td { "{time}" }
                                td { "{appointment.customer_name}" }
                                td { "{appointment.vehicle.label}" }
                                td { "{appointment.service_address}" }
                                td {
                                    // Current status plus the transitions the
                                    // server allows from it.
                                    select {
                                        class: "select select-sm",
                                        onchange: move |evt| {
                                            #[cfg(feature = "web")]
                                            {
                                                use crate::client::util::api::update_appointment_status;

                                                let target = evt.value();
                                                let token = token();

                                                spawn(async move {
                                                    let Some(token) = token else {
                                                        return;
                                                    };

                                                    match update_appointment_status(
                                                        &token,
                                                        appointment_id,
                                                        &target,
                                                    )
                                                    .await
                                                    {
                                                        Ok(_) => refresh.set(refresh() + 1),
                                                        Err(err) => error.set(Some(err)),
                                                    }
                                                });
                                            }
                                        },
                                        option { selected: true, value: "{appointment.status}",
                                            "{appointment.status}"
                                        }
                                        for next in transitions {
                                            option { key: "{next}", value: "{next}", "{next}" }
                                        }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    )
}
