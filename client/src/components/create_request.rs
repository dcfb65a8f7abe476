//! Form for submitting a new service request.

#[cfg(test)]
#[path = "create_request_test.rs"]
mod create_request_test;

use leptos::prelude::*;
use serde_json::Value;
use wire::{NewServiceRequest, WireError};

use crate::net::api::ApiError;

const DEFAULT_ID: &str = "1";

fn created_message(response: &Value) -> String {
    format!("Request created successfully: {response}")
}

fn failed_message(err: &ApiError) -> String {
    err.describe("Error creating request", "Network error")
}

fn invalid_input_message(err: &WireError) -> String {
    let field = match err {
        WireError::InvalidId { field: "service_id", .. } => "Service ID",
        WireError::InvalidId { .. } => "Location ID",
    };
    format!("{field} must be a number.")
}

/// Create-request form.
///
/// Service and location ids default to `1`; urgency and notes are optional
/// and sent as `null` when blank. Fields reset after a successful submit and
/// `on_created` fires so the caller can refresh its request list.
#[component]
pub fn CreateRequest(#[prop(optional)] on_created: Option<Callback<()>>) -> impl IntoView {
    let service_id = RwSignal::new(DEFAULT_ID.to_owned());
    let description = RwSignal::new(String::new());
    let location_id = RwSignal::new(DEFAULT_ID.to_owned());
    let urgency_level = RwSignal::new(String::new());
    let additional_notes = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset = move || {
        service_id.set(DEFAULT_ID.to_owned());
        description.set(String::new());
        location_id.set(DEFAULT_ID.to_owned());
        urgency_level.set(String::new());
        additional_notes.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match NewServiceRequest::from_form(
            &service_id.get(),
            &description.get(),
            &location_id.get(),
            &urgency_level.get(),
            &additional_notes.get(),
        ) {
            Ok(body) => body,
            Err(e) => {
                message.set(invalid_input_message(&e));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_request(&body).await {
                Ok(response) => {
                    message.set(created_message(&response));
                    reset();
                    if let Some(cb) = on_created {
                        cb.run(());
                    }
                }
                Err(e) => message.set(failed_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="create-request-container">
            <h3>"Create a New Request"</h3>
            <form class="create-request-form" on:submit=on_submit>
                <label>
                    "Service ID:"
                    <input
                        type="number"
                        required=true
                        prop:value=move || service_id.get()
                        on:input=move |ev| service_id.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description:"
                    <textarea
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Location ID:"
                    <input
                        type="number"
                        required=true
                        prop:value=move || location_id.get()
                        on:input=move |ev| location_id.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Urgency Level (Optional):"
                    <input
                        type="text"
                        placeholder="e.g., High, Low"
                        prop:value=move || urgency_level.get()
                        on:input=move |ev| urgency_level.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Additional Notes (Optional):"
                    <textarea
                        prop:value=move || additional_notes.get()
                        on:input=move |ev| additional_notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Submit Request"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
