//! Card summarizing one of the user's service requests.

#[cfg(test)]
#[path = "request_card_test.rs"]
mod request_card_test;

use leptos::prelude::*;
use wire::{RequestStatus, ServiceRequest};

use crate::util::format::{display_timestamp, or_na};

fn request_heading(request_id: i64) -> String {
    format!("Request #{request_id}")
}

/// Class list for the status badge, e.g. `status pending`.
fn status_badge_class(status: &str) -> String {
    format!("status {}", RequestStatus::from_status(status).css_class())
}

/// Card with id, status badge, service, description, creation time and the
/// assigned worker when there is one.
#[component]
pub fn RequestCard(request: ServiceRequest) -> impl IntoView {
    let heading = request_heading(request.request_id);
    let badge_class = status_badge_class(&request.status);
    let created = display_timestamp(&request.created_at);
    let description = or_na(request.description.as_deref());

    view! {
        <div class="request-card">
            <div class="request-header">
                <span class="request-id">{heading}</span>
                <span class=badge_class>{request.status}</span>
            </div>
            <div class="request-body">
                <p>
                    <strong>"Service ID:"</strong>
                    " "
                    {request.service_id}
                </p>
                <p>
                    <strong>"Description:"</strong>
                    " "
                    {description}
                </p>
                <p>
                    <strong>"Created At:"</strong>
                    " "
                    {created}
                </p>
                {request.worker_id.map(|worker_id| {
                    view! {
                        <p>
                            <strong>"Worker ID:"</strong>
                            " "
                            {worker_id}
                        </p>
                    }
                })}
            </div>
        </div>
    }
}
