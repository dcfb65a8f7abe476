//! Panel listing every service offered on the platform.

use leptos::prelude::*;
use wire::Service;

/// Service catalogue fetched from the backend on mount.
///
/// Fetch failures are logged and rendered as an empty catalogue.
#[component]
pub fn AllServices() -> impl IntoView {
    let services = LocalResource::new(|| async {
        crate::net::api::fetch_services().await.unwrap_or_else(|e| {
            leptos::logging::error!("Error fetching all services: {e}");
            Vec::new()
        })
    });

    view! {
        <div class="all-services-container">
            <h2>"All Services"</h2>
            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"No services found."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="services-list">
                                        {list
                                            .into_iter()
                                            .map(|service| view! { <ServiceCard service=service/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="service-card">
            <h3>{service.name}</h3>
            <p>{service.description.unwrap_or_default()}</p>
            <p>
                <strong>"Service id: "</strong>
                {service.service_id}
            </p>
        </div>
    }
}
