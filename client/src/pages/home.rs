//! Home page: the user's requests on the left, a switchable panel on the right.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::ServiceRequest;

use crate::components::all_services::AllServices;
use crate::components::create_request::CreateRequest;
use crate::components::profile::Profile;
use crate::components::request_card::RequestCard;
use crate::state::home::RightView;
use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect};

/// Newest requests first; ties keep backend order.
fn sort_newest_first(mut requests: Vec<ServiceRequest>) -> Vec<ServiceRequest> {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    requests
}

/// Home page. Redirects to login when no session username is known.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let requests = LocalResource::new(|| async {
        crate::net::api::fetch_requests().await.map_or_else(
            |e| {
                leptos::logging::error!("Error fetching requests: {e}");
                Vec::new()
            },
            sort_newest_first,
        )
    });
    let on_created = Callback::new(move |()| requests.refetch());

    let active = RwSignal::new(RightView::default());

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::logout().await {
                Ok(()) => {
                    crate::util::session_store::clear_username();
                    session.set(SessionState::logged_out());
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => leptos::logging::error!("Error during logout: {e}"),
            }
        });
    };

    view! {
        <div class="home-container">
            <div class="left-section">
                <h2>{move || session.get().greeting()}</h2>
                <div class="button-row">
                    {RightView::ALL
                        .into_iter()
                        .map(|panel| {
                            view! {
                                <button
                                    class:active=move || active.get() == panel
                                    on:click=move |_| active.set(panel)
                                >
                                    {panel.button_label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button on:click=on_logout>"Logout"</button>
                </div>

                <div class="requests-header">
                    <h3>"Your Requests:"</h3>
                    <button class="btn btn--small" on:click=move |_| requests.refetch()>
                        "Refresh"
                    </button>
                </div>
                <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                    {move || {
                        requests
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No requests found."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="requests-list">
                                            {list
                                                .into_iter()
                                                .map(|request| view! { <RequestCard request=request/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <div class="right-section">
                {move || match active.get() {
                    RightView::CreateRequest => view! { <CreateRequest on_created=on_created/> }.into_any(),
                    RightView::Profile => {
                        view! {
                            <div class="view-container">
                                <Profile/>
                            </div>
                        }
                            .into_any()
                    }
                    RightView::Services => {
                        view! {
                            <div class="view-container">
                                <AllServices/>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
