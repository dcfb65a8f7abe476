//! Panel showing the logged-in user's account details and saved addresses.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use wire::{Profile as ProfileDetails, ProfileUpdate};

use crate::components::address_book::AddressBook;
use crate::net::api::ApiError;

const CONTACT_REQUIRED: &str = "Please provide both email and mobile.";
const UPDATED: &str = "Profile updated successfully!";

fn validate_profile_update(email: &str, mobile: &str) -> Result<ProfileUpdate, &'static str> {
    let email = email.trim();
    let mobile = mobile.trim();
    if email.is_empty() || mobile.is_empty() {
        return Err(CONTACT_REQUIRED);
    }
    Ok(ProfileUpdate { email: email.to_owned(), mobile: mobile.to_owned() })
}

fn update_failure_message(err: &ApiError) -> String {
    err.describe("Failed to update profile", "Error updating profile")
}

/// Account details fetched from the backend on mount.
///
/// A failed fetch is logged and shown as "No profile data available.".
/// A successful contact update re-fetches the details.
#[component]
pub fn Profile() -> impl IntoView {
    let details = LocalResource::new(|| async {
        crate::net::api::fetch_profile()
            .await
            .map_err(|e| leptos::logging::error!("Error fetching profile details: {e}"))
            .ok()
    });
    let message = RwSignal::new(String::new());
    let on_saved = Callback::new(move |()| details.refetch());

    view! {
        <div class="profile-container">
            <h3>"Profile"</h3>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    details
                        .get()
                        .map(|loaded| match loaded {
                            Some(profile) => {
                                view! {
                                    <ProfileDetailsView profile=profile.clone()/>
                                    <ContactEditor profile=profile message=message on_saved=on_saved/>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"No profile data available."</p> }.into_any(),
                        })
                }}
            </Suspense>
            <Show when=move || !message.get().is_empty()>
                <p class="message">{move || message.get()}</p>
            </Show>
            <AddressBook/>
        </div>
    }
}

#[component]
fn ProfileDetailsView(profile: ProfileDetails) -> impl IntoView {
    view! {
        <div class="profile-details">
            <p>
                <strong>"User ID:"</strong>
                " "
                {profile.user_id}
            </p>
            <p>
                <strong>"Username:"</strong>
                " "
                {profile.username}
            </p>
            <p>
                <strong>"Email:"</strong>
                " "
                {profile.email}
            </p>
            <p>
                <strong>"Mobile:"</strong>
                " "
                {profile.mobile}
            </p>
        </div>
    }
}

/// Email and mobile form, prefilled from the loaded profile.
#[component]
fn ContactEditor(profile: ProfileDetails, message: RwSignal<String>, on_saved: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(profile.email);
    let mobile = RwSignal::new(profile.mobile);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_profile_update(&email.get(), &mobile.get()) {
            Ok(body) => body,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&body).await {
                Ok(_) => {
                    message.set(UPDATED.to_owned());
                    on_saved.run(());
                }
                Err(e) => message.set(update_failure_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <label>
                "Email:"
                <input
                    type="email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Mobile:"
                <input
                    type="text"
                    required=true
                    prop:value=move || mobile.get()
                    on:input=move |ev| mobile.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || busy.get()>
                "Update Profile"
            </button>
        </form>
    }
}
