//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use wire::SignupRequest;

use crate::net::api::ApiError;
use crate::util::auth::LOGIN_PATH;

const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

fn validate_signup_input(
    username: &str,
    email: &str,
    mobile: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let (username, email, mobile) = (username.trim(), email.trim(), mobile.trim());
    if username.is_empty() || email.is_empty() || mobile.is_empty() || password.is_empty() {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        mobile: mobile.to_owned(),
        password: password.to_owned(),
    })
}

fn signup_failure_message(err: &ApiError) -> String {
    err.describe("Registration failed", "Error connecting to the server")
}

/// Registration form. A successful signup clears the form and points the
/// visitor back to login.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let registered = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let details = match validate_signup_input(&username.get(), &email.get(), &mobile.get(), &password.get()) {
            Ok(details) => details,
            Err(msg) => {
                registered.set(false);
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&details).await {
                Ok(resp) => {
                    registered.set(true);
                    message.set(resp.message);
                    username.set(String::new());
                    email.set(String::new());
                    mobile.set(String::new());
                    password.set(String::new());
                }
                Err(e) => {
                    registered.set(false);
                    message.set(signup_failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    let message_class = move || {
        if registered.get() { "login-message login-message--ok" } else { "login-message login-message--error" }
    };

    view! {
        <div class="login-container">
            <h2>"Register"</h2>
            <form on:submit=on_signup>
                <div>
                    <label>"Username:"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label>"Email:"</label>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label>"Mobile:"</label>
                    <input
                        type="tel"
                        required=true
                        prop:value=move || mobile.get()
                        on:input=move |ev| mobile.set(event_target_value(&ev))
                    />
                    <label>"Password:"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class=message_class>{move || message.get()}</p>
            </Show>
            <p class="login-footer">
                <a href=LOGIN_PATH>"Back to Login"</a>
            </p>
        </div>
    }
}
