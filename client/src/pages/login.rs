//! Login page with username + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::LoginRequest;

use crate::net::api::ApiError;
use crate::state::session::SessionState;

pub const HOME_PATH: &str = "/home";

/// Credentials go out exactly as typed; a blank username is refused.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

fn login_failure_message(err: &ApiError) -> String {
    err.describe("Login failed", "Error")
}

/// Login form. On success the username is stored in the session and the
/// visitor is sent to the home screen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let login_successful = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                login_successful.set(false);
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(resp) => {
                    login_successful.set(true);
                    message.set(resp.message);
                    crate::util::session_store::write_username(&credentials.username);
                    session.set(SessionState::logged_in(&credentials.username));
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    login_successful.set(false);
                    message.set(login_failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    let message_class = move || {
        if login_successful.get() { "login-message login-message--ok" } else { "login-message login-message--error" }
    };

    view! {
        <div class="login-container">
            <h2>"Login"</h2>
            <form on:submit=on_login>
                <div>
                    <label>"Username:"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
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
                    "Login"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class=message_class>{move || message.get()}</p>
            </Show>
            <p class="login-footer">
                "No account? "
                <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
