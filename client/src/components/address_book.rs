//! Saved service locations with add and delete actions.
//!
//! Location ids shown here are the values the create-request form expects.

#[cfg(test)]
#[path = "address_book_test.rs"]
mod address_book_test;

use leptos::prelude::*;
use wire::{Address, NewAddress};

use crate::net::api::ApiError;

const ADDRESS_REQUIRED: &str = "Please provide both address and pincode.";

fn validate_new_address(address: &str, pincode: &str) -> Result<NewAddress, &'static str> {
    let address = address.trim();
    let pincode = pincode.trim();
    if address.is_empty() || pincode.is_empty() {
        return Err(ADDRESS_REQUIRED);
    }
    Ok(NewAddress { address: address.to_owned(), pincode: pincode.to_owned() })
}

fn address_error_message(action: &str, err: &ApiError) -> String {
    err.describe(&format!("Failed to {action} address"), &format!("Error trying to {action} address"))
}

/// Address list plus a form to save a new one.
#[component]
pub fn AddressBook() -> impl IntoView {
    let addresses = LocalResource::new(|| crate::net::api::fetch_addresses());
    let new_address = RwSignal::new(String::new());
    let new_pincode = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_new_address(&new_address.get(), &new_pincode.get()) {
            Ok(body) => body,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::add_address(&body).await {
                Ok(_) => {
                    new_address.set(String::new());
                    new_pincode.set(String::new());
                    message.set("Address added successfully!".to_owned());
                    addresses.refetch();
                }
                Err(e) => message.set(address_error_message("add", &e)),
            }
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |location_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_address(location_id).await {
                Ok(()) => {
                    message.set(format!("Address {location_id} removed."));
                    addresses.refetch();
                }
                Err(e) => message.set(address_error_message("delete", &e)),
            }
        });
    });

    view! {
        <div class="address-book">
            <h3>"My Addresses"</h3>
            <Suspense fallback=move || view! { <p>"Loading addresses..."</p> }>
                {move || {
                    addresses
                        .get()
                        .map(|loaded| match loaded {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No addresses found. Add one below."</p> }.into_any()
                            }
                            Ok(list) => view! { <AddressTable list=list on_delete=on_delete/> }.into_any(),
                            Err(e) => {
                                view! { <p class="message">{address_error_message("load", &e)}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
            <form class="address-form" on:submit=on_add>
                <label>
                    "Full Address:"
                    <textarea
                        prop:value=move || new_address.get()
                        on:input=move |ev| new_address.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Pincode:"
                    <input
                        type="text"
                        prop:value=move || new_pincode.get()
                        on:input=move |ev| new_pincode.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Add Address"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="message">{move || message.get()}</p>
            </Show>
        </div>
    }
}

#[component]
fn AddressTable(list: Vec<Address>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <table class="address-table">
            <thead>
                <tr>
                    <th>"Location ID"</th>
                    <th>"Address"</th>
                    <th>"Pincode"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|addr| {
                        let location_id = addr.location_id;
                        view! {
                            <tr>
                                <td>{location_id}</td>
                                <td>{addr.address}</td>
                                <td>{addr.pincode.unwrap_or_default()}</td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_delete.run(location_id)>
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
