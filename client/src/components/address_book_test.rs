use super::*;

#[test]
fn validate_new_address_trims_fields() {
    assert_eq!(
        validate_new_address("  12 Main St ", " 560001 "),
        Ok(NewAddress { address: "12 Main St".to_owned(), pincode: "560001".to_owned() })
    );
}

#[test]
fn validate_new_address_requires_both_fields() {
    assert_eq!(validate_new_address("", "560001"), Err(ADDRESS_REQUIRED));
    assert_eq!(validate_new_address("12 Main St", "  "), Err(ADDRESS_REQUIRED));
}

#[test]
fn address_error_message_formats_http_and_network_failures() {
    let http = ApiError::Http { status: 404, detail: Some("Address not found or unauthorized".to_owned()) };
    assert_eq!(address_error_message("delete", &http), "Failed to delete address: Address not found or unauthorized");

    let net = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(address_error_message("add", &net), "Error trying to add address: Failed to fetch");
}
