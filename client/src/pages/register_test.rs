use super::*;

#[test]
fn validate_signup_input_trims_contact_fields() {
    assert_eq!(
        validate_signup_input(" carol ", " carol@example.com", "98765 ", "pw"),
        Ok(SignupRequest {
            username: "carol".to_owned(),
            email: "carol@example.com".to_owned(),
            mobile: "98765".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@b.c", "1", "pw"), Err(ALL_FIELDS_REQUIRED));
    assert_eq!(validate_signup_input("u", " ", "1", "pw"), Err(ALL_FIELDS_REQUIRED));
    assert_eq!(validate_signup_input("u", "a@b.c", "", "pw"), Err(ALL_FIELDS_REQUIRED));
    assert_eq!(validate_signup_input("u", "a@b.c", "1", ""), Err(ALL_FIELDS_REQUIRED));
}

#[test]
fn signup_failure_message_reports_duplicate_email() {
    let err = ApiError::Http { status: 400, detail: Some("Email already registered".to_owned()) };
    assert_eq!(signup_failure_message(&err), "Registration failed: Email already registered");
}

#[test]
fn signup_failure_message_prefixes_network_errors() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(signup_failure_message(&err), "Error connecting to the server: Failed to fetch");
}
