use super::*;

#[test]
fn created_message_embeds_compact_json() {
    let response = serde_json::json!({ "data": { "request_id": 9 } });
    assert_eq!(created_message(&response), r#"Request created successfully: {"data":{"request_id":9}}"#);
}

#[test]
fn failed_message_uses_backend_detail() {
    let err = ApiError::Http { status: 401, detail: Some("Unauthorized".to_owned()) };
    assert_eq!(failed_message(&err), "Error creating request: Unauthorized");
}

#[test]
fn failed_message_reports_unknown_error_without_detail() {
    let err = ApiError::Http { status: 500, detail: None };
    assert_eq!(failed_message(&err), "Error creating request: Unknown error");
}

#[test]
fn failed_message_reports_network_errors() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(failed_message(&err), "Network error: Failed to fetch");
}

#[test]
fn invalid_input_message_names_offending_field() {
    let err = WireError::InvalidId { field: "service_id", value: "x".to_owned() };
    assert_eq!(invalid_input_message(&err), "Service ID must be a number.");

    let err = WireError::InvalidId { field: "location_id", value: "".to_owned() };
    assert_eq!(invalid_input_message(&err), "Location ID must be a number.");
}
