use super::*;

#[test]
fn right_view_defaults_to_create_request() {
    assert_eq!(RightView::default(), RightView::CreateRequest);
}

#[test]
fn right_view_button_labels_match_home_buttons() {
    let labels: Vec<&str> = RightView::ALL.iter().map(|v| v.button_label()).collect();
    assert_eq!(labels, vec!["Create new request", "Profile", "View Services"]);
}
