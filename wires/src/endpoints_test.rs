use super::*;
use crate::execute::Inputs;

#[test]
fn new_trims_trailing_slashes() {
    let endpoints = Endpoints::new("https://api.example.com/v1//");
    assert_eq!(endpoints.base(), "https://api.example.com/v1");
    assert_eq!(endpoints.wires(), "https://api.example.com/v1/wires/");
}

#[test]
fn blank_base_uses_default() {
    assert_eq!(Endpoints::new("  ").base(), DEFAULT_API_BASE_URL);
    assert_eq!(Endpoints::default().base(), DEFAULT_API_BASE_URL);
}

#[test]
fn collection_and_item_paths() {
    let endpoints = Endpoints::new("http://h");
    assert_eq!(endpoints.wire("w1"), "http://h/wires/w1");
    assert_eq!(endpoints.wire_execute(), "http://h/wires/execute");
    assert_eq!(endpoints.wireflows(), "http://h/wireflows/");
    assert_eq!(endpoints.wireflow("f1"), "http://h/wireflows/f1");
    assert_eq!(endpoints.wireflow_execute(), "http://h/wireflows/execute");
}

#[test]
fn item_ids_are_percent_encoded() {
    let endpoints = Endpoints::new("http://h");
    assert_eq!(endpoints.wire("my wire/v2"), "http://h/wires/my%20wire%2Fv2");
    assert_eq!(endpoints.wireflow("a~b.c-d_e"), "http://h/wireflows/a~b.c-d_e");
    assert_eq!(endpoints.wire("é"), "http://h/wires/%C3%A9");
}

#[test]
fn execute_picks_endpoint_by_request_kind() {
    let endpoints = Endpoints::new("http://h");
    let wire = ExecuteRequest::Wire { wire_id: "w".to_owned(), inputs: Inputs::new() };
    let flow = ExecuteRequest::Wireflow { wireflow_id: "f".to_owned(), inputs: Inputs::new() };
    assert_eq!(endpoints.execute(&wire), "http://h/wires/execute");
    assert_eq!(endpoints.execute(&flow), "http://h/wireflows/execute");
}
