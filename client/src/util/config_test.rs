#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn new_normalizes_base_url() {
    let config = ApiConfig::new("https://wires.example.com/");
    assert_eq!(config.base_url(), "https://wires.example.com");
    assert_eq!(config.endpoints().wires(), "https://wires.example.com/wires/");
}

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn detect_returns_a_usable_base_outside_the_browser() {
    let config = ApiConfig::detect();
    assert!(config.base_url().starts_with("http"));
}
