use super::*;

#[test]
fn tokens_encode_source_kind() {
    assert_eq!(drag_token(&DragSource::Available("summarize".to_owned())), "available:summarize");
    assert_eq!(drag_token(&DragSource::Selected(3)), "selected:3");
}

#[test]
fn tokens_decode_back_to_source() {
    assert_eq!(parse_drag_token("available:a:b"), Some(DragSource::Available("a:b".to_owned())));
    assert_eq!(parse_drag_token("selected:0"), Some(DragSource::Selected(0)));
}

#[test]
fn foreign_payloads_are_rejected() {
    assert_eq!(parse_drag_token(""), None);
    assert_eq!(parse_drag_token("available:"), None);
    assert_eq!(parse_drag_token("selected:-1"), None);
    assert_eq!(parse_drag_token("selected:x"), None);
    assert_eq!(parse_drag_token("https://example.com"), None);
}
