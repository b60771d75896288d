use super::*;

#[test]
fn ui_state_default_has_no_notice() {
    let state = UiState::default();
    assert!(state.notice.is_none());
    assert_eq!(state.notice_seq, 0);
}

#[test]
fn notice_kind_default_is_success() {
    assert_eq!(NoticeKind::default(), NoticeKind::Success);
}

#[test]
fn notify_replaces_previous_notice() {
    let mut state = UiState::default();
    let first = state.notify(NoticeKind::Success, "Wire saved");
    let second = state.notify(NoticeKind::Error, "Failed to delete wire");
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    let notice = state.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to delete wire");
    assert_eq!(notice.seq, 2);
}

#[test]
fn dismiss_ignores_stale_sequence() {
    let mut state = UiState::default();
    let stale = state.notify(NoticeKind::Success, "one");
    state.notify(NoticeKind::Success, "two");
    state.dismiss(stale);
    assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("two"));
}

#[test]
fn dismiss_clears_current_notice() {
    let mut state = UiState::default();
    let seq = state.notify(NoticeKind::Success, "saved");
    state.dismiss(seq);
    assert!(state.notice.is_none());
}
