//! Local UI chrome state (toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state (`wires`,
//! `wireflows`) so the notification surface can be shared by every route.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Sequence number of the `notify` call that produced this notice.
    pub seq: u64,
}

/// UI state shared across routes via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl UiState {
    /// Show `message`, replacing any current notice. Returns its sequence
    /// number for a later [`UiState::dismiss`].
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, message: message.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Clear the notice only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
