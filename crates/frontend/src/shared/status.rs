//! Status region state shared by both flows.
//!
//! A region shows at most one [`StatusMessage`]; every update replaces the
//! previous one.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Default text color
    Plain,
    Progress,
    Success,
    Error,
}

impl StatusTone {
    pub fn color(self) -> Option<&'static str> {
        match self {
            StatusTone::Plain => None,
            StatusTone::Progress => Some("blue"),
            StatusTone::Success => Some("green"),
            StatusTone::Error => Some("red"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBody {
    Text(String),
    /// Already escaped markup, inserted as HTML
    Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub body: StatusBody,
}

impl StatusMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(StatusTone::Plain, text)
    }

    pub fn progress(text: impl Into<String>) -> Self {
        Self::text(StatusTone::Progress, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::text(StatusTone::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::text(StatusTone::Error, text)
    }

    pub fn markup(html: impl Into<String>) -> Self {
        Self {
            tone: StatusTone::Plain,
            body: StatusBody::Markup(html.into()),
        }
    }

    fn text(tone: StatusTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            body: StatusBody::Text(text.into()),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        self.tone.color()
    }
}

/// Where a flow writes its feedback
pub trait StatusSink {
    fn show(&self, message: StatusMessage);
}

impl StatusSink for RwSignal<Option<StatusMessage>> {
    fn show(&self, message: StatusMessage) {
        self.set(Some(message));
    }
}

/// Terminal state of one flow run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Local validation failed, nothing was sent
    Rejected,
    Succeeded,
    ServerError,
    NetworkError,
}

/// Text shown for a server-reported failure
pub fn server_error_text(error: &str) -> String {
    format!("Error: {}", error)
}

/// Text shown when the request itself failed
pub fn network_error_text(detail: &str) -> String {
    format!("Error de red: {}", detail)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every message a flow shows
    #[derive(Default)]
    pub struct RecordingSink {
        pub shown: RefCell<Vec<StatusMessage>>,
    }

    impl RecordingSink {
        pub fn last(&self) -> Option<StatusMessage> {
            self.shown.borrow().last().cloned()
        }
    }

    impl StatusSink for RecordingSink {
        fn show(&self, message: StatusMessage) {
            self.shown.borrow_mut().push(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors() {
        assert_eq!(StatusMessage::success("OK").color(), Some("green"));
        assert_eq!(StatusMessage::error("x").color(), Some("red"));
        assert_eq!(StatusMessage::progress("...").color(), Some("blue"));
        assert_eq!(StatusMessage::plain("...").color(), None);
        assert_eq!(StatusMessage::markup("a<br>b").color(), None);
    }

    #[test]
    fn test_error_texts_differ() {
        assert_eq!(server_error_text("bad file"), "Error: bad file");
        assert_eq!(
            network_error_text("connection refused"),
            "Error de red: connection refused"
        );
    }
}
