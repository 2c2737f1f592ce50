/// Per-process loop state. Lives exactly as long as the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    cursor: i64,
    last_status: Option<String>,
    last_error: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_status: None,
            last_error: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_new_status(&self, status: &str) -> bool {
        self.last_status.as_deref() != Some(status)
    }

    pub fn record_status(&mut self, status: impl Into<String>) {
        self.last_status = Some(status.into());
    }

    pub fn should_report_error(&self, message: &str) -> bool {
        self.last_error.as_deref() != Some(message)
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Keeps the current cursor when the server sent none.
    pub fn advance_cursor(&mut self, current_date: Option<i64>) {
        if let Some(current_date) = current_date {
            self.cursor = current_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_changes() {
        let mut state = PollState::new(0);
        assert!(state.is_new_status("reviewing"));

        state.record_status("reviewing");
        assert!(!state.is_new_status("reviewing"));
        assert!(state.is_new_status("approved"));
        assert_eq!(state.last_status(), Some("reviewing"));
    }

    #[test]
    fn test_error_reported_once_per_text() {
        let mut state = PollState::new(0);
        assert!(state.should_report_error("boom"));

        state.record_error("boom");
        assert!(!state.should_report_error("boom"));
        assert!(state.should_report_error("bang"));
    }

    #[test]
    fn test_cursor_advance() {
        let mut state = PollState::new(1_700_000_000);

        state.advance_cursor(None);
        assert_eq!(state.cursor(), 1_700_000_000);

        state.advance_cursor(Some(1_700_000_600));
        assert_eq!(state.cursor(), 1_700_000_600);
    }
}
