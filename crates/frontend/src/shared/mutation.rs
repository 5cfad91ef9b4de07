//! Submit state of a single mutation flow (create, edit, delete, bulk action).
//!
//! `idle -> submitting -> idle`; a failed submit leaves an error message and
//! the surrounding dialog open.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationState {
    submitting: bool,
    error: Option<String>,
}

impl MutationState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `submitting`. Returns false if a submit is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut state = MutationState::default();
        assert!(state.try_begin());
        assert!(state.is_submitting());
        assert!(!state.try_begin());
    }

    #[test]
    fn failure_returns_to_idle_with_error() {
        let mut state = MutationState::default();
        state.try_begin();
        state.fail("Orders not found: [9]");
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Orders not found: [9]"));

        assert!(state.try_begin());
        assert_eq!(state.error(), None);
        state.succeed();
        assert_eq!(state, MutationState::default());
    }
}
