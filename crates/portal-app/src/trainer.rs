//! Trainer tab draft state: the ask-your-trainer question form

/// Free-text draft for the trainer contact form.
///
/// Panel-local: cleared whenever the trainer tab is deselected (the
/// panel is destroyed, not suspended) and after a successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerDraft {
    pub subject: String,
    pub body: String,
}

impl TrainerDraft {
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Take the draft for submission, leaving the form empty.
    /// No validation contract is defined: empty fields are sent as-is.
    pub fn take(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.subject),
            std::mem::take(&mut self.body),
        )
    }

    pub fn clear(&mut self) {
        self.subject.clear();
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_the_draft() {
        let mut draft = TrainerDraft::default();
        draft.set_subject("Lab access");
        draft.set_body("The lab link from module 3 404s.");

        let (subject, body) = draft.take();
        assert_eq!(subject, "Lab access");
        assert_eq!(body, "The lab link from module 3 404s.");
        assert_eq!(draft, TrainerDraft::default());
    }

    #[test]
    fn test_empty_draft_is_sendable() {
        let mut draft = TrainerDraft::default();
        let (subject, body) = draft.take();
        assert!(subject.is_empty());
        assert!(body.is_empty());
    }
}
