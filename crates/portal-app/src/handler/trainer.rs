//! Trainer panel handlers: draft editing and send

use crate::state::DashboardState;

use super::{UpdateAction, UpdateResult};

pub fn handle_set_subject(state: &mut DashboardState, subject: String) -> UpdateResult {
    state.trainer_draft.set_subject(subject);
    UpdateResult::none()
}

pub fn handle_set_body(state: &mut DashboardState, body: String) -> UpdateResult {
    state.trainer_draft.set_body(body);
    UpdateResult::none()
}

/// Send the draft question to the trainer.
///
/// The draft is taken, not copied, so the form is empty afterwards.
/// No validation contract exists for the fields; an empty draft is
/// sent as-is.
pub fn handle_send_question(state: &mut DashboardState) -> UpdateResult {
    let (subject, body) = state.trainer_draft.take();
    UpdateResult::action(UpdateAction::SendTrainerQuestion { subject, body })
}
