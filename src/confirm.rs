//! Confirmation Flow
//!
//! Destructive actions wait for an explicit yes/no before any request is
//! issued: `Idle -> AwaitingConfirmation -> InFlight -> Idle`.

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState<A> {
    #[default]
    Idle,
    AwaitingConfirmation(A),
    InFlight(A),
}

impl<A: Clone> ConfirmState<A> {
    /// Ask for confirmation. Replaces an unanswered request; refused while a
    /// confirmed action is still running.
    pub fn request(&mut self, action: A) -> bool {
        match self {
            ConfirmState::InFlight(_) => false,
            _ => {
                *self = ConfirmState::AwaitingConfirmation(action);
                true
            }
        }
    }

    /// User said yes: returns the action to run
    pub fn accept(&mut self) -> Option<A> {
        match self {
            ConfirmState::AwaitingConfirmation(action) => {
                let action = action.clone();
                *self = ConfirmState::InFlight(action.clone());
                Some(action)
            }
            _ => None,
        }
    }

    /// User said no. Never an error.
    pub fn decline(&mut self) {
        if matches!(self, ConfirmState::AwaitingConfirmation(_)) {
            *self = ConfirmState::Idle;
        }
    }

    /// The confirmed request settled, whatever its outcome
    pub fn finish(&mut self) {
        if matches!(self, ConfirmState::InFlight(_)) {
            *self = ConfirmState::Idle;
        }
    }

    pub fn pending(&self) -> Option<&A> {
        match self {
            ConfirmState::AwaitingConfirmation(action) => Some(action),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, ConfirmState::InFlight(_))
    }
}

/// Actions that need the user's acknowledgement first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteUser(u32),
    PromoteUser(u32),
    DeleteRoom(u32),
    DeleteEquipment(u32),
    DeleteTimeSlot(u32),
    /// Owner cancelling their own reservation
    CancelReservation(u32),
    /// Admin cancelling from the approval lists
    AdminCancelReservation(u32),
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::DeleteUser(_) => "Bu kullanıcıyı silmek istediğinize emin misiniz?",
            PendingAction::PromoteUser(_) => "Bu kullanıcıyı admin yapmak istediğinize emin misiniz?",
            PendingAction::DeleteRoom(_) => "Bu odayı silmek istediğinize emin misiniz?",
            PendingAction::DeleteEquipment(_) => "Bu ekipmanı silmek istediğinize emin misiniz?",
            PendingAction::DeleteTimeSlot(_) => "Bu zaman dilimini silmek istediğinize emin misiniz?",
            PendingAction::CancelReservation(_) | PendingAction::AdminCancelReservation(_) => {
                "Bu rezervasyonu iptal etmek istediğinize emin misiniz?"
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            PendingAction::DeleteUser(_) => "Kullanıcı silindi",
            PendingAction::PromoteUser(_) => "Kullanıcı admin yapıldı",
            PendingAction::DeleteRoom(_) => "Oda silindi",
            PendingAction::DeleteEquipment(_) => "Ekipman silindi",
            PendingAction::DeleteTimeSlot(_) => "Zaman dilimi silindi",
            PendingAction::CancelReservation(_) => "Rezervasyon başarıyla iptal edildi! ✅",
            PendingAction::AdminCancelReservation(_) => "Rezervasyon iptal edildi",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            PendingAction::DeleteUser(_) => "Kullanıcı silinemedi",
            PendingAction::PromoteUser(_) => "İşlem başarısız",
            PendingAction::DeleteRoom(_) => "Oda silinemedi",
            PendingAction::DeleteEquipment(_) => "Ekipman silinemedi",
            PendingAction::DeleteTimeSlot(_) => "Zaman dilimi silinemedi",
            PendingAction::CancelReservation(_) | PendingAction::AdminCancelReservation(_) => {
                "Rezervasyon iptal edilemedi!"
            }
        }
    }

    /// Issue the request this action stands for
    pub async fn execute(self, api: &ApiClient) -> Result<(), ApiError> {
        log::info!("executing confirmed action {:?}", self);
        match self {
            PendingAction::DeleteUser(id) => api.delete_user(id).await,
            PendingAction::PromoteUser(id) => api.promote_to_admin(id).await,
            PendingAction::DeleteRoom(id) => api.delete_room(id).await,
            PendingAction::DeleteEquipment(id) => api.delete_equipment(id).await,
            PendingAction::DeleteTimeSlot(id) => api.delete_time_slot(id).await,
            PendingAction::CancelReservation(id) => api.cancel_reservation(id).await,
            PendingAction::AdminCancelReservation(id) => api.admin_delete_reservation(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = ConfirmState<PendingAction>;

    #[test]
    fn test_accept_moves_to_in_flight_then_idle() {
        let mut state = State::default();
        assert!(state.request(PendingAction::DeleteRoom(4)));
        assert_eq!(state.pending(), Some(&PendingAction::DeleteRoom(4)));

        assert_eq!(state.accept(), Some(PendingAction::DeleteRoom(4)));
        assert!(state.is_in_flight());
        assert_eq!(state.pending(), None);

        state.finish();
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_decline_is_a_no_op_back_to_idle() {
        let mut state = State::default();
        state.request(PendingAction::DeleteUser(1));
        state.decline();
        assert_eq!(state, State::Idle);
        // Nothing left to accept
        assert_eq!(state.accept(), None);
    }

    #[test]
    fn test_accept_and_decline_ignored_when_idle() {
        let mut state = State::default();
        assert_eq!(state.accept(), None);
        state.decline();
        state.finish();
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_newer_request_replaces_unanswered_one() {
        let mut state = State::default();
        state.request(PendingAction::DeleteUser(1));
        state.request(PendingAction::PromoteUser(2));
        assert_eq!(state.accept(), Some(PendingAction::PromoteUser(2)));
    }

    #[test]
    fn test_request_refused_while_in_flight() {
        let mut state = State::default();
        state.request(PendingAction::CancelReservation(8));
        state.accept();

        assert!(!state.request(PendingAction::DeleteEquipment(3)));
        assert_eq!(state, State::InFlight(PendingAction::CancelReservation(8)));
        // Decline does not abort a running request
        state.decline();
        assert!(state.is_in_flight());
    }

    #[test]
    fn test_prompts_are_localized() {
        assert_eq!(
            PendingAction::AdminCancelReservation(1).prompt(),
            PendingAction::CancelReservation(1).prompt()
        );
        assert!(PendingAction::DeleteRoom(1).prompt().contains("odayı"));
    }
}
