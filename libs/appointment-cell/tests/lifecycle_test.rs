use assert_matches::assert_matches;

use appointment_cell::models::{AppointmentError, AppointmentStatus};
use appointment_cell::services::lifecycle::AppointmentLifecycleService;

#[test]
fn active_statuses_can_move_to_any_non_initial_state() {
    let lifecycle = AppointmentLifecycleService::new();

    for from in [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Rescheduled,
    ] {
        for to in [
            AppointmentStatus::Rescheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert!(
                lifecycle.validate_status_transition(&from, &to).is_ok(),
                "{:?} -> {:?} should be allowed",
                from,
                to
            );
        }
    }
}

#[test]
fn terminal_statuses_allow_no_transitions() {
    let lifecycle = AppointmentLifecycleService::new();

    for from in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
        assert!(lifecycle.get_valid_transitions(&from).is_empty());

        for to in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Rescheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_matches!(
                lifecycle.validate_status_transition(&from, &to),
                Err(AppointmentError::InvalidStateTransition(status)) if status == from
            );
        }
    }
}

#[test]
fn no_transition_back_to_initial_states() {
    let lifecycle = AppointmentLifecycleService::new();

    let transitions = lifecycle.get_valid_transitions(&AppointmentStatus::Confirmed);
    assert!(!transitions.contains(&AppointmentStatus::Pending));
    assert!(!transitions.contains(&AppointmentStatus::Confirmed));
}
