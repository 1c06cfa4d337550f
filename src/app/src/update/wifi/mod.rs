pub mod connect;
pub mod saved;
pub mod scan;

use crux_core::Command;

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::types::{FocusTarget, ModalPhase, TimerSlot, MODAL_OPEN_DELAY_MS, MODAL_TRANSITION_MS};
use crate::update_field;
use crate::Effect;

use super::schedule;

/// Handle wireless network events
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Scan => scan::handle_scan(model),
        WifiEvent::ScanResponse(result) => scan::handle_scan_response(result, model),

        WifiEvent::SelectNetwork { ssid } => update_field!(
            model.connect_form.ssid, ssid;
            model.focus, Some(FocusTarget::ConnectPassword)
        ),
        WifiEvent::SetConnectSsid { ssid } => update_field!(model.connect_form.ssid, ssid),
        WifiEvent::SetConnectPassword { password } => {
            update_field!(model.connect_form.password, password)
        }
        WifiEvent::Connect { ssid, password } => connect::handle_connect(ssid, password, model),
        WifiEvent::ConnectResponse(result) => connect::handle_connect_response(result, model),

        WifiEvent::LoadCurrentConnection => saved::load_current_connection(),
        WifiEvent::CurrentConnectionResponse(result) => {
            saved::handle_current_connection_response(result, model)
        }
        WifiEvent::LoadSavedNetworks => saved::load_saved_networks(),
        WifiEvent::SavedNetworksResponse(result) => {
            saved::handle_saved_networks_response(result, model)
        }

        WifiEvent::ShowDisconnectModal => show_disconnect_modal(model),
        WifiEvent::CloseDisconnectModal => close_disconnect_modal(model),
        WifiEvent::ConfirmDisconnect => saved::handle_disconnect(model),
        WifiEvent::DisconnectResponse(result) => saved::handle_disconnect_response(result, model),

        WifiEvent::ForgetNetwork { ssid } => update_field!(model.pending_forget, Some(ssid)),
        WifiEvent::CancelForget => update_field!(model.pending_forget, None),
        WifiEvent::ConfirmForget => saved::handle_forget(model),
        WifiEvent::ForgetResponse(result) => saved::handle_forget_response(result, model),
    }
}

/// Reload the current connection and the saved networks
pub fn refresh_connection_and_saved() -> Command<Effect, Event> {
    Command::all([saved::load_current_connection(), saved::load_saved_networks()])
}

fn show_disconnect_modal(model: &mut Model) -> Command<Effect, Event> {
    if matches!(
        model.disconnect_modal.phase,
        ModalPhase::Opening | ModalPhase::Open
    ) {
        return Command::done();
    }

    let id = model.allocate_timer_id();
    model.disconnect_modal.show(id);

    Command::all([
        crux_core::render::render(),
        schedule(TimerSlot::DisconnectModal, id, MODAL_OPEN_DELAY_MS),
    ])
}

pub(crate) fn close_disconnect_modal(model: &mut Model) -> Command<Effect, Event> {
    let id = model.allocate_timer_id();

    if model.disconnect_modal.close(id) {
        Command::all([
            crux_core::render::render(),
            schedule(TimerSlot::DisconnectModal, id, MODAL_TRANSITION_MS),
        ])
    } else {
        Command::done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_network_fills_ssid_and_focuses_password() {
        let mut model = Model::default();

        let _ = handle(
            WifiEvent::SelectNetwork {
                ssid: "Office".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.connect_form.ssid, "Office");
        assert_eq!(model.focus, Some(FocusTarget::ConnectPassword));
    }

    #[test]
    fn forget_waits_for_confirmation() {
        let mut model = Model::default();

        let _ = handle(
            WifiEvent::ForgetNetwork {
                ssid: "Cafe".to_string(),
            },
            &mut model,
        );
        assert_eq!(model.pending_forget.as_deref(), Some("Cafe"));
        assert!(!model.forgetting);

        let _ = handle(WifiEvent::CancelForget, &mut model);
        assert_eq!(model.pending_forget, None);
    }

    #[test]
    fn showing_an_open_modal_again_keeps_it_open() {
        let mut model = Model::default();
        let _ = handle(WifiEvent::ShowDisconnectModal, &mut model);
        let opening = model.disconnect_modal.clone();

        let mut cmd = handle(WifiEvent::ShowDisconnectModal, &mut model);

        assert!(cmd.is_done());
        assert_eq!(model.disconnect_modal, opening);
    }

    #[test]
    fn closing_a_hidden_modal_does_nothing() {
        let mut model = Model::default();

        let mut cmd = handle(WifiEvent::CloseDisconnectModal, &mut model);

        assert!(cmd.is_done());
        assert_eq!(model.disconnect_modal.phase, ModalPhase::Hidden);
    }
}
