use crux_core::{render::render, Command};

use crate::events::Event;
use crate::http_helpers::{process_ack, process_envelope};
use crate::model::Model;
use crate::types::{
    ApiError, ConnectionState, ForgetNetworkRequest, SavedNetworksPayload, TimerSlot,
};
use crate::update::schedule;
use crate::{api_get, api_post, Effect};

/// How long the disconnect banner stays fully visible before it fades
pub const BANNER_DISPLAY_MS: u64 = 3000;

const DISCONNECTED_BANNER: &str = "✓ Disconnected successfully";
const UNKNOWN_ERROR: &str = "Unknown error";

pub fn load_current_connection() -> Command<Effect, Event> {
    api_get!(Wifi, WifiEvent, "/api/current-connection", CurrentConnectionResponse,
        process: process_envelope::<ConnectionState>)
}

pub fn load_saved_networks() -> Command<Effect, Event> {
    api_get!(Wifi, WifiEvent, "/api/saved-networks", SavedNetworksResponse,
        process: process_envelope::<SavedNetworksPayload>)
}

pub fn handle_current_connection_response(
    result: Result<ConnectionState, ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(state) => model.current_connection = Some(state).filter(|s| s.connected),
        Err(ApiError::Rejected { .. }) => model.current_connection = None,
        Err(e) => {
            log::error!("Failed to load current connection: {e}");
            return Command::done();
        }
    }
    render()
}

pub fn handle_saved_networks_response(
    result: Result<SavedNetworksPayload, ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(payload) => model.saved_networks = payload.networks,
        Err(ApiError::Rejected { .. }) => model.saved_networks.clear(),
        Err(e) => {
            log::error!("Failed to load saved networks: {e}");
            return Command::done();
        }
    }
    render()
}

/// Disconnect after the user confirmed in the modal
pub fn handle_disconnect(model: &mut Model) -> Command<Effect, Event> {
    if model.disconnecting || !model.disconnect_modal.is_displayed() {
        return Command::done();
    }

    model.disconnecting = true;

    Command::all([
        render(),
        api_post!(Wifi, WifiEvent, "/api/disconnect-current", DisconnectResponse,
            process: process_ack),
    ])
}

pub fn handle_disconnect_response(
    result: Result<(), ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.disconnecting = false;
    let close = super::close_disconnect_modal(model);

    match result {
        Ok(()) => {
            let id = model.allocate_timer_id();
            model.banner.show(DISCONNECTED_BANNER.to_string(), id);
            Command::all([
                close,
                render(),
                super::refresh_connection_and_saved(),
                schedule(TimerSlot::Banner, id, BANNER_DISPLAY_MS),
            ])
        }
        Err(e) => {
            log::error!("Failed to disconnect: {e}");
            model.raise_alert(match &e {
                ApiError::Transport(_) => "Error disconnecting from network".to_string(),
                ApiError::Rejected { .. } => format!(
                    "Failed to disconnect: {}",
                    e.backend_message().unwrap_or(UNKNOWN_ERROR)
                ),
            });
            Command::all([close, render()])
        }
    }
}

/// Forget the network the user just confirmed
pub fn handle_forget(model: &mut Model) -> Command<Effect, Event> {
    if model.forgetting {
        return Command::done();
    }
    let Some(ssid) = model.pending_forget.take() else {
        return Command::done();
    };

    model.forgetting = true;
    let request = ForgetNetworkRequest { ssid };

    Command::all([
        render(),
        api_post!(Wifi, WifiEvent, "/api/forget-network", ForgetResponse,
            body_json: &request,
            process: process_ack),
    ])
}

/// The saved list only changes once the device confirmed
pub fn handle_forget_response(
    result: Result<(), ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.forgetting = false;

    match result {
        Ok(()) => Command::all([render(), super::refresh_connection_and_saved()]),
        Err(e) => {
            log::error!("Failed to forget network: {e}");
            model.raise_alert(match &e {
                ApiError::Transport(_) => "Error forgetting network".to_string(),
                ApiError::Rejected { .. } => format!(
                    "Failed to forget network: {}",
                    e.backend_message().unwrap_or(UNKNOWN_ERROR)
                ),
            });
            render()
        }
    }
}
