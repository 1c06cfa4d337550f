use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::api_post;
use crate::events::Event;
use crate::http_helpers::process_connect_response;
use crate::model::{Model, SUCCESS_PAGE};
use crate::types::{ApiError, ConnectRequest, ConnectionError, TimerSlot};
use crate::update::schedule;
use crate::Effect;

/// How long a connect error stays fully visible before it fades
pub const CONNECTION_ERROR_DISPLAY_MS: u64 = 5000;

const MISSING_NETWORK_TITLE: &str = "Missing Network";
const MISSING_NETWORK_MESSAGE: &str = "Please enter a network name";
const JOIN_FAILED_MESSAGE: &str = "Unable to join this network. Please try again.";
const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Please try again.";

/// Validate the trimmed credentials and send them to the device
pub fn handle_connect(ssid: String, password: String, model: &mut Model) -> Command<Effect, Event> {
    if model.connect_form.busy {
        return Command::done();
    }

    model.clear_page_messages();

    let request = ConnectRequest {
        ssid: ssid.trim().to_string(),
        password: password.trim().to_string(),
    };

    if request.validate().is_err() {
        return show_connection_error(
            model,
            ConnectionError {
                ssid: MISSING_NETWORK_TITLE.to_string(),
                message: MISSING_NETWORK_MESSAGE.to_string(),
            },
        );
    }

    model.connect_form.busy = true;
    model.connect_form.connecting_ssid = Some(request.ssid.clone());

    Command::all([
        render(),
        api_post!(Wifi, WifiEvent, "/api/connect", ConnectResponse,
            body_json: &request,
            process: process_connect_response),
    ])
}

pub fn handle_connect_response(
    result: Result<(), ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.connect_form.busy = false;
    let ssid = model.connect_form.connecting_ssid.take().unwrap_or_default();

    match result {
        Ok(()) => {
            model.navigate_to = Some(SUCCESS_PAGE.to_string());
            render()
        }
        Err(e) => {
            log::error!("Failed to connect to {ssid}: {e}");
            let message = e.display_message(JOIN_FAILED_MESSAGE, CONNECTION_FAILED_MESSAGE);
            show_connection_error(model, ConnectionError { ssid, message })
        }
    }
}

fn show_connection_error(model: &mut Model, error: ConnectionError) -> Command<Effect, Event> {
    let id = model.allocate_timer_id();
    model.connection_error.show(error, id);

    Command::all([
        render(),
        schedule(TimerSlot::ConnectionError, id, CONNECTION_ERROR_DISPLAY_MS),
    ])
}
