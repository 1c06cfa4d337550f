use crux_core::{render::render, Command};

use crate::events::{Event, SystemEvent};
use crate::http_helpers::process_envelope;
use crate::model::Model;
use crate::types::{ApiError, SystemStatusPayload};
use crate::{api_get, Effect};

/// Handle system monitor events
pub fn handle(event: SystemEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SystemEvent::LoadStatus => load_status(model),
        SystemEvent::StatusResponse(result) => handle_status_response(result, model),
    }
}

pub fn load_status(model: &mut Model) -> Command<Effect, Event> {
    model.system.loading = true;
    api_get!(System, SystemEvent, "/api/system/status", StatusResponse,
        process: process_envelope::<SystemStatusPayload>)
}

// Failures keep the last known values on screen.
fn handle_status_response(
    result: Result<SystemStatusPayload, ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.system.loading = false;

    match result {
        Ok(payload) => model.system.status = Some(payload.system),
        Err(e) => log::error!("Failed to load system monitor: {e}"),
    }
    render()
}
