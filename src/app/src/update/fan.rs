use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::{Event, FanEvent};
use crate::http_helpers::process_envelope;
use crate::model::Model;
use crate::types::{
    ApiError, FanActionPayload, FanStatusPayload, FanStatusView, SetFanSpeedRequest, TimerSlot,
};
use crate::update::schedule;
use crate::{api_get, api_post, Effect};

/// How long a fan success message stays fully visible before it fades
pub const FAN_NOTICE_DISPLAY_MS: u64 = 2000;

/// Handle fan control events
pub fn handle(event: FanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FanEvent::LoadStatus => load_status(),
        FanEvent::StatusResponse(result) => handle_status_response(result, model),
        FanEvent::Toggle => handle_toggle(model),
        FanEvent::ToggleResponse(result) => {
            handle_action_response(result, model, "Failed to toggle fan", "Error toggling fan")
        }
        FanEvent::SetSpeed { speed } => handle_set_speed(speed, model),
        FanEvent::SetSpeedResponse(result) => handle_action_response(
            result,
            model,
            "Failed to set fan speed",
            "Error setting fan speed",
        ),
    }
}

pub fn load_status() -> Command<Effect, Event> {
    api_get!(Fan, FanEvent, "/api/fan/status", StatusResponse,
        process: process_envelope::<FanStatusPayload>)
}

fn handle_status_response(
    result: Result<FanStatusPayload, ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.fan.status = match result {
        Ok(payload) => FanStatusView::Loaded(payload.fan),
        Err(ApiError::Rejected { .. }) => {
            FanStatusView::Failed("Failed to load fan status".to_string())
        }
        Err(e) => {
            log::error!("Failed to load fan status: {e}");
            FanStatusView::Failed("Error loading fan status".to_string())
        }
    };
    render()
}

/// Clear the fan messages and disable the controls; false if a request is in flight
fn start_action(model: &mut Model) -> bool {
    if model.fan.form.busy {
        return false;
    }
    model.fan.form.start();
    model.fan.notice.clear();
    true
}

fn handle_toggle(model: &mut Model) -> Command<Effect, Event> {
    if !start_action(model) {
        return Command::done();
    }

    Command::all([
        render(),
        api_post!(Fan, FanEvent, "/api/fan/toggle", ToggleResponse,
            process: process_envelope::<FanActionPayload>),
    ])
}

fn handle_set_speed(speed: u8, model: &mut Model) -> Command<Effect, Event> {
    let request = SetFanSpeedRequest { speed };

    if request.validate().is_err() {
        if model.fan.form.busy {
            return Command::done();
        }
        model.fan.form.reset();
        model.fan.form.error_message = Some("Speed must be between 0 and 3".to_string());
        return render();
    }

    if !start_action(model) {
        return Command::done();
    }

    Command::all([
        render(),
        api_post!(Fan, FanEvent, "/api/fan/speed", SetSpeedResponse,
            body_json: &request,
            process: process_envelope::<FanActionPayload>),
    ])
}

fn handle_action_response(
    result: Result<FanActionPayload, ApiError>,
    model: &mut Model,
    rejected_fallback: &str,
    transport_message: &str,
) -> Command<Effect, Event> {
    match result {
        Ok(payload) => {
            model.fan.form.succeed(None);
            let id = model.allocate_timer_id();
            model
                .fan
                .notice
                .show(format!("✓ {}", payload.fan.message), id);

            Command::all([
                render(),
                load_status(),
                schedule(TimerSlot::FanNotice, id, FAN_NOTICE_DISPLAY_MS),
            ])
        }
        Err(e) => {
            log::error!("Fan command failed: {e}");
            model
                .fan
                .form
                .fail(e.display_message(rejected_fallback, transport_message));
            render()
        }
    }
}
