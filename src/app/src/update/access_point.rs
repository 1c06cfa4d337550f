use crux_core::{render::render, Command};

use crate::events::{AccessPointEvent, Event};
use crate::http_helpers::{process_ack, process_envelope};
use crate::model::Model;
use crate::types::{validate_ap_password, ApInfo, ApInfoView, ApiError, ChangeApPasswordRequest};
use crate::{api_get, api_post, update_field, Effect};

const PASSWORD_CHANGED_MESSAGE: &str = "✓ AP password changed successfully!";

/// Handle access point events
pub fn handle(event: AccessPointEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AccessPointEvent::LoadInfo => load_info(),
        AccessPointEvent::InfoResponse(result) => handle_info_response(result, model),
        AccessPointEvent::SetPassword { password } => {
            update_field!(model.access_point.password, password)
        }
        AccessPointEvent::ChangePassword { password } => handle_change_password(password, model),
        AccessPointEvent::ChangePasswordResponse(result) => {
            handle_change_password_response(result, model)
        }
    }
}

pub fn load_info() -> Command<Effect, Event> {
    api_get!(AccessPoint, AccessPointEvent, "/api/ap-info", InfoResponse,
        process: process_envelope::<ApInfo>)
}

fn handle_info_response(result: Result<ApInfo, ApiError>, model: &mut Model) -> Command<Effect, Event> {
    model.access_point.info = match result {
        Ok(info) => ApInfoView::Loaded { ssid: info.ssid },
        Err(ApiError::Rejected { .. }) => ApInfoView::Failed("Failed to load AP info".to_string()),
        Err(e) => {
            log::error!("Failed to load AP info: {e}");
            ApInfoView::Failed("Error loading AP info".to_string())
        }
    };
    render()
}

fn handle_change_password(password: String, model: &mut Model) -> Command<Effect, Event> {
    let panel = &mut model.access_point;
    if panel.form.busy {
        return Command::done();
    }

    panel.form.reset();
    let password = password.trim().to_string();

    if let Err(e) = validate_ap_password(&password) {
        panel.form.error_message = Some(e.to_string());
        return render();
    }

    panel.form.start();
    let request = ChangeApPasswordRequest { password };

    Command::all([
        render(),
        api_post!(AccessPoint, AccessPointEvent, "/api/change-ap-password", ChangePasswordResponse,
            body_json: &request,
            process: process_ack),
    ])
}

fn handle_change_password_response(
    result: Result<(), ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let panel = &mut model.access_point;

    match result {
        Ok(()) => {
            panel.password.clear();
            panel.form.succeed(Some(PASSWORD_CHANGED_MESSAGE.to_string()));
        }
        Err(e) => {
            log::error!("Failed to change AP password: {e}");
            panel.form.fail(e.display_message("Failed to change password", "Error changing password"));
        }
    }
    render()
}
