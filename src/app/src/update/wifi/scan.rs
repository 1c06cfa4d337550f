use crux_core::{render::render, Command};

use crate::api_get;
use crate::events::Event;
use crate::http_helpers::process_envelope;
use crate::model::Model;
use crate::types::{dedupe, ApiError, ScanListing, ScanPayload};
use crate::Effect;

/// Start a scan unless one is already running
pub fn handle_scan(model: &mut Model) -> Command<Effect, Event> {
    if model.scan.busy {
        return Command::done();
    }

    model.clear_page_messages();
    model.scan.busy = true;

    Command::all([
        render(),
        api_get!(Wifi, WifiEvent, "/api/scan", ScanResponse,
            process: process_envelope::<ScanPayload>),
    ])
}

/// Store the de-duplicated result and refresh the connection displays
pub fn handle_scan_response(
    result: Result<ScanPayload, ApiError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.scan.busy = false;

    match result {
        Ok(payload) => {
            let networks = dedupe(payload.networks);
            model.scan.listing = if networks.is_empty() {
                ScanListing::Empty
            } else {
                ScanListing::Networks
            };
            model.scan.networks = networks;
        }
        Err(e) => {
            log::error!("Failed to scan networks: {e}");
            model.scan.listing = ScanListing::Unavailable;
            model.scan.networks.clear();
        }
    }

    Command::all([render(), super::refresh_connection_and_saved()])
}
