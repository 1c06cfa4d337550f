mod access_point;
mod fan;
mod system;
mod ui;
mod wifi;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use ui::schedule;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => Command::all([
            render(),
            wifi::refresh_connection_and_saved(),
            wifi::scan::handle_scan(model),
        ]),
        Event::Wifi(event) => wifi::handle(event, model),
        Event::AccessPoint(event) => access_point::handle(event, model),
        Event::Fan(event) => fan::handle(event, model),
        Event::System(event) => system::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
