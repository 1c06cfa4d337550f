use crux_core::{render::render, Command};

use crate::commands::timer::{TimerId, TimerOutput};
use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::{PasswordField, Tab, TimerSlot, TimerStep, MESSAGE_FADE_MS};
use crate::update_field;
use crate::{Effect, TimerCmd};

use super::{access_point, fan, system};

/// Ask the shell to report back to `slot` once `millis` have passed
pub fn schedule(slot: TimerSlot, id: TimerId, millis: u64) -> Command<Effect, Event> {
    TimerCmd::start(id, millis)
        .build()
        .then_send(move |output| {
            let TimerOutput::Elapsed { id } = output;
            Event::Ui(UiEvent::TimerElapsed { slot, id })
        })
}

/// Handle UI-related events (tabs, alerts, timers)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::SwitchTab(tab) => switch_tab(tab, model),
        UiEvent::TogglePasswordVisibility(field) => {
            let visible = match field {
                PasswordField::Connect => &mut model.connect_form.password_visible,
                PasswordField::AccessPoint => &mut model.access_point.password_visible,
            };
            *visible = !*visible;
            render()
        }
        UiEvent::DismissAlert => update_field!(model.alert, None),
        UiEvent::FocusHandled => update_field!(model.focus, None),
        UiEvent::NavigationHandled => update_field!(model.navigate_to, None),
        UiEvent::TimerElapsed { slot, id } => handle_timer(slot, id, model),
    }
}

fn switch_tab(tab: Tab, model: &mut Model) -> Command<Effect, Event> {
    model.active_tab = tab;

    let load = match tab {
        Tab::Wifi => Command::done(),
        Tab::AccessPoint => access_point::load_info(),
        Tab::Monitor => Command::all([system::load_status(model), fan::load_status()]),
    };

    Command::all([render(), load])
}

fn handle_timer(slot: TimerSlot, id: TimerId, model: &mut Model) -> Command<Effect, Event> {
    let step = match slot {
        TimerSlot::DisconnectModal => model.disconnect_modal.on_timer(id),
        TimerSlot::ConnectionError => {
            let next = model.allocate_timer_id();
            model.connection_error.on_timer(id, next)
        }
        TimerSlot::Banner => {
            let next = model.allocate_timer_id();
            model.banner.on_timer(id, next)
        }
        TimerSlot::FanNotice => {
            let next = model.allocate_timer_id();
            model.fan.notice.on_timer(id, next)
        }
    };

    match step {
        TimerStep::Stale => {
            log::debug!("ignoring stale {slot:?} timer {id}");
            Command::done()
        }
        TimerStep::Continue(next) => {
            Command::all([render(), schedule(slot, next, MESSAGE_FADE_MS)])
        }
        TimerStep::Done => render(),
    }
}
