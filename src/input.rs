use connectivity_console_core::{
    Event, Model, PasswordField, Tab,
    events::{AccessPointEvent, FanEvent, SystemEvent, UiEvent, WifiEvent},
};

pub const HELP: &str = "\
commands:
  tab wifi|ap|monitor   switch tab
  refresh               reload the data of the current tab
  scan                  scan for networks
  select <n>            pick network <n> of the scan list
  ssid <name>           set the network name
  password <secret>     set the network password
  show                  toggle network password visibility
  connect               join the network
  disconnect            disconnect from the current network
  forget <n>            forget saved network <n>
  y | n                 answer a confirmation
  ok                    dismiss an alert
  ap-password <secret>  set the new access point password
  ap-show               toggle access point password visibility
  ap-change             change the access point password
  fan                   toggle the fan
  speed <0-3>           set the fan speed
  help                  show this text
  quit                  leave the console";

/// What a console line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Events(Vec<Event>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    NoSuchEntry(usize),
    NothingToConfirm,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::UnknownCommand(command) => {
                write!(f, "unknown command '{command}', type 'help'")
            }
            InputError::MissingArgument(argument) => write!(f, "missing argument <{argument}>"),
            InputError::InvalidNumber(value) => write!(f, "'{value}' is not a number"),
            InputError::NoSuchEntry(index) => write!(f, "there is no entry {index}"),
            InputError::NothingToConfirm => write!(f, "nothing to confirm"),
        }
    }
}

impl std::error::Error for InputError {}

/// Translate a console line into core events.
///
/// List positions are 1-based and resolved against the current view model.
pub fn parse(line: &str, model: &Model) -> Result<Input, InputError> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    };

    let event = match command {
        "" => return Ok(Input::Events(vec![])),
        "help" | "?" => return Ok(Input::Help),
        "quit" | "exit" => return Ok(Input::Quit),
        "tab" => Event::Ui(UiEvent::SwitchTab(parse_tab(argument)?)),
        "refresh" => return Ok(Input::Events(refresh(model))),
        "scan" => Event::Wifi(WifiEvent::Scan),
        "select" => {
            let index = parse_index(argument, "n")?;
            let network = model
                .scan
                .networks
                .get(index - 1)
                .ok_or(InputError::NoSuchEntry(index))?;
            Event::Wifi(WifiEvent::SelectNetwork {
                ssid: network.ssid.clone(),
            })
        }
        "ssid" => Event::Wifi(WifiEvent::SetConnectSsid {
            ssid: argument.to_string(),
        }),
        "password" => Event::Wifi(WifiEvent::SetConnectPassword {
            password: argument.to_string(),
        }),
        "show" => Event::Ui(UiEvent::TogglePasswordVisibility(PasswordField::Connect)),
        "connect" => Event::Wifi(WifiEvent::Connect {
            ssid: model.connect_form.ssid.clone(),
            password: model.connect_form.password.clone(),
        }),
        "disconnect" => Event::Wifi(WifiEvent::ShowDisconnectModal),
        "forget" => {
            let index = parse_index(argument, "n")?;
            let network = model
                .saved_networks
                .get(index - 1)
                .ok_or(InputError::NoSuchEntry(index))?;
            Event::Wifi(WifiEvent::ForgetNetwork {
                ssid: network.ssid.clone(),
            })
        }
        "y" | "yes" => confirm(model, true)?,
        "n" | "no" => confirm(model, false)?,
        "ok" => Event::Ui(UiEvent::DismissAlert),
        "ap-password" => Event::AccessPoint(AccessPointEvent::SetPassword {
            password: argument.to_string(),
        }),
        "ap-show" => Event::Ui(UiEvent::TogglePasswordVisibility(PasswordField::AccessPoint)),
        "ap-change" => Event::AccessPoint(AccessPointEvent::ChangePassword {
            password: model.access_point.password.clone(),
        }),
        "fan" => Event::Fan(FanEvent::Toggle),
        "speed" => {
            let speed = require(argument, "0-3")?;
            let speed = speed
                .parse::<u8>()
                .map_err(|_| InputError::InvalidNumber(speed.to_string()))?;
            Event::Fan(FanEvent::SetSpeed { speed })
        }
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(Input::Events(vec![event]))
}

fn require<'a>(argument: &'a str, name: &'static str) -> Result<&'a str, InputError> {
    if argument.is_empty() {
        Err(InputError::MissingArgument(name))
    } else {
        Ok(argument)
    }
}

fn parse_index(argument: &str, name: &'static str) -> Result<usize, InputError> {
    let argument = require(argument, name)?;
    match argument.parse::<usize>() {
        Ok(0) => Err(InputError::NoSuchEntry(0)),
        Ok(index) => Ok(index),
        Err(_) => Err(InputError::InvalidNumber(argument.to_string())),
    }
}

fn parse_tab(argument: &str) -> Result<Tab, InputError> {
    match require(argument, "tab")? {
        "wifi" => Ok(Tab::Wifi),
        "ap" => Ok(Tab::AccessPoint),
        "monitor" => Ok(Tab::Monitor),
        other => Err(InputError::UnknownCommand(format!("tab {other}"))),
    }
}

/// A pending forget prompt takes precedence over the disconnect modal
fn confirm(model: &Model, accept: bool) -> Result<Event, InputError> {
    if model.pending_forget.is_some() {
        return Ok(Event::Wifi(if accept {
            WifiEvent::ConfirmForget
        } else {
            WifiEvent::CancelForget
        }));
    }

    if model.disconnect_modal.is_displayed() {
        return Ok(Event::Wifi(if accept {
            WifiEvent::ConfirmDisconnect
        } else {
            WifiEvent::CloseDisconnectModal
        }));
    }

    Err(InputError::NothingToConfirm)
}

fn refresh(model: &Model) -> Vec<Event> {
    match model.active_tab {
        Tab::Wifi => vec![
            Event::Wifi(WifiEvent::LoadCurrentConnection),
            Event::Wifi(WifiEvent::LoadSavedNetworks),
        ],
        Tab::AccessPoint => vec![Event::AccessPoint(AccessPointEvent::LoadInfo)],
        Tab::Monitor => vec![
            Event::System(SystemEvent::LoadStatus),
            Event::Fan(FanEvent::LoadStatus),
        ],
    }
}
