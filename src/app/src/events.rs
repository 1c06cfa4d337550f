use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;
use crate::types::*;

/// Wireless network events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    Scan,
    SelectNetwork {
        ssid: String,
    },
    SetConnectSsid {
        ssid: String,
    },
    SetConnectPassword {
        password: String,
    },
    Connect {
        ssid: String,
        password: String,
    },
    LoadCurrentConnection,
    LoadSavedNetworks,
    ShowDisconnectModal,
    CloseDisconnectModal,
    ConfirmDisconnect,
    /// Ask for confirmation before forgetting `ssid`
    ForgetNetwork {
        ssid: String,
    },
    ConfirmForget,
    CancelForget,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ScanResponse(Result<ScanPayload, ApiError>),
    #[serde(skip)]
    ConnectResponse(Result<(), ApiError>),
    #[serde(skip)]
    CurrentConnectionResponse(Result<ConnectionState, ApiError>),
    #[serde(skip)]
    SavedNetworksResponse(Result<SavedNetworksPayload, ApiError>),
    #[serde(skip)]
    DisconnectResponse(Result<(), ApiError>),
    #[serde(skip)]
    ForgetResponse(Result<(), ApiError>),
}

/// Access point events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AccessPointEvent {
    LoadInfo,
    SetPassword {
        password: String,
    },
    ChangePassword {
        password: String,
    },

    #[serde(skip)]
    InfoResponse(Result<ApInfo, ApiError>),
    #[serde(skip)]
    ChangePasswordResponse(Result<(), ApiError>),
}

/// Fan control events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FanEvent {
    LoadStatus,
    Toggle,
    SetSpeed {
        speed: u8,
    },

    #[serde(skip)]
    StatusResponse(Result<FanStatusPayload, ApiError>),
    #[serde(skip)]
    ToggleResponse(Result<FanActionPayload, ApiError>),
    #[serde(skip)]
    SetSpeedResponse(Result<FanActionPayload, ApiError>),
}

/// System monitor events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SystemEvent {
    LoadStatus,

    #[serde(skip)]
    StatusResponse(Result<SystemStatusPayload, ApiError>),
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SwitchTab(Tab),
    TogglePasswordVisibility(PasswordField),
    DismissAlert,
    /// The shell consumed the pending focus request
    FocusHandled,
    /// The shell consumed the pending navigation request
    NavigationHandled,

    // Timer responses (internal events)
    #[serde(skip)]
    TimerElapsed { slot: TimerSlot, id: TimerId },
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    Initialize,
    Wifi(WifiEvent),
    AccessPoint(AccessPointEvent),
    Fan(FanEvent),
    System(SystemEvent),
    Ui(UiEvent),
}
