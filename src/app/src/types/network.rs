use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::collections::HashSet;

/// Number of bars drawn by a signal indicator
pub const SIGNAL_BARS: u8 = 4;

/// A network found by a scan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkEntry {
    pub ssid: String,
    /// Signal quality 0-100, absent when the device could not measure it
    #[serde(default)]
    pub signal: Option<u8>,
}

impl NetworkEntry {
    pub fn bars(&self) -> u8 {
        signal_bars(self.signal)
    }
}

/// Map a 0-100 signal quality to 1..=4 bars.
///
/// Missing or zero signal shows a single bar.
pub fn signal_bars(signal: Option<u8>) -> u8 {
    match signal.unwrap_or(0) {
        80.. => 4,
        60..=79 => 3,
        40..=59 => 2,
        _ => 1,
    }
}

/// Drop repeated SSIDs, keeping the first occurrence and the original order
pub fn dedupe(networks: Vec<NetworkEntry>) -> Vec<NetworkEntry> {
    let mut seen = HashSet::new();
    networks
        .into_iter()
        .filter(|network| seen.insert(network.ssid.clone()))
        .collect()
}

/// Payload of `GET /api/scan`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanPayload {
    #[serde(default)]
    pub networks: Vec<NetworkEntry>,
}

/// Payload of `GET /api/current-connection`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionState {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub signal: Option<u8>,
    #[serde(default, rename = "interface")]
    pub interface_name: Option<String>,
}

impl ConnectionState {
    pub fn bars(&self) -> u8 {
        signal_bars(self.signal)
    }
}

/// A network remembered by the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedNetwork {
    pub ssid: String,
}

/// Payload of `GET /api/saved-networks`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedNetworksPayload {
    #[serde(default)]
    pub networks: Vec<SavedNetwork>,
}

/// Request body of `POST /api/connect`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ConnectRequest {
    #[validate(min_length = 1)]
    pub ssid: String,
    pub password: String,
}

/// Request body of `POST /api/forget-network`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgetNetworkRequest {
    pub ssid: String,
}

/// What the network list currently shows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanListing {
    #[default]
    NotScanned,
    Networks,
    /// Scan succeeded without results
    Empty,
    /// Scan failed
    Unavailable,
}

impl ScanListing {
    /// Text of the empty-state placeholder, if the listing has one
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ScanListing::Empty => Some("No networks found. Try again."),
            ScanListing::Unavailable => Some("Unable to scan Wi-Fi networks"),
            ScanListing::NotScanned | ScanListing::Networks => None,
        }
    }
}

/// Scan control and result list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanState {
    pub busy: bool,
    pub listing: ScanListing,
    pub networks: Vec<NetworkEntry>,
}

/// Connect form inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectForm {
    pub ssid: String,
    pub password: String,
    pub password_visible: bool,
    pub busy: bool,
    /// SSID shown in the "connecting" indicator while a request is in flight
    pub connecting_ssid: Option<String>,
}

/// Connect failure shown in the network area
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionError {
    /// Network the error refers to, or a heading when no network was given
    pub ssid: String,
    pub message: String,
}
