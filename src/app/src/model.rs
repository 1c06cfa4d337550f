use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;
use crate::types::*;

/// Page the shell should leave to after a successful connect
pub const SUCCESS_PAGE: &str = "/success.html";

/// Application Model - the complete state
/// Also serves as the ViewModel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    pub active_tab: Tab,

    // Wi-Fi tab
    pub scan: ScanState,
    pub connect_form: ConnectForm,
    pub connection_error: Timed<ConnectionError>,
    pub current_connection: Option<ConnectionState>,
    pub saved_networks: Vec<SavedNetwork>,

    // Disconnect / forget confirmation
    pub disconnect_modal: ModalState,
    pub disconnecting: bool,
    /// SSID awaiting confirmation of a forget request
    pub pending_forget: Option<String>,
    pub forgetting: bool,

    // Page level messages
    /// Blocking message acknowledged with `DismissAlert`
    pub alert: Option<String>,
    pub banner: Timed<String>,

    // Shell requests
    pub focus: Option<FocusTarget>,
    pub navigate_to: Option<String>,

    // Other tabs
    pub access_point: AccessPointPanel,
    pub fan: FanPanel,
    pub system: SystemPanel,

    pub(crate) next_timer_id: TimerId,
}

impl Model {
    /// Hand out a fresh id for a timer owned by some component of the model
    pub fn allocate_timer_id(&mut self) -> TimerId {
        self.next_timer_id += 1;
        self.next_timer_id
    }

    /// Clear messages shown above the tabs
    pub fn clear_page_messages(&mut self) {
        self.banner.clear();
        self.connection_error.clear();
    }

    pub fn raise_alert(&mut self, message: String) {
        self.alert = Some(message);
    }
}
