use serde::{Deserialize, Serialize};

use super::ui::FormState;

pub const AP_PASSWORD_MIN_LEN: usize = 8;
pub const AP_PASSWORD_MAX_LEN: usize = 63;

/// Characters that would be interpreted by the shell command configuring the AP
const FORBIDDEN_AP_PASSWORD_CHARS: [char; 6] = ['`', '$', '\\', '\n', '\r', '\0'];

pub const AP_PASSWORD_IDLE_LABEL: &str = "Change Password";
pub const AP_PASSWORD_BUSY_LABEL: &str = "Changing...";

/// Payload of `GET /api/ap-info`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApInfo {
    pub ssid: String,
}

/// Request body of `POST /api/change-ap-password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeApPasswordRequest {
    pub password: String,
}

/// Reason an AP password is refused before it is sent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApPasswordError {
    Empty,
    TooShort,
    TooLong,
    ForbiddenCharacter,
}

impl std::fmt::Display for ApPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ApPasswordError::Empty => "Please enter a password",
            ApPasswordError::TooShort => "Password must be at least 8 characters",
            ApPasswordError::TooLong => "Password must not exceed 63 characters",
            ApPasswordError::ForbiddenCharacter => {
                "Password contains invalid characters (`, $, \\\\)"
            }
        };
        f.write_str(message)
    }
}

/// Validate an already trimmed AP password, reporting the first rule it breaks
pub fn validate_ap_password(password: &str) -> Result<(), ApPasswordError> {
    let length = password.chars().count();

    if password.is_empty() {
        Err(ApPasswordError::Empty)
    } else if length < AP_PASSWORD_MIN_LEN {
        Err(ApPasswordError::TooShort)
    } else if length > AP_PASSWORD_MAX_LEN {
        Err(ApPasswordError::TooLong)
    } else if password.contains(FORBIDDEN_AP_PASSWORD_CHARS) {
        Err(ApPasswordError::ForbiddenCharacter)
    } else {
        Ok(())
    }
}

/// AP info line shown on the AP tab
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApInfoView {
    #[default]
    NotLoaded,
    Loaded {
        ssid: String,
    },
    Failed(String),
}

/// AP tab state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessPointPanel {
    pub info: ApInfoView,
    /// Current value of the password input
    pub password: String,
    pub password_visible: bool,
    pub form: FormState,
}

impl AccessPointPanel {
    pub fn button_label(&self) -> &'static str {
        if self.form.busy {
            AP_PASSWORD_BUSY_LABEL
        } else {
            AP_PASSWORD_IDLE_LABEL
        }
    }
}
