use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::ui::{FormState, Timed};

/// Highest speed step understood by the fan service
pub const FAN_MAX_SPEED: u8 = 3;

/// Fan state as reported by `GET /api/fan/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanState {
    pub running: bool,
    pub speed: u8,
    pub speed_label: String,
    pub auto_mode: bool,
}

impl FanState {
    pub fn icon(&self) -> &'static str {
        if self.running {
            "🌀"
        } else {
            "⏸"
        }
    }

    pub fn color(&self) -> &'static str {
        if self.running {
            "#00bd8f"
        } else {
            "#a0a6b0"
        }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.auto_mode {
            "(Auto Mode)"
        } else {
            "(Manual)"
        }
    }

    /// Speed selectors paired with whether each one is the active speed
    pub fn speed_selectors(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        (0..=FAN_MAX_SPEED).map(move |speed| (speed, speed == self.speed))
    }
}

/// Payload of `GET /api/fan/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanStatusPayload {
    pub fan: FanState,
}

/// Result of a fan command
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanActionResult {
    #[serde(default)]
    pub message: String,
}

/// Payload of `POST /api/fan/toggle` and `POST /api/fan/speed`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanActionPayload {
    #[serde(default)]
    pub fan: FanActionResult,
}

/// Request body of `POST /api/fan/speed`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SetFanSpeedRequest {
    #[validate(maximum = 3)]
    pub speed: u8,
}

/// Status line of the fan panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FanStatusView {
    #[default]
    NotLoaded,
    Loaded(FanState),
    Failed(String),
}

impl FanStatusView {
    pub fn state(&self) -> Option<&FanState> {
        match self {
            FanStatusView::Loaded(state) => Some(state),
            FanStatusView::NotLoaded | FanStatusView::Failed(_) => None,
        }
    }
}

/// Fan panel state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanPanel {
    pub status: FanStatusView,
    /// Busy flag and inline error of the fan controls
    pub form: FormState,
    /// Success message that fades out
    pub notice: Timed<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_selector_is_active() {
        let state = FanState {
            running: true,
            speed: 2,
            speed_label: "Medium".to_string(),
            auto_mode: false,
        };

        let active: Vec<u8> = state
            .speed_selectors()
            .filter(|(_, active)| *active)
            .map(|(speed, _)| speed)
            .collect();

        assert_eq!(active, vec![2]);
        assert_eq!(state.speed_selectors().count(), 4);
    }

    #[test]
    fn paused_fan_uses_pause_icon() {
        let state = FanState::default();
        assert_eq!(state.icon(), "⏸");
        assert_eq!(state.color(), "#a0a6b0");
        assert_eq!(state.mode_label(), "(Manual)");
    }

    #[test]
    fn speed_request_bounds() {
        assert!(SetFanSpeedRequest { speed: 3 }.validate().is_ok());
        assert!(SetFanSpeedRequest { speed: 4 }.validate().is_err());
    }
}
