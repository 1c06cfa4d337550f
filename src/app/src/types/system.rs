use serde::{Deserialize, Serialize};

const NOT_AVAILABLE: &str = "N/A";

/// Metrics reported by `GET /api/system/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    #[serde(default)]
    pub cpu_usage: Option<f64>,
    #[serde(default)]
    pub memory: Option<String>,
    #[serde(default)]
    pub disk: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub uptime: Option<String>,
}

impl SystemStatus {
    // A reading of 0 is shown as N/A, like an absent one.
    pub fn cpu_label(&self) -> String {
        match self.cpu_usage {
            Some(cpu) if cpu != 0.0 => format!("{cpu}%"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn memory_label(&self) -> &str {
        non_empty_or_na(self.memory.as_deref())
    }

    pub fn disk_label(&self) -> &str {
        non_empty_or_na(self.disk.as_deref())
    }

    pub fn temperature_label(&self) -> String {
        match self.temperature {
            Some(temperature) if temperature != 0.0 => format!("{temperature:.1}°C"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn uptime_label(&self) -> &str {
        non_empty_or_na(self.uptime.as_deref())
    }
}

fn non_empty_or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// Payload of `GET /api/system/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemStatusPayload {
    pub system: SystemStatus,
}

/// Monitor tab state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemPanel {
    pub status: Option<SystemStatus>,
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_present_metrics() {
        let status = SystemStatus {
            cpu_usage: Some(12.5),
            memory: Some("512MB / 1GB".to_string()),
            disk: Some("3.2GB / 8GB".to_string()),
            temperature: Some(48.26),
            uptime: Some("2h 5m".to_string()),
        };

        assert_eq!(status.cpu_label(), "12.5%");
        assert_eq!(status.memory_label(), "512MB / 1GB");
        assert_eq!(status.disk_label(), "3.2GB / 8GB");
        assert_eq!(status.temperature_label(), "48.3°C");
        assert_eq!(status.uptime_label(), "2h 5m");
    }

    #[test]
    fn missing_metrics_render_not_available() {
        let status = SystemStatus {
            memory: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(status.cpu_label(), "N/A");
        assert_eq!(status.memory_label(), "N/A");
        assert_eq!(status.disk_label(), "N/A");
        assert_eq!(status.temperature_label(), "N/A");
        assert_eq!(status.uptime_label(), "N/A");
    }

    #[test]
    fn whole_cpu_usage_has_no_fraction() {
        let status = SystemStatus {
            cpu_usage: Some(37.0),
            ..Default::default()
        };
        assert_eq!(status.cpu_label(), "37%");
    }
}
