use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alarm code reported by a device that has no pending alarm.
pub const NO_ALARM: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    /// Alarm code of the last button press, `0` when there is none.
    pub button: i64,
    /// Battery level as a percentage.
    pub battery: i64,
    #[serde(default)]
    pub last_event: Option<String>,
    pub online: bool,
    pub location: String,
}

impl Device {
    pub fn has_alarm(&self) -> bool {
        self.button != NO_ALARM
    }
}

/// Message sent by a device when a button is pressed or a heartbeat is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEvent {
    pub id: String,
    #[serde(default = "default_event_button")]
    pub button: i64,
    #[serde(default = "default_event_battery")]
    pub battery: i64,
}

fn default_event_button() -> i64 {
    1
}

fn default_event_battery() -> i64 {
    100
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceFilter {
    #[default]
    All,
    Online,
    Offline,
    Alarms,
}

impl DeviceFilter {
    pub fn matches(self, device: &Device) -> bool {
        match self {
            DeviceFilter::All => true,
            DeviceFilter::Online => device.online,
            DeviceFilter::Offline => !device.online,
            DeviceFilter::Alarms => device.has_alarm(),
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            DeviceFilter::All => "all",
            DeviceFilter::Online => "online",
            DeviceFilter::Offline => "offline",
            DeviceFilter::Alarms => "alarms",
        }
    }
}

impl FromStr for DeviceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(DeviceFilter::All),
            "online" => Ok(DeviceFilter::Online),
            "offline" => Ok(DeviceFilter::Offline),
            "alarms" => Ok(DeviceFilter::Alarms),
            other => Err(format!("Unknown device filter '{other}'")),
        }
    }
}

impl fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
