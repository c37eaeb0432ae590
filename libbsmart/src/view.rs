use crate::device::{Device, DeviceFilter};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Every fetched device, regardless of filter and search.
    pub all: usize,
    pub online: usize,
    pub offline: usize,
    pub alarms: usize,
}

/// In-memory state behind the device table.
///
/// The list is replaced wholesale on every reload; filter and search only
/// affect which of the fetched devices are shown.
#[derive(Debug, Default)]
pub struct Dashboard {
    devices: Vec<Device>,
    filter: DeviceFilter,
    search: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, devices: Vec<Device>) {
        self.devices = devices;
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn filter(&self) -> DeviceFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: DeviceFilter) {
        self.filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.trim().to_lowercase();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(|d| {
            self.filter.matches(d)
                && (self.search.is_empty() || d.id.to_lowercase().contains(&self.search))
        })
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            all: self.devices.len(),
            ..Stats::default()
        };
        for device in self.visible() {
            if device.online {
                stats.online += 1;
            } else {
                stats.offline += 1;
            }
            if device.has_alarm() {
                stats.alarms += 1;
            }
        }
        stats
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>3}  {:<16} {:>6} {:>7}  {:<32} {:<8} {}",
            "#", "ID", "BUTTON", "BATTERY", "LAST EVENT", "STATUS", "LOCATION"
        );
        for (i, d) in self.visible().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}  {:<16} {:>6} {:>6}%  {:<32} {:<8} {}",
                i + 1,
                d.id,
                d.button,
                d.battery,
                d.last_event.as_deref().unwrap_or_default(),
                if d.online { "Online" } else { "Offline" },
                d.location
            );
        }
        let stats = self.stats();
        let _ = write!(
            out,
            "All: {}  Online: {}  Offline: {}  Alarms: {}  [filter: {}{}]",
            stats.all,
            stats.online,
            stats.offline,
            stats.alarms,
            self.filter,
            if self.search.is_empty() {
                String::new()
            } else {
                format!(", search: '{}'", self.search)
            }
        );
        out
    }
}
