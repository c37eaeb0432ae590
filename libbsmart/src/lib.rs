pub use crate::client::{Detail, OfflineReport, PanelClient, Session};
pub use crate::device::{Device, DeviceEvent, DeviceFilter, NO_ALARM};
pub use crate::view::{Dashboard, Stats};

mod client;
mod device;
mod view;
