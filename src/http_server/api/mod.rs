mod add_device;
mod check_offline;
mod delete_device;
mod device_event;
mod get_devices;
mod login;
mod logout;
mod resolve_alarm;

pub use add_device::*;
pub use check_offline::*;
pub use delete_device::*;
pub use device_event::*;
pub use get_devices::*;
pub use login::*;
pub use logout::*;
pub use resolve_alarm::*;
