pub use rusb;
pub mod commands;
pub mod descriptor;
pub mod devices;
pub mod error;

mod device;

pub use device::base::{NrfLinkCommands, UsbStack};
pub use device::{read_status, send_command};

/// The dongle firmware ships with the shared experimental vendor/product id
/// pair, so discovery has to compare the manufacturer and product strings on
/// top of the numeric ids.
pub const VID_SHARED: u16 = 0x16c0;
pub const PID_SHARED: u16 = 0x05dc;
