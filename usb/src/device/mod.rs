use crate::error::TransferError;
use nrflink_types::{DeviceIdentity, NrfStatus};

pub mod base;
mod libusb;


use base::NrfLinkCommands;
use libusb::device::LibUsbStack;

/// Queries the status byte of the nRF24 radio on the dongle identified by
/// `identity`. One-shot: discovers, opens, reads and releases the device.
pub fn read_status(identity: &DeviceIdentity) -> Result<NrfStatus, TransferError> {
    LibUsbStack::new()?.read_status(identity)
}

/// Sends `command` to the dongle identified by `identity` and reads back up
/// to `capacity` bytes of reply. One-shot, like [`read_status`].
pub fn send_command(
    identity: &DeviceIdentity,
    command: u16,
    capacity: u8,
) -> Result<Vec<u8>, TransferError> {
    LibUsbStack::new()?.send_command(identity, command, capacity)
}
