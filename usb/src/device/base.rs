use crate::commands::Command;
use crate::descriptor::{
    decode_string, LANGID_EN_US, STRING_DESCRIPTOR_BUFFER_LEN, TRANSFER_TIMEOUT,
};
use crate::devices::DeviceInfo;
use crate::error::{DescriptorError, LocateError, TransferError};
use log::{debug, info};
use nrflink_types::{DeviceIdentity, NrfStatus};
use rusb::constants::{LIBUSB_DT_STRING, LIBUSB_REQUEST_GET_DESCRIPTOR};
use rusb::{Direction, Recipient, RequestType};
use std::fmt::Debug;
use std::time::Duration;

/// The capabilities consumed from the underlying USB stack. `Device` is a
/// reference-counted handle: cloning takes a reference, dropping releases
/// it. `Handle` is an open session, closed on drop.
pub trait UsbStack {
    type Device: Clone + Debug;
    type Handle;

    /// Snapshot of the attached device list, in stack-reported order.
    fn devices(&self) -> Result<Vec<Self::Device>, rusb::Error>;

    /// Reads the numeric descriptor record. No I/O is involved.
    fn device_info(&self, device: &Self::Device) -> Result<DeviceInfo, rusb::Error>;

    fn open(&self, device: &Self::Device) -> Result<Self::Handle, rusb::Error>;

    /// Device-to-host control transfer. Returns the byte count actually
    /// transferred, which may be shorter than the buffer.
    fn control_read(
        &self,
        handle: &Self::Handle,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<usize, rusb::Error>;
}

/// The operations the dongle supports, implemented on top of the stack
/// primitives. Each one performs its own discovery, open, transfer and
/// teardown; nothing is cached between calls. Concurrent calls against the
/// same physical device are a caller concern - the dongle only sustains one
/// control session at a time, so serialise access to it.
pub trait NrfLinkCommands: UsbStack {
    /// Queries one string descriptor from the device, in US English.
    ///
    /// The device is opened just for this query and closed again before the
    /// result is decoded.
    fn read_device_string(
        &self,
        device: &Self::Device,
        index: u8,
    ) -> Result<String, DescriptorError> {
        let handle = self.open(device).map_err(DescriptorError::OpenFailed)?;

        let mut buf = [0u8; STRING_DESCRIPTOR_BUFFER_LEN];
        let transferred = self
            .control_read(
                &handle,
                rusb::request_type(Direction::In, RequestType::Standard, Recipient::Device),
                LIBUSB_REQUEST_GET_DESCRIPTOR,
                (u16::from(LIBUSB_DT_STRING) << 8) | u16::from(index),
                LANGID_EN_US,
                &mut buf,
                TRANSFER_TIMEOUT,
            )
            .map_err(DescriptorError::QueryFailed)?;
        drop(handle);

        decode_string(&buf, transferred, STRING_DESCRIPTOR_BUFFER_LEN)
    }

    /// Whether `device` presents the expected identity.
    ///
    /// The numeric ids are checked first so that no descriptor transfers are
    /// issued against unrelated hardware. Descriptor faults and string
    /// mismatches both mean "not our device" here.
    fn matches_identity(&self, device: &Self::Device, identity: &DeviceIdentity) -> bool {
        let Ok(info) = self.device_info(device) else {
            return false;
        };
        if info.vendor_id() != identity.vendor_id || info.product_id() != identity.product_id {
            return false;
        }

        match self.read_device_string(device, info.manufacturer_index()) {
            Ok(name) if name == identity.vendor_name => {}
            _ => return false,
        }
        matches!(
            self.read_device_string(device, info.product_index()),
            Ok(name) if name == identity.product_name
        )
    }

    /// Scans the attached devices and returns a reference to the first one
    /// matching `identity`. The enumeration snapshot is released either way;
    /// the returned device holds its own reference.
    fn locate(&self, identity: &DeviceIdentity) -> Result<Self::Device, LocateError> {
        let devices = self.devices().map_err(LocateError::EnumerationFailed)?;
        debug!("Scanning {} attached USB devices", devices.len());

        for device in &devices {
            if self.matches_identity(device, identity) {
                info!("Found {} at {:?}", identity.product_name, device);
                return Ok(device.clone());
            }
        }

        Err(LocateError::DeviceNotFound)
    }

    /// Queries the status byte of the nRF24 radio on the dongle.
    fn read_status(&self, identity: &DeviceIdentity) -> Result<NrfStatus, TransferError> {
        let device = self.locate(identity)?;
        let handle = self.open(&device).map_err(TransferError::OpenFailed)?;

        let mut buf = [0u8; 1];
        let transferred = self.control_read(
            &handle,
            rusb::request_type(Direction::In, RequestType::Vendor, Recipient::Device),
            Command::GetStatus.request_id(),
            0,
            0,
            &mut buf,
            TRANSFER_TIMEOUT,
        )?;
        if transferred < 1 {
            return Err(TransferError::TransferFailed(rusb::Error::Pipe));
        }

        debug!("Dongle status: {}", NrfStatus(buf[0]));
        Ok(NrfStatus(buf[0]))
    }

    /// Sends a command word to the dongle and reads back up to `capacity`
    /// bytes of reply. The reply may be shorter than `capacity`.
    fn send_command(
        &self,
        identity: &DeviceIdentity,
        command: u16,
        capacity: u8,
    ) -> Result<Vec<u8>, TransferError> {
        let device = self.locate(identity)?;
        let handle = self.open(&device).map_err(TransferError::OpenFailed)?;

        let mut buf = vec![0u8; usize::from(capacity)];
        let transferred = self.control_read(
            &handle,
            rusb::request_type(Direction::In, RequestType::Vendor, Recipient::Device),
            Command::Transfer.request_id(),
            command,
            0,
            &mut buf,
            TRANSFER_TIMEOUT,
        )?;
        buf.truncate(transferred);
        Ok(buf)
    }
}
