use crate::device::base::{NrfLinkCommands, UsbStack};
use crate::devices::DeviceInfo;
use crate::error::LocateError;
use rusb::{Context, Device, DeviceHandle, UsbContext};
use std::time::Duration;

/// The libusb-backed stack. Contexts are cheap to create and libusb keeps
/// its process-wide state alive for as long as any context exists.
pub struct LibUsbStack {
    context: Context,
}

impl LibUsbStack {
    pub fn new() -> Result<Self, LocateError> {
        let context = Context::new().map_err(LocateError::InitFailed)?;
        Ok(Self { context })
    }
}

impl UsbStack for LibUsbStack {
    type Device = Device<Context>;
    type Handle = DeviceHandle<Context>;

    fn devices(&self) -> Result<Vec<Self::Device>, rusb::Error> {
        Ok(self.context.devices()?.iter().collect())
    }

    fn device_info(&self, device: &Self::Device) -> Result<DeviceInfo, rusb::Error> {
        let descriptor = device.device_descriptor()?;
        // Index 0 means the device carries no string at that slot; querying
        // it anyway returns the language table, which never compares equal
        // to a real name.
        Ok(DeviceInfo::new(
            descriptor.vendor_id(),
            descriptor.product_id(),
            descriptor.manufacturer_string_index().unwrap_or(0),
            descriptor.product_string_index().unwrap_or(0),
        ))
    }

    fn open(&self, device: &Self::Device) -> Result<Self::Handle, rusb::Error> {
        device.open()
    }

    fn control_read(
        &self,
        handle: &Self::Handle,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<usize, rusb::Error> {
        handle.read_control(request_type, request, value, index, buf, timeout)
    }
}

impl NrfLinkCommands for LibUsbStack {}
