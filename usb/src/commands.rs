#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    GetStatus,
    Transfer,
}

impl Command {
    /// Vendor request code, agreed with the dongle firmware.
    pub fn request_id(&self) -> u8 {
        match self {
            Command::GetStatus => 0x10,
            Command::Transfer => 0x11,
        }
    }
}
