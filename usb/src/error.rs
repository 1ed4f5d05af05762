#[derive(thiserror::Error, Debug)]
pub enum LocateError {
    #[error("Unable to initialise the USB stack: {0}")]
    InitFailed(#[source] rusb::Error),

    #[error("Unable to read the attached device list: {0}")]
    EnumerationFailed(#[source] rusb::Error),

    #[error("No matching device was found")]
    DeviceNotFound,
}

#[derive(thiserror::Error, Debug)]
pub enum DescriptorError {
    #[error("Unable to open device for descriptor query: {0}")]
    OpenFailed(#[source] rusb::Error),

    #[error("String descriptor request failed: {0}")]
    QueryFailed(#[source] rusb::Error),

    #[error("Response is not a string descriptor (type {0:#04x})")]
    UnexpectedType(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum TransferError {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error("Unable to open device: {0}")]
    OpenFailed(#[source] rusb::Error),

    #[error("Control transfer failed: {0}")]
    TransferFailed(#[from] rusb::Error),
}
