use crate::error::DescriptorError;
use rusb::constants::LIBUSB_DT_STRING;
use std::time::Duration;

/// Language id sent with every string descriptor request (US English).
pub const LANGID_EN_US: u16 = 0x0409;

/// Upper bound on a string descriptor response. The total length field is a
/// single byte, so no conforming device can report more than this.
pub const STRING_DESCRIPTOR_BUFFER_LEN: usize = 256;

/// Applied to every control transfer against the dongle.
pub const TRANSFER_TIMEOUT: Duration = Duration::from_millis(1000);

/// Decodes a raw string descriptor response into text.
///
/// `transferred` is the byte count the control transfer actually returned.
/// The device reports its own response size in byte 0 and that wins over the
/// transfer count when the descriptor is shorter than what was read. The
/// payload is UTF-16LE with code unit 0 being the length/type header;
/// anything outside of ISO Latin-1 comes out as `?`. At most `max_chars`
/// characters are produced.
pub fn decode_string(
    raw: &[u8],
    transferred: usize,
    max_chars: usize,
) -> Result<String, DescriptorError> {
    if raw.len() < 2 || transferred < 2 {
        // Too short to even carry the length/type header.
        return Err(DescriptorError::UnexpectedType(
            raw.get(1).copied().unwrap_or(0),
        ));
    }

    let mut length = transferred.min(raw.len());
    if (raw[0] as usize) < length {
        length = raw[0] as usize;
    }

    if raw[1] != LIBUSB_DT_STRING {
        return Err(DescriptorError::UnexpectedType(raw[1]));
    }

    let units = length / 2;
    let mut text = String::new();
    let mut count = 0;
    for i in 1..units {
        if count == max_chars {
            break;
        }
        let low = raw[2 * i];
        let high = raw[2 * i + 1];
        if high == 0 {
            text.push(char::from(low));
        } else {
            text.push('?');
        }
        count += 1;
    }

    Ok(text)
}
