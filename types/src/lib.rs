#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// The identity a dongle has to present before we will talk to it.
///
/// The firmware ships with a shared vendor/product id pair, so the numeric
/// ids alone are not enough to tell our dongle apart from unrelated hardware.
/// Both descriptor strings have to match as well.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub vendor_name: String,
    pub product_id: u16,
    pub product_name: String,
}

/// STATUS register of the nRF24 radio on the dongle, reported verbatim by
/// the status request.
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NrfStatus(pub u8);

impl NrfStatus {
    /// RX_DR - payload waiting in the RX FIFO.
    pub fn data_ready(self) -> bool {
        self.0 & 0x40 != 0
    }

    /// TX_DS - last payload transmitted (and acknowledged, when auto-ack is on).
    pub fn data_sent(self) -> bool {
        self.0 & 0x20 != 0
    }

    /// MAX_RT - retransmission limit hit.
    pub fn max_retries(self) -> bool {
        self.0 & 0x10 != 0
    }

    /// RX_P_NO - pipe number of the payload at the head of the RX FIFO.
    /// `None` when the FIFO is empty.
    pub fn rx_pipe(self) -> Option<u8> {
        match (self.0 >> 1) & 0x07 {
            pipe @ 0..=5 => Some(pipe),
            _ => None,
        }
    }

    /// TX_FULL - the TX FIFO cannot take another payload.
    pub fn tx_full(self) -> bool {
        self.0 & 0x01 != 0
    }
}

impl std::fmt::Display for NrfStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rx_dr={} tx_ds={} max_rt={} rx_p_no={} tx_full={}",
            u8::from(self.data_ready()),
            u8::from(self.data_sent()),
            u8::from(self.max_retries()),
            (self.0 >> 1) & 0x07,
            u8::from(self.tx_full()),
        )
    }
}

impl std::fmt::Debug for NrfStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NrfStatus({:#04x})", self.0)
    }
}
