// libccid/src/protocol/commands/mod.rs

//! Pseudo-APDUs understood by the reader firmware.

/// PWD_AUTH via direct transmit.
pub mod auth;
/// READ BINARY.
pub mod read;
/// GET DATA (UID).
pub mod uid;
/// UPDATE BINARY.
pub mod write;

pub use auth::pwd_auth;
pub use read::read_binary;
pub use uid::get_uid;
pub use write::update_binary;

use crate::constants::{
    APDU_INS_DIRECT_TRANSMIT, APDU_INS_GET_DATA, APDU_INS_READ_BINARY, APDU_INS_UPDATE_BINARY,
};
use crate::types::Password;
use crate::{Error, Result};

/// Short ISO 7816-4 command APDU.
/// Layout: CLA(1) + INS(1) + P1(1) + P2(1) [+ Lc(1) + data(Lc)] [+ Le(1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    /// Class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2 (the page for binary reads and writes)
    pub p2: u8,
    /// Command data; Lc is derived from its length
    pub data: Vec<u8>,
    /// Expected response length
    pub le: Option<u8>,
}

impl Apdu {
    /// Header-only APDU.
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Attach command data.
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Set the Le byte.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Serialize the APDU. Lc is only emitted when there is data.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let lc = u8::try_from(self.data.len()).map_err(|_| {
            Error::InvalidArgument(format!(
                "APDU data must be at most 255 bytes, got {}",
                self.data.len()
            ))
        })?;

        let mut buf = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        buf.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if lc > 0 {
            buf.push(lc);
            buf.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            buf.push(le);
        }
        Ok(buf)
    }
}

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read `length` bytes starting at `page`.
    ReadBinary {
        /// Start page
        page: u8,
        /// Bytes to read, 1-255
        length: u8,
    },
    /// Write `data` starting at `page`.
    UpdateBinary {
        /// Start page
        page: u8,
        /// Bytes to write, 1-255
        data: Vec<u8>,
    },
    /// Fetch the tag UID.
    GetUid,
    /// NTAG PWD_AUTH through direct transmit.
    PwdAuth {
        /// 4-byte tag password
        password: Password,
    },
}

impl Command {
    /// Instruction byte sent to the reader.
    pub fn ins(&self) -> u8 {
        match self {
            Self::ReadBinary { .. } => APDU_INS_READ_BINARY,
            Self::UpdateBinary { .. } => APDU_INS_UPDATE_BINARY,
            Self::GetUid => APDU_INS_GET_DATA,
            Self::PwdAuth { .. } => APDU_INS_DIRECT_TRANSMIT,
        }
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadBinary { .. } => "READ_BINARY",
            Self::UpdateBinary { .. } => "UPDATE_BINARY",
            Self::GetUid => "GET_UID",
            Self::PwdAuth { .. } => "PWD_AUTH",
        }
    }

    /// Encode the command into the raw APDU bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::ReadBinary { page, length } => read_binary(*page, *length),
            Self::UpdateBinary { page, data } => update_binary(*page, data),
            Self::GetUid => Ok(get_uid()),
            Self::PwdAuth { password } => pwd_auth(password.as_bytes()),
        }
    }
}
