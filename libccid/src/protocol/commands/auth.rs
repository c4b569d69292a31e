// libccid/src/protocol/commands/auth.rs

use super::Apdu;
use crate::constants::{APDU_CLA_PSEUDO, APDU_INS_DIRECT_TRANSMIT, NTAG_CMD_PWD_AUTH};
use crate::types::Password;
use crate::Result;

/// Encode an NTAG21x PWD_AUTH wrapped in a direct-transmit pseudo APDU.
/// Layout: FF 00 00 00 05 1B pwd(4)
pub fn pwd_auth(password: &[u8]) -> Result<Vec<u8>> {
    let password = Password::try_from(password)?;

    let mut data = Vec::with_capacity(5);
    data.push(NTAG_CMD_PWD_AUTH);
    data.extend_from_slice(password.as_bytes());

    Apdu::new(APDU_CLA_PSEUDO, APDU_INS_DIRECT_TRANSMIT, 0x00, 0x00)
        .with_data(data)
        .encode()
}
