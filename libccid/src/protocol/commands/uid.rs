// libccid/src/protocol/commands/uid.rs

use crate::constants::{APDU_CLA_PSEUDO, APDU_INS_GET_DATA};

/// Encode GET DATA (UID): `FF CA 00 00 00`
pub fn get_uid() -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    buf.extend_from_slice(&[APDU_CLA_PSEUDO, APDU_INS_GET_DATA, 0x00, 0x00]);
    // Le = 0: return the full UID
    buf.push(0x00);
    buf
}
