use crate::device::Reader;
use crate::protocol::{ApduResponse, Command};
use crate::types::Password;
use crate::Result;

/// Forward PWD_AUTH to the tag. On success the body carries the tag's PACK;
/// a wrong password shows up in the status word, not as an error.
pub fn authenticate(reader: &mut Reader, password: &[u8]) -> Result<ApduResponse> {
    let password = Password::try_from(password)?;
    let frame = reader.execute(&Command::PwdAuth { password })?;
    frame.apdu()
}
