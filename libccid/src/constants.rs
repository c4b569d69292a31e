// libccid/src/constants.rs
//! Common protocol constants used across the crate

/// CCID bulk-out message type for an APDU exchange (`PC_to_RDR_XfrBlock`)
pub const PC_TO_RDR_XFR_BLOCK: u8 = 0x6F;

/// CCID bulk-in message type carrying response data (`RDR_to_PC_DataBlock`)
pub const RDR_TO_PC_DATA_BLOCK: u8 = 0x80;

/// CCID message header length for both directions
pub const CCID_HEADER_LEN: usize = 10;

/// Size of the packet read from the bulk-in endpoint per command
pub const CCID_PACKET_LEN: usize = 64;

/// Largest CCID message: header plus a short APDU (CLA INS P1 P2 Lc 255 Le)
pub const MAX_CCID_MESSAGE_LEN: usize = CCID_HEADER_LEN + 261;

/// Trailing APDU status word length (SW1 SW2)
pub const STATUS_WORD_LEN: usize = 2;

/// Pseudo-APDU class byte understood by the reader firmware
pub const APDU_CLA_PSEUDO: u8 = 0xFF;

/// READ BINARY instruction
pub const APDU_INS_READ_BINARY: u8 = 0xB0;
/// UPDATE BINARY instruction
pub const APDU_INS_UPDATE_BINARY: u8 = 0xD6;
/// GET DATA instruction (UID with P1 = 0)
pub const APDU_INS_GET_DATA: u8 = 0xCA;
/// Direct transmit to the tag; the tag command follows in the data field.
pub const APDU_INS_DIRECT_TRANSMIT: u8 = 0x00;

/// NTAG21x PWD_AUTH command code
pub const NTAG_CMD_PWD_AUTH: u8 = 0x1B;

/// NTAG213 page size in bytes
pub const NTAG_PAGE_SIZE: u8 = 4;

/// Highest NTAG213 page address
pub const NTAG213_LAST_PAGE: u8 = 0x2C;

/// First user memory page
pub const NTAG213_USER_FIRST: u8 = 0x04;
/// Last user memory page
pub const NTAG213_USER_LAST: u8 = 0x27;

/// Page holding the dynamic lock bytes
pub const NTAG213_DYNAMIC_LOCK_PAGE: u8 = 0x28;

/// First configuration page (CFG0)
pub const NTAG213_CONFIG_FIRST: u8 = 0x29;

/// Advanced Card Systems vendor ID
pub const DEFAULT_VENDOR_ID: u16 = 0x072f;
/// Default reader product ID
pub const DEFAULT_PRODUCT_ID: u16 = 0x223b;

/// Default bulk-in endpoint address
pub const DEFAULT_IN_ENDPOINT: u8 = 0x81;
/// Default bulk-out endpoint address
pub const DEFAULT_OUT_ENDPOINT: u8 = 0x01;
