//! ASCII control bytes used as ESC/POS opcode prefixes.
//!
//! Only the bytes that start or terminate a command live here. Parameter
//! letters (`b'a'`, `b'!'`, ...) are written inline at the call site as byte
//! literals.

pub const NUL: u8 = 0x00;
pub const HT: u8 = 0x09;
pub const LF: u8 = 0x0A;
pub const FF: u8 = 0x0C;
pub const CR: u8 = 0x0D;
pub const CAN: u8 = 0x18;
pub const ESC: u8 = 0x1B;
pub const FS: u8 = 0x1C;
pub const GS: u8 = 0x1D;
pub const SP: u8 = 0x20;
