//! ESC/POS Printer Driver
//!
//! This crate encodes Epson ESC/POS commands into the exact byte stream a
//! thermal receipt printer expects, and hands that stream to the printer over
//! a USB bulk transfer.
//!
//! Building and encoding commands is pure and cannot fail. Only the USB
//! transport returns errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use escpos::{Command, FontSize, Justification, EPSON_VENDOR_ID};
//!
//! let data = escpos::encode_all(&[
//!     Command::Justification(Justification::Center),
//!     Command::CharacterSize { vertical: FontSize::Double, horizontal: FontSize::Double },
//!     Command::Ascii("Hello, World!\n\n".to_string()),
//!     Command::PrintAndFeed { lines: 5 },
//! ]);
//!
//! // Epson TM-T20III
//! escpos::print(EPSON_VENDOR_ID, 0x0202, &data).unwrap();
//! ```

pub mod control;

mod command;
mod error;
mod options;
mod printer;
mod raster;
mod text;

pub use crate::{
    command::{encode_all, Command, MAX_TAB_POSITIONS},
    error::Error,
    options::{
        CharacterCodeTable, CharacterColor, CharacterFont, FontSize, InternationalCharacterSet,
        Justification, PaperEndSensors, PrintColor, PrintDirection, PrintMode, RotationMode,
        UnderlineMode,
    },
    printer::{print, Config, Printer, EPSON_VENDOR_ID},
    raster::{pack_row, BitMatrix},
    text::{to_ascii_lossy, word_wrap},
};
