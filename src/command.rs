//! ESC/POS command model and byte encoder.
//!
//! Every printer operation is one [`Command`] variant. [`Command::encode`]
//! turns a command into the exact byte sequence from the Epson ESC/POS
//! reference: a 1 to 4 byte opcode prefix followed by the parameters.
//! Multi-byte integers are sent little-endian (low byte first).
//!
//! ```
//! use escpos::{Command, FontSize, Justification};
//!
//! let data = escpos::encode_all(&[
//!     Command::Initialize,
//!     Command::Justification(Justification::Center),
//!     Command::CharacterSize { vertical: FontSize::Double, horizontal: FontSize::Double },
//!     Command::Ascii("Hello, World!\n".to_string()),
//!     Command::PrintAndFeed { lines: 5 },
//! ]);
//! assert_eq!(&data[..5], &[0x1B, 0x40, 0x1B, 0x61, 0x01]);
//! ```
//!
//! Cutting, user-defined character upload, code conversion (`FS ( C`) and
//! label/black mark control (`FS ( L`) have no variant. Send them with
//! [`Command::Raw`].

use crate::control::{CAN, CR, ESC, FF, GS, HT, LF, NUL, SP};
use crate::options::{
    CharacterCodeTable, CharacterColor, CharacterFont, FontSize, InternationalCharacterSet,
    Justification, PaperEndSensors, PrintColor, PrintDirection, PrintMode, RotationMode,
    UnderlineMode,
};
use crate::raster::BitMatrix;
use crate::text;

/// Most tab stops `ESC D` accepts.
pub const MAX_TAB_POSITIONS: usize = 32;

/// Bytes between the `GS ( L` length field and the raster payload.
const RASTER_HEADER_TAIL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Structural
    /// Bytes copied to the output unchanged.
    Raw(Vec<u8>),
    /// Text sent as ASCII, see [`to_ascii_lossy`](crate::to_ascii_lossy).
    Ascii(String),
    /// Sub-commands encoded in order.
    Group(Vec<Command>),

    /// ESC @
    Initialize,

    // Print
    /// LF
    PrintAndLineFeed,
    /// FF: in page mode, print the page and return to standard mode.
    PrintAndReturnToStandardMode,
    /// CR
    PrintAndCarriageReturn,
    /// ESC FF
    PrintDataInPageMode,
    /// ESC J n, feed in motion units.
    PrintAndFeedPaper(u8),
    /// ESC K n
    PrintAndReverseFeedPaper(u8),
    /// ESC d n
    PrintAndFeed { lines: u8 },
    /// ESC e n
    PrintAndReverseFeed { lines: u8 },

    // Line spacing
    /// ESC 2
    SetLineSpacingToDefault,
    /// ESC 3 n
    SetLineSpacing(u8),

    // Character
    /// CAN
    CancelPrintDataInPageMode,
    /// ESC SP n
    SetRightSideCharacterSpacing(u8),
    /// ESC ! n
    SelectPrintMode(PrintMode),
    /// ESC - n
    Underline(UnderlineMode),
    /// ESC E n
    Emphasize(bool),
    /// ESC G n
    DoubleStrike(bool),
    /// ESC M n
    CharacterFont(CharacterFont),
    /// ESC R n
    InternationalCharacterSet(InternationalCharacterSet),
    /// ESC V n
    Clockwise90DegreeRotation(RotationMode),
    /// ESC r n
    PrintColor(PrintColor),
    /// ESC t n
    CharacterCodeTable(CharacterCodeTable),
    /// ESC { n
    UpsideDown(bool),
    /// GS ! n, vertical multiplier in the high nibble.
    CharacterSize {
        vertical: FontSize,
        horizontal: FontSize,
    },
    /// GS B n
    InverseColors(bool),
    /// GS b n
    FontSmoothing(bool),

    // Character effects, GS ( N
    CharacterColor(CharacterColor),
    BackgroundColor(CharacterColor),
    CharacterShadow {
        enabled: bool,
        color: CharacterColor,
    },

    // User-defined characters
    /// ESC % n
    UseUserDefinedCharacterSet(bool),
    /// ESC ? n
    CancelUserDefinedCharacter(u8),

    // Print position
    /// HT
    HorizontalTab,
    /// ESC $ nL nH
    SetAbsolutePrintPosition(u16),
    /// ESC D n1..nk NUL. Only the first [`MAX_TAB_POSITIONS`] entries are sent.
    SetHorizontalTabPositions(Vec<u8>),
    /// ESC T n
    SelectPrintDirectionInPageMode(PrintDirection),
    /// ESC W
    SetPrintAreaInPageMode {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    /// ESC \ nL nH, negative distances move left.
    SetRelativePrintPosition(i16),
    /// ESC a n
    Justification(Justification),
    /// GS $ nL nH
    SetAbsoluteVerticalPrintPositionInPageMode(u16),
    /// GS L nL nH
    SetLeftMargin(u16),
    /// GS T n
    SetPrintPositionToBeginningOfLine { flush: bool },
    /// GS W nL nH
    SetPrintAreaWidth(u16),
    /// GS \ nL nH, negative distances move up.
    SetRelativeVerticalPrintPositionInPageMode(i16),

    // Paper sensors
    /// ESC c 3 n
    SelectPaperSensorsToOutputPaperEndSignals(PaperEndSensors),
    /// ESC c 4 n
    SelectPaperSensorsToStopPrinting(PaperEndSensors),

    // Mechanism
    /// ESC <
    ReturnHome,
    /// ESC U n
    UnidirectionalPrintMode(bool),

    // Bit image
    /// GS ( L, function 50: print the graphics buffer.
    PrintGraphicsBuffer,
    /// GS ( L (or GS 8 L for large payloads), function 112: store a packed
    /// monochrome raster in the graphics buffer. `data` holds
    /// `ceil(width / 8) * height` bytes.
    StoreMonochromeRaster {
        width: u16,
        height: u16,
        data: Vec<u8>,
    },
}

impl Command {
    /// Word-wrap `content` at `columns` and send it as ASCII.
    pub fn ascii_wrapped(content: &str, columns: usize) -> Command {
        Command::Ascii(text::word_wrap(content, columns))
    }

    /// Store `image` in the graphics buffer and print it.
    pub fn monochrome_raster(image: &BitMatrix) -> Command {
        Command::Group(vec![
            Command::StoreMonochromeRaster {
                width: image.width(),
                height: image.height(),
                data: image.pack(),
            },
            Command::PrintGraphicsBuffer,
        ])
    }

    /// Wire bytes for this command.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    /// Append the wire bytes for this command to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Command::Raw(data) => buf.extend_from_slice(data),
            Command::Ascii(s) => buf.extend(text::to_ascii_lossy(s)),
            Command::Group(commands) => {
                for command in commands {
                    command.encode_into(buf);
                }
            }

            Command::Initialize => buf.extend_from_slice(&[ESC, b'@']),

            Command::PrintAndLineFeed => buf.push(LF),
            Command::PrintAndReturnToStandardMode => buf.push(FF),
            Command::PrintAndCarriageReturn => buf.push(CR),
            Command::PrintDataInPageMode => buf.extend_from_slice(&[ESC, FF]),
            Command::PrintAndFeedPaper(n) => buf.extend_from_slice(&[ESC, b'J', *n]),
            Command::PrintAndReverseFeedPaper(n) => buf.extend_from_slice(&[ESC, b'K', *n]),
            Command::PrintAndFeed { lines } => buf.extend_from_slice(&[ESC, b'd', *lines]),
            Command::PrintAndReverseFeed { lines } => buf.extend_from_slice(&[ESC, b'e', *lines]),

            Command::SetLineSpacingToDefault => buf.extend_from_slice(&[ESC, b'2']),
            Command::SetLineSpacing(n) => buf.extend_from_slice(&[ESC, b'3', *n]),

            Command::CancelPrintDataInPageMode => buf.push(CAN),
            Command::SetRightSideCharacterSpacing(n) => buf.extend_from_slice(&[ESC, SP, *n]),
            Command::SelectPrintMode(mode) => buf.extend_from_slice(&[ESC, b'!', mode.bits()]),
            Command::Underline(mode) => buf.extend_from_slice(&[ESC, b'-', mode.code()]),
            Command::Emphasize(on) => buf.extend_from_slice(&[ESC, b'E', flag(*on)]),
            Command::DoubleStrike(on) => buf.extend_from_slice(&[ESC, b'G', flag(*on)]),
            Command::CharacterFont(font) => buf.extend_from_slice(&[ESC, b'M', font.code()]),
            Command::InternationalCharacterSet(set) => {
                buf.extend_from_slice(&[ESC, b'R', set.code()])
            }
            Command::Clockwise90DegreeRotation(mode) => {
                buf.extend_from_slice(&[ESC, b'V', mode.code()])
            }
            Command::PrintColor(color) => buf.extend_from_slice(&[ESC, b'r', color.code()]),
            Command::CharacterCodeTable(table) => buf.extend_from_slice(&[ESC, b't', table.code()]),
            Command::UpsideDown(on) => buf.extend_from_slice(&[ESC, b'{', flag(*on)]),
            Command::CharacterSize {
                vertical,
                horizontal,
            } => buf.extend_from_slice(&[GS, b'!', (vertical.code() << 4) | horizontal.code()]),
            Command::InverseColors(on) => buf.extend_from_slice(&[GS, b'B', flag(*on)]),
            Command::FontSmoothing(on) => buf.extend_from_slice(&[GS, b'b', flag(*on)]),

            Command::CharacterColor(color) => {
                buf.extend_from_slice(&[GS, b'(', b'N', 0x02, 0x00, 0x30, color.code()])
            }
            Command::BackgroundColor(color) => {
                buf.extend_from_slice(&[GS, b'(', b'N', 0x02, 0x00, 0x31, color.code()])
            }
            Command::CharacterShadow { enabled, color } => buf.extend_from_slice(&[
                GS,
                b'(',
                b'N',
                0x02,
                0x00,
                0x32,
                flag(*enabled),
                color.code(),
            ]),

            Command::UseUserDefinedCharacterSet(on) => {
                buf.extend_from_slice(&[ESC, b'%', flag(*on)])
            }
            Command::CancelUserDefinedCharacter(c) => buf.extend_from_slice(&[ESC, b'?', *c]),

            Command::HorizontalTab => buf.push(HT),
            Command::SetAbsolutePrintPosition(n) => {
                buf.extend_from_slice(&[ESC, b'$']);
                buf.extend_from_slice(&n.to_le_bytes());
            }
            Command::SetHorizontalTabPositions(positions) => {
                buf.extend_from_slice(&[ESC, b'D']);
                let kept = positions.len().min(MAX_TAB_POSITIONS);
                buf.extend_from_slice(&positions[..kept]);
                buf.push(NUL);
            }
            Command::SelectPrintDirectionInPageMode(dir) => {
                buf.extend_from_slice(&[ESC, b'T', dir.code()])
            }
            Command::SetPrintAreaInPageMode {
                x,
                y,
                width,
                height,
            } => {
                buf.extend_from_slice(&[ESC, b'W']);
                for n in &[x, y, width, height] {
                    buf.extend_from_slice(&n.to_le_bytes());
                }
            }
            Command::SetRelativePrintPosition(distance) => {
                buf.extend_from_slice(&[ESC, b'\\']);
                buf.extend_from_slice(&(*distance as u16).to_le_bytes());
            }
            Command::Justification(j) => buf.extend_from_slice(&[ESC, b'a', j.code()]),
            Command::SetAbsoluteVerticalPrintPositionInPageMode(n) => {
                buf.extend_from_slice(&[GS, b'$']);
                buf.extend_from_slice(&n.to_le_bytes());
            }
            Command::SetLeftMargin(n) => {
                buf.extend_from_slice(&[GS, b'L']);
                buf.extend_from_slice(&n.to_le_bytes());
            }
            Command::SetPrintPositionToBeginningOfLine { flush } => {
                buf.extend_from_slice(&[GS, b'T', flag(*flush)])
            }
            Command::SetPrintAreaWidth(n) => {
                buf.extend_from_slice(&[GS, b'W']);
                buf.extend_from_slice(&n.to_le_bytes());
            }
            Command::SetRelativeVerticalPrintPositionInPageMode(distance) => {
                buf.extend_from_slice(&[GS, b'\\']);
                buf.extend_from_slice(&(*distance as u16).to_le_bytes());
            }

            Command::SelectPaperSensorsToOutputPaperEndSignals(sensors) => {
                buf.extend_from_slice(&[ESC, b'c', b'3', sensors.bits()])
            }
            Command::SelectPaperSensorsToStopPrinting(sensors) => {
                buf.extend_from_slice(&[ESC, b'c', b'4', sensors.bits()])
            }

            Command::ReturnHome => buf.extend_from_slice(&[ESC, b'<']),
            Command::UnidirectionalPrintMode(on) => buf.extend_from_slice(&[ESC, b'U', flag(*on)]),

            Command::PrintGraphicsBuffer => {
                buf.extend_from_slice(&[GS, b'(', b'L', 0x02, 0x00, 0x30, 0x32])
            }
            Command::StoreMonochromeRaster {
                width,
                height,
                data,
            } => store_raster(buf, *width, *height, data),
        }
    }
}

/// Encode a list of commands into one buffer.
pub fn encode_all(commands: &[Command]) -> Vec<u8> {
    let mut buf = Vec::new();
    for command in commands {
        command.encode_into(&mut buf);
    }
    buf
}

fn flag(on: bool) -> u8 {
    if on {
        1
    } else {
        0
    }
}

fn store_raster(buf: &mut Vec<u8>, width: u16, height: u16, data: &[u8]) {
    let len = RASTER_HEADER_TAIL + data.len();
    buf.reserve(len + 7);

    if len <= u16::MAX as usize {
        // GS ( L pL pH
        buf.extend_from_slice(&[GS, b'(', b'L']);
        buf.extend_from_slice(&(len as u16).to_le_bytes());
    } else {
        // GS 8 L p1 p2 p3 p4
        buf.extend_from_slice(&[GS, b'8', b'L']);
        buf.extend_from_slice(&(len as u32).to_le_bytes());
    }

    // m fn a bx by c: function 112, monochrome, 1x1 scale, color 1
    buf.extend_from_slice(&[0x30, 0x70, 0x30, 0x01, 0x01, 0x31]);
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.extend_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_commands() {
        assert_eq!(Command::PrintAndLineFeed.encode(), vec![0x0A]);
        assert_eq!(Command::PrintAndReturnToStandardMode.encode(), vec![0x0C]);
        assert_eq!(Command::PrintAndCarriageReturn.encode(), vec![0x0D]);
        assert_eq!(Command::PrintDataInPageMode.encode(), vec![0x1B, 0x0C]);
        assert_eq!(Command::PrintAndFeedPaper(30).encode(), vec![0x1B, 0x4A, 30]);
        assert_eq!(Command::PrintAndReverseFeedPaper(7).encode(), vec![0x1B, 0x4B, 7]);
        assert_eq!(Command::PrintAndFeed { lines: 5 }.encode(), vec![0x1B, 0x64, 0x05]);
        assert_eq!(Command::PrintAndReverseFeed { lines: 2 }.encode(), vec![0x1B, 0x65, 2]);
        assert_eq!(Command::Initialize.encode(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(Command::SetLineSpacingToDefault.encode(), vec![0x1B, 0x32]);
        assert_eq!(Command::SetLineSpacing(24).encode(), vec![0x1B, 0x33, 24]);
    }

    #[test]
    fn test_character_commands() {
        assert_eq!(Command::CancelPrintDataInPageMode.encode(), vec![0x18]);
        assert_eq!(Command::SetRightSideCharacterSpacing(3).encode(), vec![0x1B, 0x20, 3]);
        assert_eq!(
            Command::SelectPrintMode(PrintMode::EMPHASIZED | PrintMode::DOUBLE_HEIGHT).encode(),
            vec![0x1B, 0x21, 0x18]
        );
        assert_eq!(Command::Underline(UnderlineMode::Thin).encode(), vec![0x1B, 0x2D, 1]);
        assert_eq!(Command::Emphasize(true).encode(), vec![0x1B, 0x45, 1]);
        assert_eq!(Command::DoubleStrike(false).encode(), vec![0x1B, 0x47, 0]);
        assert_eq!(
            Command::CharacterFont(CharacterFont::SpecialA).encode(),
            vec![0x1B, 0x4D, 97]
        );
        assert_eq!(
            Command::InternationalCharacterSet(InternationalCharacterSet::Germany).encode(),
            vec![0x1B, 0x52, 2]
        );
        assert_eq!(
            Command::Clockwise90DegreeRotation(RotationMode::EnabledWide).encode(),
            vec![0x1B, 0x56, 2]
        );
        assert_eq!(Command::PrintColor(PrintColor::Red).encode(), vec![0x1B, 0x72, 1]);
        assert_eq!(
            Command::CharacterCodeTable(CharacterCodeTable::Pc858Euro).encode(),
            vec![0x1B, 0x74, 19]
        );
        assert_eq!(Command::UpsideDown(true).encode(), vec![0x1B, 0x7B, 1]);
        assert_eq!(Command::InverseColors(true).encode(), vec![0x1D, 0x42, 1]);
        assert_eq!(Command::FontSmoothing(false).encode(), vec![0x1D, 0x62, 0]);
    }

    #[test]
    fn test_character_size_nibbles() {
        let cmd = Command::CharacterSize {
            vertical: FontSize::Double,
            horizontal: FontSize::Double,
        };
        assert_eq!(cmd.encode(), vec![0x1D, 0x21, 0x11]);

        let cmd = Command::CharacterSize {
            vertical: FontSize::Octuple,
            horizontal: FontSize::Normal,
        };
        assert_eq!(cmd.encode(), vec![0x1D, 0x21, 0x70]);
    }

    #[test]
    fn test_character_effects() {
        assert_eq!(
            Command::CharacterColor(CharacterColor::Color1).encode(),
            vec![0x1D, 0x28, 0x4E, 0x02, 0x00, 0x30, 0x31]
        );
        assert_eq!(
            Command::BackgroundColor(CharacterColor::None).encode(),
            vec![0x1D, 0x28, 0x4E, 0x02, 0x00, 0x31, 0x30]
        );
        assert_eq!(
            Command::CharacterShadow {
                enabled: true,
                color: CharacterColor::Color2,
            }
            .encode(),
            vec![0x1D, 0x28, 0x4E, 0x02, 0x00, 0x32, 0x01, 0x32]
        );
    }

    #[test]
    fn test_user_defined_characters() {
        assert_eq!(Command::UseUserDefinedCharacterSet(true).encode(), vec![0x1B, 0x25, 1]);
        assert_eq!(Command::CancelUserDefinedCharacter(0x41).encode(), vec![0x1B, 0x3F, 0x41]);
    }

    #[test]
    fn test_positions_are_little_endian() {
        assert_eq!(Command::HorizontalTab.encode(), vec![0x09]);
        assert_eq!(
            Command::SetAbsolutePrintPosition(0x0134).encode(),
            vec![0x1B, 0x24, 0x34, 0x01]
        );
        assert_eq!(
            Command::SetAbsoluteVerticalPrintPositionInPageMode(300).encode(),
            vec![0x1D, 0x24, 0x2C, 0x01]
        );
        assert_eq!(Command::SetLeftMargin(0x0102).encode(), vec![0x1D, 0x4C, 0x02, 0x01]);
        assert_eq!(Command::SetPrintAreaWidth(512).encode(), vec![0x1D, 0x57, 0x00, 0x02]);
        assert_eq!(
            Command::SetPrintAreaInPageMode {
                x: 1,
                y: 0x0203,
                width: 512,
                height: 0xFFFF,
            }
            .encode(),
            vec![0x1B, 0x57, 0x01, 0x00, 0x03, 0x02, 0x00, 0x02, 0xFF, 0xFF]
        );
        assert_eq!(
            Command::SetPrintPositionToBeginningOfLine { flush: true }.encode(),
            vec![0x1D, 0x54, 1]
        );
        assert_eq!(
            Command::SelectPrintDirectionInPageMode(PrintDirection::BottomToTop).encode(),
            vec![0x1B, 0x54, 1]
        );
        assert_eq!(
            Command::Justification(Justification::Center).encode(),
            vec![0x1B, 0x61, 0x01]
        );
    }

    #[test]
    fn test_relative_positions_wrap_negative() {
        assert_eq!(
            Command::SetRelativePrintPosition(10).encode(),
            vec![0x1B, 0x5C, 0x0A, 0x00]
        );
        assert_eq!(
            Command::SetRelativePrintPosition(-1).encode(),
            vec![0x1B, 0x5C, 0xFF, 0xFF]
        );
        assert_eq!(
            Command::SetRelativeVerticalPrintPositionInPageMode(-256).encode(),
            vec![0x1D, 0x5C, 0x00, 0xFF]
        );
        assert_eq!(
            Command::SetRelativeVerticalPrintPositionInPageMode(i16::MIN).encode(),
            vec![0x1D, 0x5C, 0x00, 0x80]
        );
    }

    #[test]
    fn test_tab_positions_truncate() {
        assert_eq!(
            Command::SetHorizontalTabPositions(vec![8, 16, 24]).encode(),
            vec![0x1B, 0x44, 8, 16, 24, 0x00]
        );
        assert_eq!(
            Command::SetHorizontalTabPositions(vec![]).encode(),
            vec![0x1B, 0x44, 0x00]
        );

        let positions: Vec<u8> = (1..=40).collect();
        let encoded = Command::SetHorizontalTabPositions(positions).encode();
        assert_eq!(encoded.len(), 2 + MAX_TAB_POSITIONS + 1);
        assert_eq!(encoded[2 + 31], 32);
        assert_eq!(*encoded.last().unwrap(), 0x00);
    }

    #[test]
    fn test_paper_sensors_and_mechanism() {
        assert_eq!(
            Command::SelectPaperSensorsToOutputPaperEndSignals(PaperEndSensors::ALL).encode(),
            vec![0x1B, 0x63, 0x33, 0x0F]
        );
        assert_eq!(
            Command::SelectPaperSensorsToStopPrinting(PaperEndSensors::NEAR_END_SENSOR_1).encode(),
            vec![0x1B, 0x63, 0x34, 0x01]
        );
        assert_eq!(Command::ReturnHome.encode(), vec![0x1B, 0x3C]);
        assert_eq!(Command::UnidirectionalPrintMode(true).encode(), vec![0x1B, 0x55, 1]);
    }

    #[test]
    fn test_structural_commands() {
        assert_eq!(Command::Raw(vec![0x1D, 0x56, 0x00]).encode(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(Command::Ascii("Hi\n".to_string()).encode(), b"Hi\n".to_vec());
        assert_eq!(Command::Group(vec![]).encode(), Vec::<u8>::new());

        let nested = Command::Group(vec![
            Command::Raw(vec![1]),
            Command::Group(vec![Command::Raw(vec![2]), Command::Raw(vec![3])]),
            Command::Raw(vec![4]),
        ]);
        assert_eq!(nested.encode(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ascii_wrapped() {
        assert_eq!(
            Command::ascii_wrapped("ab cccccccccc de", 5),
            Command::Ascii("ab\ncccccccccc\nde".to_string())
        );
    }

    #[test]
    fn test_print_graphics_buffer() {
        assert_eq!(
            Command::PrintGraphicsBuffer.encode(),
            vec![0x1D, 0x28, 0x4C, 0x02, 0x00, 0x30, 0x32]
        );
    }

    #[test]
    fn test_store_raster_header() {
        let cmd = Command::StoreMonochromeRaster {
            width: 9,
            height: 1,
            data: vec![0xFF, 0x80],
        };
        assert_eq!(
            cmd.encode(),
            vec![
                0x1D, 0x28, 0x4C, 12, 0x00, 0x30, 0x70, 0x30, 0x01, 0x01, 0x31, 9, 0, 1, 0, 0xFF,
                0x80,
            ]
        );
    }

    #[test]
    fn test_store_raster_switches_to_long_form() {
        // largest payload that still fits the 16-bit length field
        let data = vec![0xAA; 0xFFFF - RASTER_HEADER_TAIL];
        let encoded = Command::StoreMonochromeRaster {
            width: 8,
            height: data.len() as u16,
            data: data.clone(),
        }
        .encode();
        assert_eq!(&encoded[..5], &[0x1D, 0x28, 0x4C, 0xFF, 0xFF]);
        assert_eq!(encoded.len(), 5 + RASTER_HEADER_TAIL + data.len());

        let data = vec![0x55; 0xFFFF - RASTER_HEADER_TAIL + 1];
        let encoded = Command::StoreMonochromeRaster {
            width: 16,
            height: 32763,
            data: data.clone(),
        }
        .encode();
        assert_eq!(&encoded[..7], &[0x1D, 0x38, 0x4C, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(&encoded[7..13], &[0x30, 0x70, 0x30, 0x01, 0x01, 0x31]);
        assert_eq!(&encoded[13..17], &[16, 0, 0xFB, 0x7F]);
        assert_eq!(encoded.len(), 7 + RASTER_HEADER_TAIL + data.len());
    }

    #[test]
    fn test_monochrome_raster_pairs_store_and_print() {
        let image = BitMatrix::from_rows(&[vec![true; 5], vec![false; 5]]);
        let cmd = Command::monochrome_raster(&image);
        assert_eq!(
            cmd,
            Command::Group(vec![
                Command::StoreMonochromeRaster {
                    width: 5,
                    height: 2,
                    data: vec![0xF8, 0x00],
                },
                Command::PrintGraphicsBuffer,
            ])
        );
    }

    #[test]
    fn test_encode_all_matches_group() {
        let commands = vec![
            Command::Justification(Justification::Right),
            Command::Ascii("total".to_string()),
            Command::PrintAndLineFeed,
        ];
        assert_eq!(encode_all(&commands), Command::Group(commands).encode());
    }
}
