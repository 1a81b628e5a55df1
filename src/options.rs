//! Parameter types carried by [`Command`](crate::Command) variants.
//!
//! Every enumeration here maps to exactly one wire byte, taken from the Epson
//! ESC/POS reference. The discriminants are the protocol codes, so they must
//! never be renumbered.

use bitflags::bitflags;

bitflags! {
    /// Flags for `ESC !`, the combined print mode selector.
    pub struct PrintMode: u8 {
        const DEFAULT = 0;
        const ALTERNATE_FONT = 1 << 0;
        const EMPHASIZED = 1 << 3;
        const DOUBLE_HEIGHT = 1 << 4;
        const DOUBLE_WIDTH = 1 << 5;
        const UNDERLINED = 1 << 7;
    }
}

bitflags! {
    /// Paper sensors selectable by `ESC c 3` and `ESC c 4`.
    pub struct PaperEndSensors: u8 {
        const NONE = 0;
        const NEAR_END_SENSOR_1 = 1 << 0;
        const NEAR_END_SENSOR_2 = 1 << 1;
        const END_SENSOR_1 = 1 << 2;
        const END_SENSOR_2 = 1 << 3;
        const ALL = Self::NEAR_END_SENSOR_1.bits
            | Self::NEAR_END_SENSOR_2.bits
            | Self::END_SENSOR_1.bits
            | Self::END_SENSOR_2.bits;
    }
}

impl Default for PrintMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for PaperEndSensors {
    fn default() -> Self {
        Self::NONE
    }
}

/// Underline thickness for `ESC -`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnderlineMode {
    Off = 0,
    Thin = 1,
    Thick = 2,
}

/// Character font for `ESC M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharacterFont {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    SpecialA = 97,
    SpecialB = 98,
}

/// International character set for `ESC R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InternationalCharacterSet {
    UnitedStates = 0,
    France = 1,
    Germany = 2,
    UnitedKingdom = 3,
    Denmark1 = 4,
    Sweden = 5,
    Italy = 6,
    Spain1 = 7,
    Japan = 8,
    Norway = 9,
    Denmark2 = 10,
    Spain2 = 11,
    LatinAmerica = 12,
    Korea = 13,
    SloveniaOrCroatia = 14,
    China = 15,
    Vietnam = 16,
    Arabia = 17,
    IndiaDevanagari = 66,
    IndiaBengali = 67,
    IndiaTamil = 68,
    IndiaTelugu = 69,
    IndiaAssamese = 70,
    IndiaOriya = 71,
    IndiaKannada = 72,
    IndiaMalayalam = 73,
    IndiaGujarati = 74,
    IndiaPunjabi = 75,
    IndiaMarathi = 82,
}

/// 90 degree clockwise rotation for `ESC V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RotationMode {
    Off = 0,
    EnabledNarrow = 1,
    EnabledWide = 2,
}

/// Print color for `ESC r` on two-color printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrintColor {
    Black = 0,
    Red = 1,
}

/// Character code table (code page) for `ESC t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharacterCodeTable {
    Pc437UsaStandardEurope = 0,
    Katakana = 1,
    Pc850Multilingual = 2,
    Pc860Portuguese = 3,
    Pc863CanadianFrench = 4,
    Pc865Nordic = 5,
    Hiragana = 6,
    OnePassKanji1 = 7,
    OnePassKanji2 = 8,
    Pc851Greek = 11,
    Pc853Turkish = 12,
    Pc857Turkish = 13,
    Pc737Greek = 14,
    Iso8859_7Greek = 15,
    Wpc1252 = 16,
    Pc866Cyrillic2 = 17,
    Pc852Latin2 = 18,
    Pc858Euro = 19,
    ThaiCode42 = 20,
    ThaiCode11 = 21,
    ThaiCode13 = 22,
    ThaiCode14 = 23,
    ThaiCode16 = 24,
    ThaiCode17 = 25,
    ThaiCode18 = 26,
    Tcvn3Vietnamese1 = 30,
    Tcvn3Vietnamese2 = 31,
    Pc720Arabic = 32,
    Wpc775BalticRim = 33,
    Pc855Cyrillic = 34,
    Pc861Icelandic = 35,
    Pc862Hebrew = 36,
    Pc864Arabic = 37,
    Pc869Greek = 38,
    Iso8859_2Latin2 = 39,
    Iso8859_15Latin9 = 40,
    Pc1098Farsi = 41,
    Pc1118Lithuanian = 42,
    Pc1119Lithuanian = 43,
    Pc1125Ukrainian = 44,
    Wpc1250Latin2 = 45,
    Wpc1251Cyrillic = 46,
    Wpc1253Greek = 47,
    Wpc1254Turkish = 48,
    Wpc1255Hebrew = 49,
    Wpc1256Arabic = 50,
    Wpc1257BalticRim = 51,
    Wpc1258Vietnamese = 52,
    Kz1048Kazakhstan = 53,
    Devanagari = 66,
    Bengali = 67,
    Tamil = 68,
    Telugu = 69,
    Assamese = 70,
    Oriya = 71,
    Kannada = 72,
    Malayalam = 73,
    Gujarati = 74,
    Punjabi = 75,
    Marathi = 82,
}

/// Character magnification for one axis of `GS !`.
///
/// The value is the multiplier minus one, so it always fits in a nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FontSize {
    Normal = 0,
    Double = 1,
    Triple = 2,
    Quadruple = 3,
    Quintuple = 4,
    Sextuple = 5,
    Septuple = 6,
    Octuple = 7,
}

/// Color selector for the `GS ( N` character effect functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharacterColor {
    None = 48,
    Color1 = 49,
    Color2 = 50,
    Color3 = 51,
}

/// Print direction in page mode for `ESC T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrintDirection {
    LeftToRight = 0,
    BottomToTop = 1,
    RightToLeft = 2,
    TopToBottom = 3,
}

/// Line justification for `ESC a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Justification {
    Left = 0,
    Center = 1,
    Right = 2,
}

macro_rules! impl_code {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Wire byte for this value.
                pub fn code(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_code!(
    UnderlineMode,
    CharacterFont,
    InternationalCharacterSet,
    RotationMode,
    PrintColor,
    CharacterCodeTable,
    FontSize,
    CharacterColor,
    PrintDirection,
    Justification,
);
