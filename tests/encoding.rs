use escpos::{
    encode_all, BitMatrix, Command, FontSize, Justification, PaperEndSensors, PrintMode,
    UnderlineMode,
};
use pretty_assertions::assert_eq;

fn receipt() -> Vec<Command> {
    vec![
        Command::Initialize,
        Command::Justification(Justification::Center),
        Command::CharacterSize {
            vertical: FontSize::Double,
            horizontal: FontSize::Double,
        },
        Command::Ascii("Hello, World!\n\n".to_string()),
        Command::Justification(Justification::Left),
        Command::CharacterSize {
            vertical: FontSize::Normal,
            horizontal: FontSize::Normal,
        },
        Command::SelectPrintMode(PrintMode::EMPHASIZED | PrintMode::UNDERLINED),
        Command::Underline(UnderlineMode::Thick),
        Command::SetRelativePrintPosition(-12),
        Command::SelectPaperSensorsToStopPrinting(PaperEndSensors::ALL),
        Command::ascii_wrapped("Welcome to the exciting new world of printing receipts.", 16),
        Command::monochrome_raster(&BitMatrix::from_rows(&[
            vec![true; 9],
            vec![false; 9],
            vec![true; 9],
        ])),
        Command::PrintAndFeed { lines: 5 },
        Command::Raw(vec![0x1D, 0x56, 0x00]),
    ]
}

#[test]
fn literal_character_size() {
    let cmd = Command::CharacterSize {
        vertical: FontSize::Double,
        horizontal: FontSize::Double,
    };
    assert_eq!(cmd.encode(), vec![0x1D, 0x21, 0x11]);
}

#[test]
fn literal_justification() {
    assert_eq!(
        Command::Justification(Justification::Center).encode(),
        vec![0x1B, 0x61, 0x01]
    );
}

#[test]
fn literal_print_and_feed() {
    assert_eq!(
        Command::PrintAndFeed { lines: 5 }.encode(),
        vec![0x1B, 0x64, 0x05]
    );
}

#[test]
fn encoding_is_deterministic() {
    for command in receipt() {
        assert_eq!(command.encode(), command.encode());
    }
    assert_eq!(encode_all(&receipt()), encode_all(&receipt()));
}

#[test]
fn group_is_concatenation() {
    let commands = receipt();
    for a in &commands {
        for b in &commands {
            let mut expected = a.encode();
            expected.extend(b.encode());
            assert_eq!(Command::Group(vec![a.clone(), b.clone()]).encode(), expected);
        }
    }
}

#[test]
fn nested_groups_flatten_in_order() {
    let commands = receipt();
    let (head, tail) = commands.split_at(5);
    let nested = Command::Group(vec![
        Command::Group(head.to_vec()),
        Command::Group(vec![Command::Group(tail.to_vec())]),
    ]);
    assert_eq!(nested.encode(), encode_all(&commands));
}

#[test]
fn wrapped_text_reaches_the_wire() {
    let cmd = Command::ascii_wrapped("ab cccccccccc de", 5);
    assert_eq!(cmd.encode(), b"ab\ncccccccccc\nde".to_vec());
}

#[test]
fn raster_rows_pack_msb_first() {
    let cases: [(usize, &[u8]); 3] = [(8, &[0xFF]), (5, &[0xF8]), (9, &[0xFF, 0x80])];
    for (width, payload) in cases.iter() {
        let image = BitMatrix::from_rows(&[vec![true; *width]]);
        assert_eq!(image.pack(), payload.to_vec(), "width {}", width);

        let encoded = Command::monochrome_raster(&image).encode();
        let len = 10 + payload.len() as u8;
        let mut expected = vec![
            0x1D, 0x28, 0x4C, len, 0x00, 0x30, 0x70, 0x30, 0x01, 0x01, 0x31,
            *width as u8, 0x00, 0x01, 0x00,
        ];
        expected.extend_from_slice(payload);
        expected.extend_from_slice(&[0x1D, 0x28, 0x4C, 0x02, 0x00, 0x30, 0x32]);
        assert_eq!(encoded, expected);
    }
}

#[test]
fn raster_from_luma_buffer() {
    // 10 x 2 grayscale: dark left half, light right half
    let mut pixels = vec![255u8; 20];
    for y in 0..2 {
        for x in 0..5 {
            pixels[y * 10 + x] = 0;
        }
    }
    let image = BitMatrix::from_luma(10, 2, &pixels, 128);
    assert_eq!(image.pack(), vec![0xF8, 0x00, 0xF8, 0x00]);
}
