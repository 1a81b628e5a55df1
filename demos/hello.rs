use escpos::{Command, FontSize, Justification, EPSON_VENDOR_ID};
use std::env;
//
// cargo run --example hello
//
// ESCPOS_VENDOR_ID / ESCPOS_PRODUCT_ID (hex) select the printer, either from
// the environment or a .env file. The default is an Epson TM-T20III.
//

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let vendor_id = hex_var("ESCPOS_VENDOR_ID", EPSON_VENDOR_ID);
    let product_id = hex_var("ESCPOS_PRODUCT_ID", 0x0202);

    let commands = [
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
        Command::ascii_wrapped(
            "Welcome to the exciting new world of printing receipts.",
            48,
        ),
        Command::PrintAndLineFeed,
        Command::PrintAndFeed { lines: 5 },
        // GS V 0: full cut has no Command variant
        Command::Raw(vec![0x1D, 0x56, 0x00]),
    ];

    let data = escpos::encode_all(&commands);
    println!("Sending {} bytes to {:04x}:{:04x}", data.len(), vendor_id, product_id);

    match escpos::print(vendor_id, product_id, &data) {
        Ok(()) => println!("print success"),
        Err(err) => println!("print failed {:?}", err),
    }
}

fn hex_var(name: &str, default: u16) -> u16 {
    match env::var(name) {
        Ok(value) => match u16::from_str_radix(value.trim_start_matches("0x"), 16) {
            Ok(id) => id,
            Err(_) => {
                eprintln!("Error: {} is not a hex id: {}", name, value);
                default
            }
        },
        Err(_) => default,
    }
}
