use escpos::{BitMatrix, Command, Config, Printer, EPSON_VENDOR_ID};
use image::GenericImageView;
use std::env;

fn print_usage() {
    println!("Usage: cargo run --example print_image <IMAGE> [THRESHOLD]");
    println!("  IMAGE      Any file the image crate can decode");
    println!("  THRESHOLD  Gray level (0-255) at or below which a dot is printed, default 128");
    println!("\nThe image is printed 1:1, 576 dots wide on 80mm paper.");
}

fn main() {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let threshold: u8 = match args.get(2) {
        Some(t) => match t.parse() {
            Ok(t) => t,
            Err(_) => {
                eprintln!("Error: invalid threshold '{}'", t);
                print_usage();
                return;
            }
        },
        None => 128,
    };

    let picture = match image::open(&args[1]) {
        Ok(picture) => picture,
        Err(err) => {
            eprintln!("Error: could not decode {}: {}", args[1], err);
            return;
        }
    };
    let (width, height) = picture.dimensions();
    println!("Loaded {} ({}x{})", args[1], width, height);

    let rgba = picture.to_rgba8().into_raw();
    let bitmap = BitMatrix::from_rgba(width as u16, height as u16, &rgba, threshold);

    let vendor_id = hex_var("ESCPOS_VENDOR_ID", EPSON_VENDOR_ID);
    let product_id = hex_var("ESCPOS_PRODUCT_ID", 0x0202);

    match Printer::new(Config::new(vendor_id, product_id)) {
        Ok(printer) => printer
            .send(&[
                Command::Initialize,
                Command::monochrome_raster(&bitmap),
                Command::PrintAndFeed { lines: 4 },
            ])
            .unwrap(),
        Err(err) => println!("ERROR {:#?}", err),
    }
}

fn hex_var(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| u16::from_str_radix(v.trim_start_matches("0x"), 16).ok())
        .unwrap_or(default)
}
