use escpos::{BitMatrix, Command, Config, Justification, Printer, EPSON_VENDOR_ID};
use qrcode::{Color, QrCode};
use std::env;
//
// cargo run --example print_qr "https://example.com" 6
//

const QUIET_ZONE: usize = 4;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data = args.get(1).map(String::as_str).unwrap_or("12345-1");
    let scale: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(6);

    let code = QrCode::new(data.as_bytes()).unwrap();
    let bitmap = render(&code, scale);
    println!(
        "QR version {:?}, {} modules, {}x{} dots",
        code.version(),
        code.width(),
        bitmap.width(),
        bitmap.height()
    );

    let vendor_id = env::var("ESCPOS_VENDOR_ID")
        .ok()
        .and_then(|v| u16::from_str_radix(v.trim_start_matches("0x"), 16).ok())
        .unwrap_or(EPSON_VENDOR_ID);
    let product_id = env::var("ESCPOS_PRODUCT_ID")
        .ok()
        .and_then(|v| u16::from_str_radix(v.trim_start_matches("0x"), 16).ok())
        .unwrap_or(0x0202);

    let printer = Printer::new(Config::new(vendor_id, product_id)).unwrap();
    printer
        .send(&[
            Command::Initialize,
            Command::Justification(Justification::Center),
            Command::monochrome_raster(&bitmap),
            Command::Ascii(format!("{}\n", data)),
            Command::PrintAndFeed { lines: 4 },
        ])
        .unwrap();
}

/// Scale every module to `scale` x `scale` dots, with a white quiet zone.
fn render(code: &QrCode, scale: usize) -> BitMatrix {
    let modules = code.width();
    let colors = code.to_colors();
    let side = (modules + QUIET_ZONE * 2) * scale;

    let mut bitmap = BitMatrix::new(side as u16, side as u16);
    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let (mx, my) = (i % modules + QUIET_ZONE, i / modules + QUIET_ZONE);
        for dy in 0..scale {
            for dx in 0..scale {
                bitmap.set((mx * scale + dx) as u16, (my * scale + dy) as u16, true);
            }
        }
    }
    bitmap
}
