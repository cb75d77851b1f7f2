/// Applies every menu filter to an image and writes one PNG per filter.
///
/// Usage: cargo run --example filters_demo -- [input image]
use image::{Rgb, RgbImage};
use image_effect::{FilterKind, ImageFile};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let source = match std::env::args().nth(1) {
        Some(path) => ImageFile::load(path)?,
        None => ImageFile::new(RgbImage::from_fn(256, 256, |x, y| {
            let ring = ((x as i32 - 128).pow(2) + (y as i32 - 128).pow(2)) < 80 * 80;
            if ring {
                Rgb([220, 80, (x / 2) as u8])
            } else {
                Rgb([(y / 2) as u8, 160, 200])
            }
        })),
    };

    for kind in FilterKind::all() {
        let filtered = source.apply(&kind.effect(None))?;

        let filename = format!("{}.png", kind.slug());
        filtered.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All filters applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
