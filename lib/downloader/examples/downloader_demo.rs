use anyhow::Result;
use downloader::Downloader;
use std::io::Write;

fn main() -> Result<()> {
    let save_path = "./test_image.png";
    let download_url = "https://www.rust-lang.org/logos/rust-logo-512x512.png";

    println!("Starting download from: {}", download_url);

    let body = Downloader::new(download_url).fetch(|downloaded, total, progress| {
        if total > 0 {
            print!(
                "\rProgress: {:.2}% ({} / {} bytes)",
                progress * 100.0,
                downloaded,
                total
            );
        } else {
            print!("\rDownloaded {} bytes", downloaded);
        }
        _ = std::io::stdout().flush();
    })?;

    std::fs::write(save_path, &body)?;
    println!("\n✓ Download completed, saved to: {}", save_path);

    Ok(())
}
