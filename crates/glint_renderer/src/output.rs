//! Image output: plain PPM (P3) and PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write an image as plain-text PPM (`P3`), one pixel per line.
///
/// Rows are written top (highest v) to bottom.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

/// Save an image as plain-text PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    image::save_buffer_with_format(
        path,
        &image.to_rgb8(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
///
/// `.png` writes PNG; anything else writes plain PPM.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        save_png(image, path)?;
    } else {
        save_ppm(image, path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Color;

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(2.0, -1.0, 0.0));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut out = Vec::new();
        write_ppm(&two_by_one(), &mut out).expect("write to memory");

        let text = String::from_utf8(out).expect("PPM is ASCII");
        assert_eq!(text, "P3\n2 1\n255\n255 0 127\n255 0 0\n");
    }

    #[test]
    fn test_write_ppm_rows_top_down() {
        let mut image = ImageBuffer::new(1, 2);
        image.set(0, 1, Color::ONE);

        let mut out = Vec::new();
        write_ppm(&image, &mut out).expect("write to memory");

        let text = String::from_utf8(out).expect("PPM is ASCII");
        let pixels: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(pixels, vec!["255 255 255", "0 0 0"]);
    }

    #[test]
    fn test_save_image_png_and_ppm() {
        let dir = std::env::temp_dir();
        let png = dir.join(format!("glint_output_{}.png", std::process::id()));
        let ppm = dir.join(format!("glint_output_{}.ppm", std::process::id()));

        save_image(&two_by_one(), &png).expect("save png");
        save_image(&two_by_one(), &ppm).expect("save ppm");

        let decoded = image::open(&png).expect("decode png").to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 127]);

        let text = std::fs::read_to_string(&ppm).expect("read ppm");
        assert!(text.starts_with("P3\n2 1\n255\n"));

        std::fs::remove_file(png).ok();
        std::fs::remove_file(ppm).ok();
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let result = save_ppm(&two_by_one(), "/definitely/not/a/dir/out.ppm");
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
