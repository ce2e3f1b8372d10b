//! Import command implementation.
//!
//! Reads a PNG (or any format the image crate decodes) into a colour
//! raster and writes it as Netpbm.

use std::path::PathBuf;

use clap::Args;

use crate::error::{PnmError, Result};
use crate::output::{dimensions, display_path, Printer};
use crate::render::read_png;
use crate::types::{Format, PixelKind};

use super::parse_format;

/// Import a PNG as a colour image
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Input PNG file
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Colour format tag for the output (P3, P6, color-text or color-binary)
    #[arg(long, default_value = "P6")]
    pub format: String,
}

pub fn run(args: ImportArgs, printer: &Printer) -> Result<()> {
    let (format, style) = parse_format(&args.format)?;
    if format.kind() != PixelKind::Color {
        return Err(PnmError::UnsupportedFormat {
            message: format!(
                "imported images are colour; {} is a {} format (use {} or {})",
                args.format,
                format.kind(),
                Format::ColorText,
                Format::ColorBinary
            ),
        });
    }

    printer.status("Importing", &display_path(&args.input));
    let mut pixmap = read_png(&args.input, format.encoding())?;
    pixmap.set_tag_style(style);

    pixmap.save(&args.output)?;
    printer.success(
        "Wrote",
        &format!(
            "{} {}",
            display_path(&args.output),
            printer.dim(&format!("({})", dimensions(pixmap.size())))
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::write_png;
    use crate::types::{Colour, Encoding, Pixmap};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_import_png_as_text() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("in.png");
        let output = dir.path().join("out.ppm");

        let mut pixmap = Pixmap::new(2, 1, Encoding::Binary);
        pixmap.set(1, 0, Colour::rgb(10, 20, 30));
        write_png(&pixmap, &png, 1).unwrap();

        let args = ImportArgs {
            input: png,
            output: output.clone(),
            format: "color-text".to_string(),
        };
        run(args, &Printer::plain()).unwrap();

        assert_eq!(
            String::from_utf8(std::fs::read(&output).unwrap()).unwrap(),
            "color-text\n2 1\n255\n0 0 0 10 20 30\n"
        );
    }

    #[test]
    fn test_import_rejects_gray_format() {
        let dir = tempdir().unwrap();
        let args = ImportArgs {
            input: dir.path().join("in.png"),
            output: dir.path().join("out.pgm"),
            format: "P5".to_string(),
        };
        assert!(matches!(
            run(args, &Printer::plain()),
            Err(PnmError::UnsupportedFormat { .. })
        ));
    }
}
