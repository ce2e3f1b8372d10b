//! Convert command implementation.
//!
//! Reduces (or promotes) the pixel kind and optionally switches format.

use std::path::PathBuf;

use clap::Args;

use crate::codec::read_file;
use crate::error::{PnmError, Result};
use crate::output::{display_path, Printer};
use crate::types::PixelKind;

use super::parse_format;

/// Change pixel kind and/or format
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Pixel kind to convert to
    #[arg(long, value_enum)]
    pub to: Option<PixelKind>,

    /// Output format tag (P1-P6 or a name such as gray-binary)
    #[arg(long)]
    pub format: Option<String>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let format = args.format.as_deref().map(parse_format).transpose()?;

    printer.status("Converting", &display_path(&args.input));
    let mut image = read_file(&args.input)?;

    if let Some(kind) = args.to {
        let from = image.kind();
        image = image.convert(kind);
        if image.kind() != kind {
            printer.warning("Skipped", &format!("{} images cannot become {}", from, kind));
        }
    }

    if let Some((format, style)) = format {
        image.set_format(format).map_err(|_| PnmError::UnsupportedFormat {
            message: format!(
                "cannot write a {} image as {}; use --to {} first",
                image.kind(),
                format.tag(style),
                format.kind()
            ),
        })?;
        image.set_tag_style(style);
    }

    image.save(&args.output)?;
    printer.success(
        "Wrote",
        &format!("{} {}", display_path(&args.output), printer.dim(&format!("({})", image.tag()))),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn args(input: PathBuf, output: PathBuf, to: Option<PixelKind>, format: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            input,
            output,
            to,
            format: format.map(str::to_string),
        }
    }

    #[test]
    fn test_colour_to_binary_bitmap() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ppm");
        let output = dir.path().join("out.pbm");
        std::fs::write(&input, b"P3\n2 1\n255\n255 255 255 0 0 0\n").unwrap();

        run(
            args(input, output.clone(), Some(PixelKind::Bitmap), Some("P4")),
            &Printer::plain(),
        )
        .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"P4\n2 1\n\x80".to_vec());
    }

    #[test]
    fn test_format_only_keeps_named_spelling() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let output = dir.path().join("out.pgm");
        std::fs::write(&input, b"P2\n2 1\n255\n7 9\n").unwrap();

        run(args(input, output.clone(), None, Some("gray-binary")), &Printer::plain()).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"gray-binary\n2 1\n255\n\x07\x09".to_vec());
    }

    #[test]
    fn test_cross_kind_format_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let output = dir.path().join("out.ppm");
        std::fs::write(&input, b"P2\n1 1\n255\n7\n").unwrap();

        let err = run(args(input, output.clone(), None, Some("P6")), &Printer::plain()).unwrap_err();
        assert!(matches!(err, PnmError::UnsupportedFormat { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_bad_tag_fails_before_reading() {
        let dir = tempdir().unwrap();
        let err = run(
            args(dir.path().join("missing"), dir.path().join("out"), None, Some("P0")),
            &Printer::plain(),
        )
        .unwrap_err();
        assert!(matches!(err, PnmError::UnsupportedFormat { .. }));
    }
}
