//! Export command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::codec::read_file;
use crate::error::Result;
use crate::output::{dimensions, display_path, Printer};

/// Export an image to PNG
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input image
    pub input: PathBuf,

    /// Output PNG file
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    printer.status("Exporting", &display_path(&args.input));
    let image = read_file(&args.input)?;

    image.write_png(&args.output, args.scale)?;

    let (width, height) = image.size();
    let scale = args.scale.max(1) as usize;
    printer.success(
        "Wrote",
        &format!(
            "{} {}",
            display_path(&args.output),
            printer.dim(&format!("({})", dimensions((width * scale, height * scale))))
        ),
    );
    Ok(())
}
