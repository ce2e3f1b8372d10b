//! Info command implementation.
//!
//! Decodes an image and reports its header fields.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::codec::{read_file, AnyRaster};
use crate::error::{PnmError, Result};
use crate::output::{dimensions, Printer};

/// Show an image's format, size and max value
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image file to inspect
    pub file: PathBuf,

    /// Print JSON to stdout instead of status lines
    #[arg(long)]
    pub json: bool,
}

/// Header summary of a decoded image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    /// Tag as written in the file (`P2`, `gray-text`, ...).
    pub tag: String,
    pub kind: String,
    pub encoding: String,
    pub width: usize,
    pub height: usize,
    /// Absent for bitmaps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
}

impl From<&AnyRaster> for ImageInfo {
    fn from(image: &AnyRaster) -> Self {
        let (width, height) = image.size();
        Self {
            tag: image.tag().to_string(),
            kind: image.kind().to_string(),
            encoding: image.format().encoding().to_string(),
            width,
            height,
            max: image.max(),
        }
    }
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let image = read_file(&args.file)?;
    let info = ImageInfo::from(&image);

    if args.json {
        let json = serde_json::to_string_pretty(&info).map_err(|e| PnmError::Parse {
            message: format!("Failed to serialize image info: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    printer.info("Format", &format!("{} ({} {})", info.tag, info.kind, info.encoding));
    printer.info("Size", &dimensions((info.width, info.height)));
    if let Some(max) = info.max {
        printer.info("Max", &max.to_string());
    }
    Ok(())
}
