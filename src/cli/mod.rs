pub mod completions;
pub mod convert;
pub mod draw;
pub mod export;
pub mod import;
pub mod info;
pub mod transform;

use clap::{Parser, Subcommand};

use crate::error::{PnmError, Result};
use crate::types::{Format, TagStyle};

/// pnmkit - Netpbm image toolkit
#[derive(Parser, Debug)]
#[command(name = "pnmkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an image's format, size and max value
    Info(info::InfoArgs),

    /// Change pixel kind and/or format
    Convert(convert::ConvertArgs),

    /// Invert, mirror or rotate an image
    Transform(transform::TransformArgs),

    /// Render a YAML scene to a colour image
    Draw(draw::DrawArgs),

    /// Export an image to PNG
    Export(export::ExportArgs),

    /// Import a PNG as a colour image
    Import(import::ImportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse a `--format` argument, keeping the spelling the user chose.
pub(crate) fn parse_format(tag: &str) -> Result<(Format, TagStyle)> {
    Format::parse_tag(tag.trim()).ok_or_else(|| PnmError::UnsupportedFormat {
        message: format!("'{}' is not a Netpbm format tag", tag.trim()),
    })
}
