//! Transform command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::codec::read_file;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::transform::Op;

/// Invert, mirror or rotate an image
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image (same format as the input)
    pub output: PathBuf,

    /// Transform to apply; repeat to chain, applied in order
    #[arg(long = "op", value_enum, required = true)]
    pub ops: Vec<Op>,
}

pub fn run(args: TransformArgs, printer: &Printer) -> Result<()> {
    printer.status("Transforming", &display_path(&args.input));
    let mut image = read_file(&args.input)?;

    for &op in &args.ops {
        image.apply(op);
    }

    let names: Vec<String> = args.ops.iter().map(|op| op.to_string()).collect();
    printer.info("Applied", &format!("{} {}", plural(args.ops.len(), "op", "ops"), printer.dim(&names.join(", "))));

    image.save(&args.output)?;
    printer.success("Wrote", &display_path(&args.output));
    Ok(())
}
