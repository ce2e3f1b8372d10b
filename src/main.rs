use clap::Parser;
use miette::Result;
use pnmkit::cli::{Cli, Commands};
use pnmkit::output::Printer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Info(args) => pnmkit::cli::info::run(args, &printer)?,
        Commands::Convert(args) => pnmkit::cli::convert::run(args, &printer)?,
        Commands::Transform(args) => pnmkit::cli::transform::run(args, &printer)?,
        Commands::Draw(args) => pnmkit::cli::draw::run(args, &printer)?,
        Commands::Export(args) => pnmkit::cli::export::run(args, &printer)?,
        Commands::Import(args) => pnmkit::cli::import::run(args, &printer)?,
        Commands::Completions(args) => pnmkit::cli::completions::run(args)?,
    }

    Ok(())
}
