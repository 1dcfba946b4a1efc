//! `gruvbox-build`: writes the gruvbox-css file set.

mod cli;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(args.quiet);
    cli::run(&args)
}
