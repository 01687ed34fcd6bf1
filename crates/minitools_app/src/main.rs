use clap::Parser;

use minitools_app::{execute, logging, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = logging::parse_level(&args.log_level)?;
    logging::initialize(level);

    println!("{}", execute(&args.command));
    Ok(())
}
