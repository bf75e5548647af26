//! Interactive terminal front end for the scripted assistant demo.

mod platform;

use anyhow::Result;
use clap::Parser;

use platform::logging::{self, LogDestination};
use platform::AppSettings;

#[derive(Debug, Parser)]
#[command(name = "chat_app", about = "Interactive scripted assistant demo")]
struct Args {
    /// Compress the scripted delays for demos.
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize(LogDestination::File);
    platform::run_app(AppSettings { fast: args.fast })
}
