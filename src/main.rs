//! sift - Interactive terminal console for go test -json output
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use sift::cli::{require_piped_input, Args, USAGE_HINT};
use sift_core::prelude::*;

/// Exit status when stdin is a terminal
const EXIT_NO_INPUT: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match run(args).await {
        Err(e @ Error::NoInput) => {
            eprintln!("{}\n\n{}", e, USAGE_HINT);
            std::process::exit(EXIT_NO_INPUT);
        }
        result => result,
    }
}

async fn run(args: Args) -> Result<()> {
    require_piped_input(sift_tui::stdin_is_terminal())?;

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    sift_core::logging::init(args.debug)?;

    let settings = args.settings();
    let options = args.options(
        &settings,
        sift_tui::stdout_is_terminal(),
        sift_tui::color_enabled(settings.ui.color),
    );
    info!("sift starting: {:?}", options);

    sift_tui::run(options, tokio::io::stdin()).await
}
