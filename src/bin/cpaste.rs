use std::io;
use std::process::ExitCode;

use clap::Parser;
use clip_utils::cli::PasteCli;
use clip_utils::clipboard::SystemClipboard;
use clip_utils::config::PasteConfig;
use clip_utils::{paste, tracing_sub};

fn main() -> ExitCode {
    let cli = PasteCli::parse();
    tracing_sub::init(cli.log_level());
    let config = PasteConfig::from(&cli);

    let mut clipboard = SystemClipboard::new();
    let mut stdout = io::stdout().lock();
    match paste::run(&config, &mut clipboard, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cpaste: {err}");
            ExitCode::FAILURE
        }
    }
}
