use std::io;
use std::process::ExitCode;

use clap::Parser;
use clip_utils::cli::CopyCli;
use clip_utils::clipboard::SystemClipboard;
use clip_utils::config::CopyConfig;
use clip_utils::{copy, tracing_sub};

fn main() -> ExitCode {
    let cli = CopyCli::parse();
    tracing_sub::init(cli.log_level());
    let config = CopyConfig::from(&cli);

    let mut clipboard = SystemClipboard::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match copy::run(&config, &mut clipboard, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ccopy: {err}");
            ExitCode::FAILURE
        }
    }
}
