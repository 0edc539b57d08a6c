use clap::Parser;
use shoplist::cli::commands::Cli;
use shoplist::cli::handlers;
use shoplist::logging::{self, LogTarget};

fn main() {
    let cli = Cli::parse();

    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        // The TUI owns the terminal, so it only logs to a file
        (None, None) => LogTarget::Off,
        (None, Some(_)) => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(target) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let result = handlers::load_start(&cli)
                .map_err(Box::<dyn std::error::Error>::from)
                .and_then(|(config, list)| shoplist::tui::run(list, &config));
            if let Err(e) = result {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
