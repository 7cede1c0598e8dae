//! Terminal front-end for the contact agenda.
//!
//! # Responsibility
//! - Read configuration from the environment and start file logging.
//! - Drive the core controller through an interactive line REPL.

mod command;
mod repl;
mod view;

use agenda_core::{controller_from_config, init_logging, AgendaConfig};
use std::io;
use std::process::ExitCode;
use view::TerminalView;

fn main() -> ExitCode {
    let config = match AgendaConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("agenda: {err}");
            return ExitCode::from(2);
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("agenda: logging disabled: {err}");
        }
    }

    let mut controller = controller_from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut view = TerminalView::new(stdin.lock(), stdout.lock());

    match repl::run(&mut controller, &mut view) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("agenda: terminal i/o failed: {err}");
            ExitCode::FAILURE
        }
    }
}
