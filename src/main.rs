//! git-switch-interactive CLI
//!
//! Usage: git-switch-interactive [--help]

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use git_switch_interactive::presentation::{
    create_interactive_session, parse_invocation, Invocation, UNSUPPORTED_ARGUMENTS,
};

/// Set to a filter directive (e.g. `debug`) to log into the temp directory.
const LOG_ENV: &str = "GIT_SWITCH_INTERACTIVE_LOG";
const LOG_FILE: &str = "git-switch-interactive.log";

fn main() -> Result<()> {
    match parse_invocation(std::env::args_os()) {
        Invocation::Help(text) => {
            print!("{text}");
            Ok(())
        }
        Invocation::Unsupported => {
            println!("{UNSUPPORTED_ARGUMENTS}");
            Ok(())
        }
        Invocation::Interactive => {
            init_logging();
            let outcome = create_interactive_session().run()?;
            tracing::info!(?outcome, "session finished");
            Ok(())
        }
    }
}

// Logs never go to the terminal: anything printed there would break the
// redraw line count.
fn init_logging() {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return;
    };

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .init();
}
