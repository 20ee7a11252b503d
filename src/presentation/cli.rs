//! CLI Argument Parsing
//!
//! The tool takes no options besides help. Anything else is reported as
//! unsupported without failing the process.

use clap::error::ErrorKind;
use clap::Parser;

pub const UNSUPPORTED_ARGUMENTS: &str =
    "Unsupported arguments. Supported arguments: \"--help\"";

const AFTER_HELP: &str = "\
* Switch between branches
Use up/down arrow buttons (or k/j for vimmers) to move the cursor between branches.
Switch to the branch using ENTER.

* Delete multiple branches
Use d to select the branch with the cursor for deletion.
Delete all selected branches using ENTER, then confirm with y.

Quit with q, ESC or Ctrl-C.";

/// git-switch-interactive - switch between and delete git branches from a menu
#[derive(Parser, Debug)]
#[command(name = "git-switch-interactive")]
#[command(about, long_about = None, disable_version_flag = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: run the menu
    Interactive,
    /// Help requested: print this text and exit successfully
    Help(String),
    /// Anything else
    Unsupported,
}

pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();

    // Program name plus at most one argument; help must be the only one.
    if args.len() > 2 {
        return Invocation::Unsupported;
    }

    match Cli::try_parse_from(args) {
        Ok(Cli {}) => Invocation::Interactive,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Invocation::Help(e.render().to_string()),
        Err(_) => Invocation::Unsupported,
    }
}
