use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run one command line on the server and print its output
    Exec {
        /// Command line, joined with single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Run every line of a script file in order
    Run {
        /// Script path; blank lines and lines starting with `#` are skipped
        script: PathBuf,
    },
}
