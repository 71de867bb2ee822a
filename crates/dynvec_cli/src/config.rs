use clap::Parser;

/// Command line options for the `dynvec` binary.
///
/// Log verbosity is read from the `DYNVEC_LOG` environment variable
/// (`env_logger` syntax, `warn` by default).
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dynvec",
    version,
    about = "Create dynamic arrays of various element types and exercise their operations"
)]
pub struct Config {
    /// Don't list the menu before each prompt, useful when piping a script in
    #[arg(short, long)]
    pub quiet: bool,
}
