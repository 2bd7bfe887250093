use anyhow::Result;
use clap::App;
use clap::ArgMatches;

/// A subcommand of the main binary.
///
/// Each command declares its clap argument set and runs on the matches clap
/// parsed for it. Command names must not collide since they are used for
/// dispatch.
pub trait Command<'a> {
    /// Returns the name under which the command is invoked.
    fn name(&self) -> &str;

    /// Returns the clap subcommand declaring the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Runs the command on the matches clap built for it.
    ///
    /// Returning an error makes the app log it and exit with a failure
    /// status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
