use crate::Cli;
use crate::CommandResult;

/// A subcommand that can be run to completion once the CLI is parsed and
/// logging is set up.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// The subcommand's name as typed on the command line.
    fn name(&self) -> &'static str;

    async fn run(self, cli: Cli) -> CommandResult;
}
