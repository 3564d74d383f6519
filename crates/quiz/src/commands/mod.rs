mod check_schema;
mod introspect;

use crate::Cli;
use crate::CommandResult;
use check_schema::CheckSchemaCmd;
use introspect::IntrospectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "quiz")]
pub(crate) enum CommandEnum {
    /// Load introspection JSON files and check that each describes a complete
    /// schema.
    CheckSchema(Box<CheckSchemaCmd>),

    /// Fetch a schema from a GraphQL server using the introspection query.
    Introspect(Box<IntrospectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::CheckSchema(cmd) => {
                log::debug!("Running `{}`.", cmd.name());
                cmd.run(cli).await
            },
            Self::Introspect(cmd) => {
                log::debug!("Running `{}`.", cmd.name());
                cmd.run(cli).await
            },
        }
    }
}
