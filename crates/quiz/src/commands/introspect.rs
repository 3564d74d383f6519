use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use quiz_core::execute::Executor;
use quiz_core::schema_model::SchemaModel;
use quiz_core::schema_model::INTROSPECTION_QUERY;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[arg(
        help="Write the introspection result to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="URL of the GraphQL endpoint to introspect.",
        name="URL",
    )]
    url: String,
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub fn name(&self) -> &'static str {
        "introspect"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.fetch_schema_json().await {
            Ok(json) => match &self.output {
                None => CommandResult::stdout(format_args!("{json}")),
                Some(path) => match std::fs::write(path, json.as_bytes()) {
                    Ok(()) => {
                        log::info!("Wrote introspection result to {path:#?}.");
                        CommandResult::success()
                    },
                    Err(err) => CommandResult::stderr(format_args!(
                        "{} Failed to write {path:#?}: {err}",
                        output_utils::RED_X,
                    )),
                },
            },

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to introspect `{}`: {err:#}",
                output_utils::RED_X,
                self.url,
            )),
        }
    }
}
impl IntrospectCmd {
    async fn fetch_schema_json(&self) -> anyhow::Result<String> {
        log::debug!("Introspecting `{}`...", self.url);
        let data = Executor::new(self.url.as_str())
            .execute_raw(INTROSPECTION_QUERY)
            .await?;
        let schema_model = SchemaModel::from_introspection_json(&data)
            .context("server returned an unusable introspection result")?;
        log::debug!("Received {} type definitions.", schema_model.types.len());

        let json = serde_json::to_string_pretty(&serde_json::json!({ "data": data }))?;
        Ok(json)
    }
}
