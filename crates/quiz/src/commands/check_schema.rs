use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use indexmap::IndexMap;
use quiz_core::schema_model::SchemaModel;
use quiz_core::types::GraphQLTypeKind;
use quiz_core::types::HostType;
use quiz_core::types::TypeRegistry;
use quiz_core::types::TypeRegistryBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckSchemaCmd {
    #[arg(
        help="Map a custom scalar to the host type its values are checked \
             against, as `NAME=HOST` (e.g. `DateTime=String`). May be given \
             more than once.",
        long="custom-scalar",
        value_name="NAME=HOST",
        value_parser=parse_custom_scalar,
    )]
    custom_scalars: Vec<(String, HostType)>,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more introspection JSON files or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckSchemaCmd {
    pub fn name(&self) -> &'static str {
        "check-schema"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        let json_file_exts = normalize_exts(&self.json_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let found = find_files(&self.file_or_dir_paths, &json_file_exts);
        if !found.walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths: {:#?}",
                output_utils::RED_X,
                found.walk_errors,
            ));
        }
        log::debug!("Found {} schema files to check.", found.file_paths.len());

        let custom_scalars: IndexMap<String, HostType> =
            self.custom_scalars.into_iter().collect();

        let mut failures = vec![];
        let mut summaries = vec![];
        for file_path in &found.file_paths {
            match check_file(file_path, custom_scalars.clone()) {
                Ok(registry) => summaries.push(format!(
                    "  * {}: {}",
                    file_path.display(),
                    summarize(&registry),
                )),
                Err(err) => failures.push(format!(
                    "  * {}: {err:#}",
                    file_path.display(),
                )),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} schema files failed to check:\n{}",
                output_utils::RED_X,
                failures.len(),
                found.file_paths.len(),
                failures.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All schemas checked successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-file entries.\n",
                "{}",
            ),
            output_utils::GREEN_CHECK,
            found.file_paths.len(),
            found.num_skipped,
            summaries.join("\n"),
        ))
    }
}

#[derive(Debug, Default)]
pub(super) struct FoundFiles {
    pub(super) file_paths: Vec<PathBuf>,
    pub(super) num_skipped: usize,
    pub(super) walk_errors: Vec<walkdir::Error>,
}

pub(super) fn check_file(
    file_path: &Path,
    custom_scalars: IndexMap<String, HostType>,
) -> anyhow::Result<TypeRegistry> {
    log::debug!("Checking {file_path:#?}...");
    let schema_model = SchemaModel::from_file(file_path)?;
    let registry = TypeRegistryBuilder::new()
        .custom_scalars(custom_scalars)
        .build_schema_model(&schema_model)?;
    Ok(registry)
}

/// Find all files with one of `exts` at or under each of `paths`.
///
/// A single file path given on its own is always included, whatever its
/// extension, since it was named explicitly.
pub(super) fn find_files(paths: &[PathBuf], exts: &HashSet<String>) -> FoundFiles {
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        found.num_skipped += 1;
                        continue;
                    }
                    log::trace!("Found file at {entry_path:#?}.");
                    let has_matching_ext = entry_path
                        .extension()
                        .map(|ext| format!(".{}", ext.to_string_lossy()))
                        .is_some_and(|ext| exts.contains(&ext));
                    if has_matching_ext {
                        found.file_paths.push(entry_path.to_path_buf());
                    }
                },

                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.walk_errors.push(err);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding to check {first_path:#?} even though it doesn't match \
            any of the --json-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.file_paths.push(first_path.to_path_buf());
    }

    found
}

pub(super) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

pub(super) fn parse_custom_scalar(arg: &str) -> Result<(String, HostType), String> {
    let (name, host_type) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `NAME=HOST`, got `{arg}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing scalar name in `{arg}`"));
    }
    let host_type = host_type
        .trim()
        .parse::<HostType>()
        .map_err(|err| err.to_string())?;
    Ok((name.to_string(), host_type))
}

pub(super) fn summarize(registry: &TypeRegistry) -> String {
    let mut counts: IndexMap<&'static str, usize> = IndexMap::new();
    for type_ in registry.types().values() {
        let label = match type_.type_kind() {
            GraphQLTypeKind::Enum => "enums",
            GraphQLTypeKind::InputObject => "input objects",
            GraphQLTypeKind::Interface => "interfaces",
            GraphQLTypeKind::Object => "objects",
            GraphQLTypeKind::Union => "unions",
            _ => "scalars",
        };
        *counts.entry(label).or_default() += 1;
    }
    counts.sort_keys();
    counts.iter()
        .map(|(label, count)| format!("{count} {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}
