// ccp/src/cli/inspect.rs
use std::path::PathBuf;

use ccp_common::config::Config;
use ccp_common::error::Result;
use ccp_core::{report, BaselineSet, ResolutionSession};
use clap::Args;
use colored::Colorize;
use tracing::warn;

use crate::cli::output::{print_dependencies, print_dependencies_json, write_dump};

/// Arguments shared by every command that resolves a package's dependencies.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Package (map, mutator, ...) to inspect
    #[arg(value_name = "PACKAGE")]
    pub package: PathBuf,

    /// Game directory searched for dependencies [env: CCP_GAME_PATH]
    #[arg(long, value_name = "DIR")]
    pub game_path: Option<PathBuf>,

    /// Baseline list of GUIDs that already ship; those packages are left out
    #[arg(long, value_name = "FILE")]
    pub against: Option<PathBuf>,

    /// Build the baseline by scanning DIR instead of loading a list
    #[arg(long, value_name = "DIR", conflicts_with = "against")]
    pub against_dir: Option<PathBuf>,
}

impl ResolveArgs {
    /// Decodes the package, resolves its imports and loads the baseline.
    pub fn prepare(&self, config: &Config) -> Result<(ResolutionSession, BaselineSet)> {
        let mut session = ResolutionSession::open(&self.package)?;

        let game_path = config.game_path();
        if let Err(e) = session.resolve_against(game_path) {
            warn!(
                "Could not search {} for dependencies: {}",
                game_path.display(),
                e
            );
        }

        Ok((session, self.baseline()))
    }

    /// Loads or builds the baseline. Failures fall back to an empty baseline.
    fn baseline(&self) -> BaselineSet {
        let (source, result) = match (&self.against, &self.against_dir) {
            (Some(path), _) => (path, BaselineSet::load_file(path)),
            (None, Some(dir)) => (dir, BaselineSet::build(dir)),
            (None, None) => return BaselineSet::new(),
        };
        result.unwrap_or_else(|e| {
            warn!(
                "Could not read baseline from {}: {}. Using an empty baseline.",
                source.display(),
                e
            );
            BaselineSet::new()
        })
    }
}

#[derive(Args, Debug)]
pub struct Inspect {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Write the name table to FILE
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Write the import table to FILE
    #[arg(long, value_name = "FILE")]
    pub imports: Option<PathBuf>,

    /// Write the resolved package table to FILE
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Write the dependency list to FILE
    #[arg(long, value_name = "FILE")]
    pub dependencies: Option<PathBuf>,

    /// Print the dependency list as JSON
    #[arg(long)]
    pub json: bool,
}

impl Inspect {
    pub fn run(&self, config: &Config) -> Result<()> {
        let config = config.clone().with_game_path(self.resolve.game_path.as_deref());
        let (session, baseline) = self.resolve.prepare(&config)?;
        let dependencies = session.dependencies(&baseline);

        if let Some(path) = &self.names {
            write_dump(path, "name table", |out| {
                report::write_name_table(out, &session.names)
            });
        }
        if let Some(path) = &self.imports {
            if write_dump(path, "import table", |out| {
                report::write_import_table(out, &session.names, &session.imports)
            }) {
                println!("{} import table entries written.", session.imports.len());
            }
        }
        if let Some(path) = &self.packages {
            write_dump(path, "package table", |out| {
                report::write_package_table(out, &session.names, &session.packages)
            });
        }
        if let Some(path) = &self.dependencies {
            write_dump(path, "dependency list", |out| {
                report::write_dependency_list(out, &session.names, &dependencies)
            });
        }

        if self.json {
            return print_dependencies_json(&session, &dependencies);
        }

        println!(
            "{} {} ({})",
            "==>".bold().blue(),
            session.package_name().bold(),
            session.package.identity.guid
        );
        print_dependencies(&session, &dependencies);
        Ok(())
    }
}
