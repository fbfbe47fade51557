// ccp/src/cli/baseline.rs
use std::path::PathBuf;

use ccp_common::config::Config;
use ccp_common::error::Result;
use ccp_core::{report, scan_game_packages, BaselineSet};
use clap::Args;
use colored::Colorize;
use tracing::error;

use crate::cli::output::write_dump;

#[derive(Args, Debug)]
pub struct Baseline {
    /// Game directory to scan [env: CCP_GAME_PATH]
    #[arg(long, value_name = "DIR")]
    pub game_path: Option<PathBuf>,

    /// Persist the baseline GUID list to FILE (readable by --against)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Write every package found, with its GUID, to FILE
    #[arg(long, value_name = "FILE")]
    pub game_packages: Option<PathBuf>,
}

impl Baseline {
    pub fn run(&self, config: &Config) -> Result<()> {
        let config = config.clone().with_game_path(self.game_path.as_deref());
        let packages = scan_game_packages(config.game_path())?;
        let baseline = BaselineSet::from_game_packages(&packages);

        if let Some(path) = &self.game_packages {
            write_dump(path, "game package table", |out| {
                report::write_game_packages(out, &packages)
            });
        }
        if let Some(path) = &self.out {
            if let Err(e) = baseline.persist_file(path) {
                error!("Unable to write baseline list to {}: {}", path.display(), e);
                return Err(e);
            }
        }

        println!(
            "{} {} game package(s), {} distinct GUID(s) under {}",
            "==>".bold().blue(),
            packages.len(),
            baseline.len(),
            config.game_path().display()
        );
        Ok(())
    }
}
