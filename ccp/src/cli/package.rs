// ccp/src/cli/package.rs
use std::path::PathBuf;

use ccp_common::config::Config;
use ccp_common::error::Result;
use ccp_core::generate_package;
use clap::Args;
use colored::Colorize;

use crate::cli::inspect::ResolveArgs;
use crate::cli::output::print_dependencies;

#[derive(Args, Debug)]
pub struct Package {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Directory the custom content tree is created in [env: CCP_OUTPUT_DIR]
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Package {
    pub fn run(&self, config: &Config) -> Result<()> {
        let config = config
            .clone()
            .with_game_path(self.resolve.game_path.as_deref())
            .with_output_dir(self.output.as_deref());
        let (session, baseline) = self.resolve.prepare(&config)?;
        let dependencies = session.dependencies(&baseline);
        print_dependencies(&session, &dependencies);

        let report = generate_package(&session, &dependencies, &config)?;

        println!(
            "{}{}",
            "==> ".bold().blue(),
            format!(
                "Packaged {} into {}",
                session.package_name(),
                report.package_root.display()
            )
            .bold()
        );
        if report.skipped > 0 {
            println!(
                "{} {} file(s) copied, {} skipped",
                "Warning:".yellow(),
                report.copied,
                report.skipped
            );
        } else {
            println!("{} file(s) copied", report.copied);
        }
        Ok(())
    }
}
