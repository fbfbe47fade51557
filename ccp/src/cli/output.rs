// ccp/src/cli/output.rs
//! Terminal and file output shared by the commands.
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ccp_common::error::Result;
use ccp_common::model::{Guid, PackageExtension};
use ccp_core::{DependencyList, ResolutionSession};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;
use tracing::error;

/// Writes one dump to `path`. Failures are reported and do not stop the run.
/// Returns whether the dump was written.
pub fn write_dump<F>(path: &Path, what: &str, write: F) -> bool
where
    F: FnOnce(&mut BufWriter<std::fs::File>) -> Result<()>,
{
    let result = ccp_aio::create_file(path).and_then(|file| {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()?;
        Ok(())
    });
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Unable to write {} to {}: {}", what, path.display(), e);
            eprintln!(
                "{} Unable to write {} to {}: {}",
                "Error:".red().bold(),
                what,
                path.display(),
                e
            );
            false
        }
    }
}

#[derive(Serialize)]
struct DependencyView {
    name: String,
    guid: Guid,
    extension: PackageExtension,
    path: Option<PathBuf>,
    resolved: bool,
}

pub fn print_dependencies_json(
    session: &ResolutionSession,
    dependencies: &DependencyList<'_>,
) -> Result<()> {
    let views: Vec<DependencyView> = dependencies
        .iter()
        .map(|package| DependencyView {
            name: session.name_of(package).into_owned(),
            guid: package.guid(),
            extension: package.extension(),
            path: package.path().map(Path::to_path_buf),
            resolved: package.is_resolved(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

pub fn print_dependencies(session: &ResolutionSession, dependencies: &DependencyList<'_>) {
    if dependencies.is_empty() {
        println!("{}", "0 dependencies".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(Row::new(vec![
        Cell::new("GUID").style_spec("b"),
        Cell::new("Name").style_spec("b"),
        Cell::new("Type").style_spec("b"),
        Cell::new("Path").style_spec("b"),
    ]));
    for package in dependencies.iter() {
        let path = match package.path() {
            Some(path) => Cell::new(&path.display().to_string()),
            None => Cell::new("not found").style_spec("Fy"),
        };
        table.add_row(Row::new(vec![
            Cell::new(&package.guid().to_string()),
            Cell::new(&session.name_of(package)),
            Cell::new(package.extension().as_str()),
            path,
        ]));
    }
    table.printstd();

    let missing = dependencies.unresolved_count();
    if missing > 0 {
        println!(
            "{} dependencies ({} not found)",
            dependencies.len(),
            missing.to_string().yellow()
        );
    } else {
        println!("{} dependencies", dependencies.len());
    }
}
