// ccp-core/src/report.rs
//! Line-oriented text dumps of the decoded tables.
//!
//! The name and import dumps end lines with `\r\n`; every other dump uses `\n`.
use std::io::Write;

use ccp_common::error::Result;

use crate::baseline::GamePackage;
use crate::dependency::DependencyList;
use crate::imports::ImportTable;
use crate::names::NameTable;
use crate::package_table::PackageTable;

/// `index: name`
pub fn write_name_table<W: Write>(out: &mut W, names: &NameTable) -> Result<()> {
    for (index, name) in names.iter() {
        write!(out, "{index}: {name}\r\n")?;
    }
    Ok(())
}

/// `index | Package: x | Class: y | Object: z | Reference: n`
pub fn write_import_table<W: Write>(
    out: &mut W,
    names: &NameTable,
    imports: &ImportTable,
) -> Result<()> {
    for (index, record) in imports.records().iter().enumerate() {
        write!(
            out,
            "{index} | Package: {} | Class: {} | Object: {} | Reference: {}\r\n",
            names.display(record.package_name_index),
            names.display(record.class_name_index),
            names.display(record.object_name_index),
            record.package_reference
        )?;
    }
    Ok(())
}

/// `GUID | name`
pub fn write_package_table<W: Write>(
    out: &mut W,
    names: &NameTable,
    packages: &PackageTable,
) -> Result<()> {
    for package in packages {
        writeln!(
            out,
            "{} | {}",
            package.guid(),
            names.display(package.name_index)
        )?;
    }
    Ok(())
}

/// A count header, then `GUID | name | path`. Unresolved packages have an
/// empty path.
pub fn write_dependency_list<W: Write>(
    out: &mut W,
    names: &NameTable,
    dependencies: &DependencyList<'_>,
) -> Result<()> {
    writeln!(out, "{} dependencies:", dependencies.len())?;
    for package in dependencies.iter() {
        let path = package
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        writeln!(
            out,
            "{} | {} | {}",
            package.guid(),
            names.display(package.name_index),
            path
        )?;
    }
    Ok(())
}

/// `GUID | name`
pub fn write_game_packages<W: Write>(out: &mut W, packages: &[GamePackage]) -> Result<()> {
    for package in packages {
        writeln!(out, "{} | {}", package.identity.guid, package.name)?;
    }
    Ok(())
}
