// ccp-core/src/lib.rs
//! Package metadata decoding and dependency resolution.
//!
//! A [`ResolutionSession`] decodes one package's name and import tables,
//! resolves its root package imports against a game tree, and diffs the result
//! against a [`BaselineSet`] of packages that already ship.

pub mod baseline;
pub mod dependency;
pub mod guid;
pub mod header;
pub mod imports;
pub mod names;
pub mod package_table;
pub mod packager;
pub mod reader;
pub mod report;
pub mod resolver;
pub mod session;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_utils;

pub use baseline::{scan_game_packages, BaselineSet, GamePackage};
pub use dependency::DependencyList;
pub use imports::{ImportRecord, ImportTable};
pub use names::NameTable;
pub use package_table::{PackageLocation, PackageTable, ResolvedPackage};
pub use packager::{generate_package, PackagingReport};
pub use resolver::{resolve_packages, ResolveSummary};
pub use session::{InspectedPackage, ResolutionSession};
