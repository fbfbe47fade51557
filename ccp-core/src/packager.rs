// ccp-core/src/packager.rs
//! Lays out a distributable custom content tree for an inspected package.
//!
//! ```text
//! <output>/<GUID>/UDKGame/Config/<name>.ini
//! <output>/<GUID>/UDKGame/CookedPC/Custom_Content/<name>.<ext>
//! <output>/<GUID>/UDKGame/CookedPC/Custom_Content/<dependency>.<ext>
//! ```
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use ccp_common::config::Config;
use ccp_common::error::Result;
use ccp_common::model::PackageExtension;

use crate::dependency::DependencyList;
use crate::session::ResolutionSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingReport {
    pub package_root: PathBuf,
    pub copied: usize,
    pub skipped: usize,
}

fn file_name(name: &str, extension: PackageExtension) -> String {
    match extension {
        PackageExtension::Unknown => name.to_string(),
        ext => format!("{name}.{ext}"),
    }
}

/// Creates the output tree under the configured output directory and copies
/// the package, its config file from the game's `Config` directory and every
/// resolved dependency into it.
///
/// Missing sources are logged and counted as skipped; only failing to create
/// the directory tree is an error.
pub fn generate_package(
    session: &ResolutionSession,
    dependencies: &DependencyList<'_>,
    config: &Config,
) -> Result<PackagingReport> {
    let name = session.package_name();
    let package_root = config
        .output_dir()
        .join(session.package.identity.guid.to_string())
        .join("UDKGame");
    let config_dir = package_root.join("Config");
    let content_dir = package_root.join("CookedPC").join("Custom_Content");
    ccp_aio::create_dir_all(&config_dir)?;
    ccp_aio::create_dir_all(&content_dir)?;

    let mut report = PackagingReport {
        package_root: package_root.clone(),
        copied: 0,
        skipped: 0,
    };
    let mut copy = |src: &Path, dst: PathBuf| match ccp_aio::copy_file(src, &dst) {
        Ok(bytes) => {
            debug!("Copied {} ({} bytes)", dst.display(), bytes);
            report.copied += 1;
        }
        Err(e) => {
            warn!("Skipping {}: {}", src.display(), e);
            report.skipped += 1;
        }
    };

    let ini = format!("{name}.ini");
    copy(&config.game_config_dir().join(&ini), config_dir.join(&ini));
    copy(
        &session.package.path,
        content_dir.join(file_name(name, session.package.identity.extension)),
    );

    let mut not_found = 0;
    for package in dependencies.iter() {
        let dep_name = session.name_of(package);
        match package.path() {
            Some(src) => copy(src, content_dir.join(file_name(&dep_name, package.extension()))),
            None => {
                warn!("Dependency '{}' was not found; not packaged", dep_name);
                not_found += 1;
            }
        }
    }
    report.skipped += not_found;

    info!(
        "Packaged {} into {} ({} copied, {} skipped)",
        name,
        report.package_root.display(),
        report.copied,
        report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ccp_common::model::Guid;

    use super::*;
    use crate::baseline::BaselineSet;
    use crate::test_utils::{repeated_guid, write_dependency, Import, PackageBuilder};

    #[test]
    fn builds_tree_and_copies_files() {
        let dir = tempfile::tempdir().unwrap();
        let game = dir.path().join("game");
        let map = PackageBuilder::new()
            .guid(Guid::from_words([1, 2, 3, 4]))
            .names(&["Core", "Package", "Shipped", "Extra", "Gone", "DM-Test"])
            .imports(&[Import::root(1, 2), Import::root(1, 3), Import::root(1, 4)])
            .write_to(dir.path(), "DM-Test.udk");
        write_dependency(&game, "CookedPC/Shipped.upk", repeated_guid(1));
        write_dependency(&game, "CookedPC/extra.U", repeated_guid(2));
        fs::create_dir_all(game.join("Config")).unwrap();
        fs::write(game.join("Config/DM-Test.ini"), b"[Map]").unwrap();

        let mut session = ResolutionSession::open(&map).unwrap();
        session.resolve_against(&game).unwrap();
        let baseline: BaselineSet = [repeated_guid(1)].into_iter().collect();
        let deps = session.dependencies(&baseline);

        let out = dir.path().join("out");
        let config = Config::default()
            .with_game_path(Some(&game))
            .with_output_dir(Some(&out));
        let report = generate_package(&session, &deps, &config).unwrap();

        let root = out.join("00000001000000020000000300000004/UDKGame");
        assert_eq!(report.package_root, root);
        assert_eq!(fs::read(root.join("Config/DM-Test.ini")).unwrap(), b"[Map]");
        assert!(root.join("CookedPC/Custom_Content/DM-Test.udk").is_file());
        assert!(root.join("CookedPC/Custom_Content/Extra.u").is_file());
        assert!(!root.join("CookedPC/Custom_Content/Shipped.upk").exists());
        // ini + map + Extra copied; Gone was never found.
        assert_eq!((report.copied, report.skipped), (3, 1));
    }

    #[test]
    fn missing_config_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let map = PackageBuilder::new()
            .names(&["Lonely"])
            .write_to(dir.path(), "Lonely.upk");
        let session = ResolutionSession::open(&map).unwrap();
        let deps = session.dependencies(&BaselineSet::new());
        let config = Config::default()
            .with_game_path(Some(&dir.path().join("game")))
            .with_output_dir(Some(&dir.path().join("out")));
        let report = generate_package(&session, &deps, &config).unwrap();
        assert_eq!((report.copied, report.skipped), (1, 1));
        assert!(report
            .package_root
            .join("CookedPC/Custom_Content/Lonely.upk")
            .is_file());
    }
}
