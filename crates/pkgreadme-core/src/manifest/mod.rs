pub mod schema;

use std::path::Path;

use crate::error::{ReadmeError, Result};

pub use schema::{ExtraConfig, PackageManifest, ReadmeConfig, SectionOverride};

/// File name of the package manifest inside a package directory.
pub const MANIFEST_FILE: &str = "composer.json";

/// Check that `package_dir` exists and contains a manifest.
pub fn check_package_dir(package_dir: &Path) -> Result<()> {
    if !package_dir.is_dir() {
        return Err(ReadmeError::InvalidPackageDirectory {
            path: package_dir.to_path_buf(),
            reason: "directory does not exist".into(),
        });
    }

    if !package_dir.join(MANIFEST_FILE).is_file() {
        return Err(ReadmeError::InvalidPackageDirectory {
            path: package_dir.to_path_buf(),
            reason: format!("{MANIFEST_FILE} file must be present"),
        });
    }

    Ok(())
}

/// Load the manifest from a package directory.
pub fn load_manifest(package_dir: &Path) -> Result<PackageManifest> {
    check_package_dir(package_dir)?;

    let manifest_path = package_dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&manifest_path).map_err(|e| ReadmeError::Io {
        context: format!("reading {}", manifest_path.display()),
        source: e,
    })?;

    let manifest: PackageManifest =
        serde_json::from_str(&content).map_err(|e| ReadmeError::InvalidManifest {
            path: manifest_path.clone(),
            source: e,
        })?;

    log::debug!(
        "loaded manifest for {} ({} declared commands)",
        manifest.name,
        manifest.extra.commands.len()
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_manifest(&missing).unwrap_err();
        assert!(matches!(err, ReadmeError::InvalidPackageDirectory { .. }));
    }

    #[test]
    fn missing_manifest_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(dir.path()).unwrap_err();
        match err {
            ReadmeError::InvalidPackageDirectory { reason, .. } => {
                assert!(reason.contains("composer.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparsable_manifest_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = load_manifest(dir.path()).unwrap_err();
        assert!(matches!(err, ReadmeError::InvalidManifest { .. }));
    }

    #[test]
    fn loads_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "name": "acme/widget", "description": "Widgets." }"#,
        )
        .unwrap();
        let manifest = load_manifest(dir.path()).unwrap();
        assert_eq!(manifest.name, "acme/widget");
        assert_eq!(manifest.description.as_deref(), Some("Widgets."));
    }
}
