use std::path::Path;

use crate::manifest::PackageManifest;

/// CI config files probed in the package directory, with the badge each one produces.
const CI_BADGES: &[(&str, fn(&str) -> String)] = &[
    (".travis.yml", travis_badge),
    ("circle.yml", circleci_badge),
];

fn travis_badge(package_name: &str) -> String {
    format!(
        "[![Build Status](https://travis-ci.org/{package_name}.svg?branch=master)](https://travis-ci.org/{package_name})"
    )
}

fn circleci_badge(package_name: &str) -> String {
    format!(
        "[![CircleCI](https://circleci.com/gh/{package_name}/tree/master.svg?style=svg)](https://circleci.com/gh/{package_name}/tree/master)"
    )
}

/// Compute the badge markup for the README header.
///
/// Explicit `extra.readme.shields` win outright; otherwise one badge per detected
/// CI config file. Empty when neither applies.
pub fn resolve_shields(manifest: &PackageManifest, package_dir: &Path) -> String {
    if let Some(shields) = &manifest.extra.readme.shields {
        log::debug!("using {} explicit shields", shields.len());
        return shields.join(" ");
    }

    CI_BADGES
        .iter()
        .filter(|(file, _)| {
            let found = package_dir.join(file).exists();
            log::debug!("probing {file}: {}", if found { "found" } else { "absent" });
            found
        })
        .map(|(_, badge)| badge(&manifest.name))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> PackageManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn explicit_shields_are_joined_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".travis.yml"), "").unwrap();
        let m = manifest(r#"{ "name": "acme/widget", "extra": { "readme": { "shields": ["a", "b"] } } }"#);
        assert_eq!(resolve_shields(&m, dir.path()), "a b");
    }

    #[test]
    fn travis_file_yields_single_badge() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".travis.yml"), "language: php").unwrap();
        let m = manifest(r#"{ "name": "acme/widget" }"#);
        let shields = resolve_shields(&m, dir.path());
        assert_eq!(shields, travis_badge("acme/widget"));
        assert!(shields.contains("acme/widget"));
        assert!(!shields.contains("circleci"));
    }

    #[test]
    fn both_ci_files_yield_two_badges_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".travis.yml"), "").unwrap();
        std::fs::write(dir.path().join("circle.yml"), "").unwrap();
        let m = manifest(r#"{ "name": "acme/widget" }"#);
        assert_eq!(
            resolve_shields(&m, dir.path()),
            format!("{} {}", travis_badge("acme/widget"), circleci_badge("acme/widget"))
        );
    }

    #[test]
    fn no_config_and_no_ci_files_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest(r#"{ "name": "acme/widget" }"#);
        assert_eq!(resolve_shields(&m, dir.path()), "");
    }

    #[test]
    fn empty_explicit_list_disables_detection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("circle.yml"), "").unwrap();
        let m = manifest(r#"{ "name": "acme/widget", "extra": { "readme": { "shields": [] } } }"#);
        assert_eq!(resolve_shields(&m, dir.path()), "");
    }
}
