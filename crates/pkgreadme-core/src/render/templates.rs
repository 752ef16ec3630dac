use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::error::{ReadmeError, Result};

/// Name of the top-level document template.
pub const README_TEMPLATE: &str = "readme.md.tera";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (README_TEMPLATE, include_str!("../../templates/readme.md.tera")),
    (
        "readme-using.md.tera",
        include_str!("../../templates/readme-using.md.tera"),
    ),
    (
        "readme-contributing.md.tera",
        include_str!("../../templates/readme-contributing.md.tera"),
    ),
    (
        "readme-contributing-bundled.md.tera",
        include_str!("../../templates/readme-contributing-bundled.md.tera"),
    ),
    (
        "readme-support.md.tera",
        include_str!("../../templates/readme-support.md.tera"),
    ),
];

/// Template name for a built-in section body, e.g. `readme-using.md.tera`.
pub fn section_template_name(key: &str, bundled: bool) -> String {
    if bundled {
        format!("readme-{key}-bundled.md.tera")
    } else {
        format!("readme-{key}.md.tera")
    }
}

/// The set of named templates available to the pipeline.
///
/// Built-in templates are compiled in; files in an optional template directory
/// shadow them by name and may add new ones (e.g. a `-bundled` variant).
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.to_vec())
            .map_err(|e| ReadmeError::RenderError { source: e })?;
        Ok(Self { tera })
    }

    /// Built-in templates overlaid with every `*.tera` file in `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        let mut set = Self::builtin()?;

        let entries = std::fs::read_dir(dir).map_err(|e| ReadmeError::Io {
            context: format!("reading template directory {}", dir.display()),
            source: e,
        })?;

        let mut overrides = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "tera") {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let content = read_template(&path)?;
            log::debug!("template override {name} from {}", path.display());
            overrides.push((name, content));
        }

        set.tera
            .add_raw_templates(overrides)
            .map_err(|e| ReadmeError::RenderError { source: e })?;
        Ok(set)
    }

    pub fn load(template_dir: Option<&Path>) -> Result<Self> {
        match template_dir {
            Some(dir) => Self::with_overrides(dir),
            None => Self::builtin(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a named template.
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .map_err(|e| ReadmeError::RenderError { source: e })
    }

    /// Render a template file from disk (e.g. a package-local section override).
    pub fn render_file(&self, path: &Path, context: &Context) -> Result<String> {
        let content = read_template(path)?;
        Tera::one_off(&content, context, false).map_err(|e| ReadmeError::RenderError { source: e })
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ReadmeError::TemplateRead {
        path: PathBuf::from(path),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_parse() {
        let set = TemplateSet::builtin().unwrap();
        assert!(set.contains(README_TEMPLATE));
        assert!(set.contains("readme-using.md.tera"));
        assert!(set.contains("readme-contributing-bundled.md.tera"));
        assert!(!set.contains("readme-using-bundled.md.tera"));
    }

    #[test]
    fn section_template_names() {
        assert_eq!(section_template_name("support", false), "readme-support.md.tera");
        assert_eq!(
            section_template_name("support", true),
            "readme-support-bundled.md.tera"
        );
    }

    #[test]
    fn override_directory_shadows_and_extends() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme-support.md.tera"), "Ask {{ name }}.").unwrap();
        std::fs::write(dir.path().join("readme-support-bundled.md.tera"), "Bundled.").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let set = TemplateSet::with_overrides(dir.path()).unwrap();
        assert!(set.contains("readme-support-bundled.md.tera"));
        assert!(!set.contains("notes.txt"));

        let mut context = Context::new();
        context.insert("name", "us");
        assert_eq!(set.render("readme-support.md.tera", &context).unwrap(), "Ask us.");
    }

    #[test]
    fn render_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.md");
        std::fs::write(&path, "Hello {{ who }}").unwrap();

        let mut context = Context::new();
        context.insert("who", "world");
        let set = TemplateSet::builtin().unwrap();
        assert_eq!(set.render_file(&path, &context).unwrap(), "Hello world");
    }

    #[test]
    fn render_file_missing_is_template_read_error() {
        let set = TemplateSet::builtin().unwrap();
        let err = set
            .render_file(Path::new("/definitely/not/here.md"), &Context::new())
            .unwrap_err();
        assert!(matches!(err, ReadmeError::TemplateRead { .. }));
    }
}
