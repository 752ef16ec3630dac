use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex_lite::Regex;
use tera::Context;

use crate::error::Result;
use crate::fetch::ContentFetcher;
use crate::render::TemplateSet;

fn template_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(md|markdown|mustache|tera)$").expect("valid regex"))
}

/// Whether a value names a template/markup file by its suffix.
pub fn has_template_suffix(value: &str) -> bool {
    template_suffix_re().is_match(value)
}

/// Where one piece (`pre`, `body` or `post`) of a section comes from.
///
/// Classified once, where the value originates, so later stages never re-sniff
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRef {
    /// Literal text, used as-is.
    Inline(String),
    /// Remote content fetched over HTTP.
    Url(String),
    /// A package-local file rendered as a template.
    ///
    /// Tera syntax applies to the whole file, so a stray `{#` or `{%` in plain
    /// markdown (e.g. a `{#anchor}` heading attribute) fails to render. Use an
    /// inline value or wrap the text in `{% raw %}` to pass it through.
    FilePath(PathBuf),
    /// A named template from the template set.
    TemplatePath(String),
}

impl ContentRef {
    /// Classify a manifest override value.
    ///
    /// Anything containing `://` is a URL, even if it also ends in a template
    /// suffix. Values with a template suffix are files relative to the package
    /// directory. Everything else is literal text.
    pub fn from_override(value: &str, package_dir: &Path) -> Self {
        if value.contains("://") {
            Self::Url(value.to_string())
        } else if has_template_suffix(value) {
            Self::FilePath(package_dir.join(value))
        } else {
            Self::Inline(value.to_string())
        }
    }

    /// Produce the text for this piece. Templates see `context`.
    pub fn resolve(
        &self,
        context: &Context,
        templates: &TemplateSet,
        fetcher: &dyn ContentFetcher,
    ) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::Url(url) => fetcher.fetch(url),
            Self::FilePath(path) => templates.render_file(path, context),
            Self::TemplatePath(name) => templates.render(name, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_detection_is_case_insensitive() {
        assert!(has_template_suffix("docs/USING.MD"));
        assert!(has_template_suffix("using.mustache"));
        assert!(has_template_suffix("using.tera"));
        assert!(!has_template_suffix("using.txt"));
        assert!(!has_template_suffix("Just some text about md"));
    }

    #[test]
    fn url_takes_precedence_over_suffix() {
        let dir = Path::new("/pkg");
        assert_eq!(
            ContentRef::from_override("https://example.com/using.md", dir),
            ContentRef::Url("https://example.com/using.md".into())
        );
    }

    #[test]
    fn suffixed_override_is_package_relative_file() {
        let dir = Path::new("/pkg");
        assert_eq!(
            ContentRef::from_override("docs/using.md", dir),
            ContentRef::FilePath(PathBuf::from("/pkg/docs/using.md"))
        );
    }

    #[test]
    fn plain_override_is_inline() {
        let dir = Path::new("/pkg");
        assert_eq!(
            ContentRef::from_override("Run the thing.", dir),
            ContentRef::Inline("Run the thing.".into())
        );
    }
}
