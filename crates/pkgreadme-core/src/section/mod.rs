pub mod content;
pub mod resolve;

use std::path::Path;

use crate::manifest::{PackageManifest, SectionOverride};
use crate::render::templates::{section_template_name, TemplateSet};

pub use content::ContentRef;
pub use resolve::{resolve_sections, ResolvedSection, ResolvedSections};

/// Headings used when the manifest does not list any.
pub const DEFAULT_SECTIONS: &[&str] = &["Using", "Contributing", "Support"];

/// Section keys that get a built-in body template.
pub const BUILTIN_SECTIONS: &[&str] = &["using", "contributing", "support"];

/// Key of the synthetic section that feeds the top-level description.
pub const PACKAGE_DESCRIPTION_KEY: &str = "package_description";

/// Turn a heading into its section key: keep `[A-Za-z0-9_-]`, lowercase.
pub fn derive_key(heading: &str) -> String {
    heading
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One section of the README and where each of its pieces comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub key: String,
    /// `None` for the synthetic description section, which is never listed.
    pub heading: Option<String>,
    pub pre: Option<ContentRef>,
    pub body: Option<ContentRef>,
    pub post: Option<ContentRef>,
}

impl SectionSpec {
    fn new(key: String, heading: Option<String>, default_body: Option<ContentRef>) -> Self {
        Self {
            key,
            heading,
            pre: None,
            body: default_body,
            post: None,
        }
    }

    /// Replace each slot the manifest overrides; untouched slots keep their default.
    fn apply_override(&mut self, overrides: &SectionOverride, package_dir: &Path) {
        let classify = |value: &String| ContentRef::from_override(value, package_dir);
        if let Some(pre) = overrides.pre.as_ref().map(classify) {
            self.pre = Some(pre);
        }
        if let Some(body) = overrides.body.as_ref().map(classify) {
            self.body = Some(body);
        }
        if let Some(post) = overrides.post.as_ref().map(classify) {
            self.post = Some(post);
        }
    }

    /// Slots in rendering order.
    pub fn slots(&self) -> [(&'static str, Option<&ContentRef>); 3] {
        [
            ("pre", self.pre.as_ref()),
            ("body", self.body.as_ref()),
            ("post", self.post.as_ref()),
        ]
    }

    pub fn is_listed(&self) -> bool {
        self.heading.is_some()
    }
}

/// Default body for a built-in section, preferring the `-bundled` variant when
/// the package is bundled and that template exists.
fn default_body(key: &str, bundled: bool, templates: &TemplateSet) -> Option<ContentRef> {
    if !BUILTIN_SECTIONS.contains(&key) {
        return None;
    }

    let bundled_name = section_template_name(key, true);
    let name = if bundled && templates.contains(&bundled_name) {
        bundled_name
    } else {
        section_template_name(key, false)
    };
    Some(ContentRef::TemplatePath(name))
}

/// Build the ordered section specs for a manifest, ending with the synthetic
/// description section.
///
/// Headings that map to the same key collapse into one section at the first
/// position, carrying the last heading.
pub fn build_section_specs(
    manifest: &PackageManifest,
    package_dir: &Path,
    templates: &TemplateSet,
) -> Vec<SectionSpec> {
    let headings: Vec<String> = match &manifest.extra.readme.sections {
        Some(sections) => sections.clone(),
        None => DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
    };
    let bundled = manifest.extra.bundled;

    let mut specs: Vec<SectionSpec> = Vec::with_capacity(headings.len() + 1);
    for heading in headings {
        let key = derive_key(&heading);
        if key == PACKAGE_DESCRIPTION_KEY {
            continue;
        }
        if let Some(existing) = specs.iter_mut().find(|s| s.key == key) {
            existing.heading = Some(heading);
            continue;
        }
        let body = default_body(&key, bundled, templates);
        specs.push(SectionSpec::new(key, Some(heading), body));
    }

    specs.push(SectionSpec::new(
        PACKAGE_DESCRIPTION_KEY.to_string(),
        None,
        Some(ContentRef::Inline(
            manifest.description.clone().unwrap_or_default(),
        )),
    ));

    for spec in &mut specs {
        if let Some(overrides) = manifest.section_override(&spec.key) {
            spec.apply_override(&overrides, package_dir);
        }
    }

    specs
}

/// `Quick links: [Using](#using) | ...`, or empty when no section is listed.
pub fn quick_links(specs: &[SectionSpec]) -> String {
    let links: Vec<String> = specs
        .iter()
        .filter_map(|spec| {
            spec.heading
                .as_ref()
                .map(|heading| format!("[{heading}](#{})", spec.key))
        })
        .collect();

    if links.is_empty() {
        String::new()
    } else {
        format!("Quick links: {}", links.join(" | "))
    }
}
