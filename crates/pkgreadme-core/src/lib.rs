pub mod command;
pub mod config;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod prompt;
pub mod render;
pub mod section;
pub mod shields;
pub mod write;

use std::path::{Path, PathBuf};

use crate::command::{build_command_docs, CommandIntrospector, HostIntrospector};
use crate::config::Settings;
use crate::error::Result;
use crate::fetch::{ContentFetcher, HttpFetcher};
use crate::manifest::load_manifest;
use crate::prompt::OverwritePrompt;
use crate::render::{compose_readme, HeaderContext, TemplateSet};
use crate::section::{build_section_specs, resolve_sections};
use crate::shields::resolve_shields;
use crate::write::{write_readme, WriteOutcome};

/// File name of the generated document.
pub const README_FILE: &str = "README.md";

/// A README that has been rendered in memory but not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedReadme {
    pub path: PathBuf,
    pub contents: String,
}

/// Drives the README pipeline with its collaborators.
pub struct ReadmeGenerator {
    settings: Settings,
    templates: TemplateSet,
    fetcher: Box<dyn ContentFetcher>,
    introspector: Box<dyn CommandIntrospector>,
}

impl ReadmeGenerator {
    /// Generator with the default collaborators: HTTP fetching and the host
    /// binary's command dump.
    pub fn new(settings: Settings) -> Result<Self> {
        let templates = TemplateSet::load(settings.template_dir.as_deref())?;
        let introspector = HostIntrospector {
            program: settings.host_command.clone(),
            args: settings.cmd_dump.clone(),
        };
        Ok(Self {
            settings,
            templates,
            fetcher: Box::new(HttpFetcher),
            introspector: Box::new(introspector),
        })
    }

    pub fn with_fetcher(mut self, fetcher: impl ContentFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_introspector(mut self, introspector: impl CommandIntrospector + 'static) -> Self {
        self.introspector = Box::new(introspector);
        self
    }

    /// Run the full pipeline for `package_dir` without writing anything.
    ///
    /// Badges and command docs are computed first because section templates may
    /// reference them; a missing command aborts before any section renders.
    pub fn plan(&self, package_dir: &Path) -> Result<PlannedReadme> {
        let manifest = load_manifest(package_dir)?;

        let shields = resolve_shields(&manifest, package_dir);

        let commands = if manifest.has_commands() {
            let tree = self.introspector.command_tree()?;
            build_command_docs(&tree, &manifest.extra.commands, &self.settings.host_command)?
        } else {
            Vec::new()
        };

        let specs = build_section_specs(&manifest, package_dir, &self.templates);

        let header = HeaderContext::builder(&manifest, &self.settings)
            .shields(shields)
            .commands(commands)
            .sections(&specs)
            .build();

        let resolved = resolve_sections(&specs, &header, &self.templates, self.fetcher.as_ref())?;
        let context = header.finish(resolved);
        let contents = compose_readme(&self.templates, &context)?;

        Ok(PlannedReadme {
            path: package_dir.join(README_FILE),
            contents,
        })
    }

    /// Plan and write the README, asking before replacing an existing one unless `force`.
    pub fn generate(
        &self,
        package_dir: &Path,
        force: bool,
        prompt: &dyn OverwritePrompt,
    ) -> Result<WriteOutcome> {
        let planned = self.plan(package_dir)?;
        write_readme(&planned.path, &planned.contents, force, prompt)
    }
}
