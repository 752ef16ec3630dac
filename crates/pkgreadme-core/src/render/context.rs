use serde::Serialize;
use tera::Context;

use crate::command::CommandDoc;
use crate::config::Settings;
use crate::error::{ReadmeError, Result};
use crate::manifest::PackageManifest;
use crate::section::{quick_links, ResolvedSection, ResolvedSections, SectionSpec};

/// Everything section templates may reference: package identity, badges,
/// navigation and command docs. Section bodies are not part of it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeaderContext {
    pub package_name: String,
    pub package_short_name: String,
    pub package_name_border: String,
    pub package_description: String,
    pub shields: String,
    pub update_instructions: String,
    pub show_powered_by: bool,
    pub quick_links: String,
    pub has_commands: bool,
    pub has_multiple_commands: bool,
    pub commands: Vec<CommandDoc>,
}

impl HeaderContext {
    pub fn builder<'a>(
        manifest: &'a PackageManifest,
        settings: &'a Settings,
    ) -> ContextBuilder<'a> {
        ContextBuilder {
            manifest,
            settings,
            shields: String::new(),
            commands: Vec::new(),
            quick_links: String::new(),
        }
    }

    pub fn to_tera_context(&self) -> Result<Context> {
        Context::from_serialize(self).map_err(|e| ReadmeError::RenderError { source: e })
    }

    /// Combine with the resolved sections into the final document context.
    pub fn finish(mut self, resolved: ResolvedSections) -> RenderContext {
        self.package_description = resolved.package_description;
        RenderContext {
            header: self,
            sections: resolved.sections,
        }
    }
}

/// Collects the inputs of a [`HeaderContext`].
///
/// Badges and command docs must be computed before the header exists, and
/// sections can only be resolved against a built header.
pub struct ContextBuilder<'a> {
    manifest: &'a PackageManifest,
    settings: &'a Settings,
    shields: String,
    commands: Vec<CommandDoc>,
    quick_links: String,
}

impl ContextBuilder<'_> {
    pub fn shields(mut self, shields: String) -> Self {
        self.shields = shields;
        self
    }

    pub fn commands(mut self, commands: Vec<CommandDoc>) -> Self {
        self.commands = commands;
        self
    }

    pub fn sections(mut self, specs: &[SectionSpec]) -> Self {
        self.quick_links = quick_links(specs);
        self
    }

    pub fn build(self) -> HeaderContext {
        let name = &self.manifest.name;
        HeaderContext {
            package_name: name.clone(),
            package_short_name: self.manifest.short_name().to_string(),
            package_name_border: "=".repeat(name.len()),
            package_description: self.manifest.description.clone().unwrap_or_default(),
            shields: self.shields,
            update_instructions: self.settings.update_instructions.clone(),
            show_powered_by: self.manifest.show_powered_by(),
            quick_links: self.quick_links,
            has_commands: self.manifest.has_commands(),
            has_multiple_commands: self.commands.len() > 1,
            commands: self.commands,
        }
    }
}

/// The final context handed to the document template.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderContext {
    #[serde(flatten)]
    pub header: HeaderContext,
    pub sections: Vec<ResolvedSection>,
}

impl RenderContext {
    pub fn to_tera_context(&self) -> Result<Context> {
        Context::from_serialize(self).map_err(|e| ReadmeError::RenderError { source: e })
    }
}
