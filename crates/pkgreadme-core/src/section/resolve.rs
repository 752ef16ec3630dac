use serde::Serialize;
use tera::Context;

use super::{SectionSpec, PACKAGE_DESCRIPTION_KEY};
use crate::error::Result;
use crate::fetch::ContentFetcher;
use crate::render::context::HeaderContext;
use crate::render::TemplateSet;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedSection {
    pub heading: String,
    pub body: String,
}

/// Resolved section bodies, with the description pulled out on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSections {
    pub sections: Vec<ResolvedSection>,
    pub package_description: String,
}

/// Join resolved pieces: trim each, drop empty ones, separate with a blank line.
pub fn join_pieces<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = pieces
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    kept.join("\n\n").trim().to_string()
}

/// Resolve every slot of one section and assemble its body.
pub fn resolve_section_body(
    spec: &SectionSpec,
    context: &Context,
    templates: &TemplateSet,
    fetcher: &dyn ContentFetcher,
) -> Result<String> {
    let mut pieces = Vec::new();
    for (slot, content) in spec.slots() {
        let Some(content) = content else {
            continue;
        };
        log::debug!("resolving {}.{slot} from {content:?}", spec.key);
        pieces.push(content.resolve(context, templates, fetcher)?);
    }
    Ok(join_pieces(pieces))
}

/// Resolve all sections in order against the header context.
///
/// Every section sees the same header context; bodies resolved earlier are not
/// visible to later ones.
pub fn resolve_sections(
    specs: &[SectionSpec],
    header: &HeaderContext,
    templates: &TemplateSet,
    fetcher: &dyn ContentFetcher,
) -> Result<ResolvedSections> {
    let context = header.to_tera_context()?;
    let mut resolved = ResolvedSections::default();

    for spec in specs {
        let body = resolve_section_body(spec, &context, templates, fetcher)?;
        match &spec.heading {
            Some(heading) => resolved.sections.push(ResolvedSection {
                heading: heading.clone(),
                body,
            }),
            None if spec.key == PACKAGE_DESCRIPTION_KEY => resolved.package_description = body,
            None => {}
        }
    }

    Ok(resolved)
}
