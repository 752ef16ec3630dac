use std::sync::OnceLock;

use regex_lite::{Captures, Regex};

fn global_parameters_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)## GLOBAL PARAMETERS(.+)").expect("valid regex"))
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"##\s(.+)").expect("valid regex"))
}

// A description that runs to the end of the text absorbs one trailing newline,
// so the block always ends in exactly one blank line.
fn definition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)([^\n]+)\n: (.+?)(\n\n|\n?$)").expect("valid regex"))
}

/// Convert a command's long description into README markup.
///
/// 1. Drop the trailing `## GLOBAL PARAMETERS` block.
/// 2. Turn `## HEADING` lines into `**HEADING**`.
/// 3. Rewrap `label` / `: description` definition lists into an indented block.
pub fn format_longdesc(longdesc: &str) -> String {
    let text = strip_global_parameters(longdesc);
    let text = heading_re().replace_all(&text, "**$1**");
    rewrap_definitions(&text)
}

fn strip_global_parameters(text: &str) -> String {
    global_parameters_re().replace(text, "").into_owned()
}

fn rewrap_definitions(text: &str) -> String {
    definition_re()
        .replace_all(text, |caps: &Captures| {
            format!("\t{}\n{}\n\n", &caps[1], indent("\t\t", &caps[2]))
        })
        .into_owned()
}

fn indent(whitespace: &str, text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{whitespace}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
