use std::path::PathBuf;

use console::style;
use miette::Result;

use pkgreadme_core::command::JsonFileIntrospector;
use pkgreadme_core::config::{load_user_config, Settings};
use pkgreadme_core::prompt::InquirePrompt;
use pkgreadme_core::write::WriteOutcome;
use pkgreadme_core::ReadmeGenerator;

pub fn run(
    dir: PathBuf,
    force: bool,
    dry_run: bool,
    template_dir: Option<PathBuf>,
    commands_json: Option<PathBuf>,
) -> Result<()> {
    let mut settings: Settings = load_user_config()?.map(Settings::from).unwrap_or_default();
    if template_dir.is_some() {
        settings.template_dir = template_dir;
    }

    let mut generator = ReadmeGenerator::new(settings)?;
    if let Some(path) = commands_json {
        generator = generator.with_introspector(JsonFileIntrospector { path });
    }

    if dry_run {
        let planned = generator.plan(&dir)?;
        println!(
            "{} Dry run \u{2014} would write {}:\n",
            style("==>").cyan().bold(),
            style(planned.path.display()).cyan()
        );
        print!("{}", planned.contents);
        return Ok(());
    }

    match generator.generate(&dir, force, &InquirePrompt)? {
        WriteOutcome::Written(path) => println!(
            "{} Created package readme at {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        ),
        WriteOutcome::Skipped(_) => println!("Package readme generation skipped."),
    }

    Ok(())
}
