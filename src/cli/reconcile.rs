use crate::cli::{read_input, ReconcileArgs};
use crate::config::Config;
use crate::reconcile::reconcile_story;
use crate::story::parse_story;
use anyhow::Context;
use tracing::info;

pub fn execute(args: ReconcileArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let universe = args.universe.unwrap_or(config.universe);

    let raw = read_input(&args.input)?;
    let mut story = parse_story(&raw)?;

    let report = reconcile_story(&mut story, &universe);
    info!(
        "Reconciled {} paragraphs ({})",
        story.paragraphs.len(),
        if report.is_clean() { "no changes" } else { "repaired" }
    );

    let json = serde_json::to_string_pretty(&story)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?
        }
        None => println!("{}", json),
    }

    if let Some(path) = &args.report {
        let report_json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, report_json)
            .with_context(|| format!("Failed to write {:?}", path))?;
    }

    Ok(())
}
