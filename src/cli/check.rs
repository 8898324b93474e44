use crate::cli::{read_input, CheckArgs};
use crate::story::{parse_story, validate};
use tracing::error;

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let raw = read_input(&args.input)?;
    let story = parse_story(&raw)?;
    let violations = validate(&story.paragraphs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
    } else if violations.is_empty() {
        println!("OK: {} paragraphs, layout valid", story.paragraphs.len());
    } else {
        for violation in &violations {
            println!("{}", violation);
        }
    }

    if !violations.is_empty() {
        error!("{} layout violations", violations.len());
        std::process::exit(1);
    }

    Ok(())
}
