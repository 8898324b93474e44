use crate::cli::ShowArgs;
use crate::config::Config;
use crate::output::{render_markdown, StoryStore};

pub fn execute(args: ShowArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let store = StoryStore::new(args.output_dir.unwrap_or(config.output_dir));

    let stored = store.load(&args.id)?;
    if args.markdown {
        print!("{}", render_markdown(&stored));
    } else {
        println!("{}", serde_json::to_string_pretty(&stored)?);
    }

    Ok(())
}
