use crate::cli::{read_input, GenerateArgs};
use crate::config::Config;
use crate::generator::{build_prompt, generate_story, GenerationRequest};
use crate::output::{StoredStory, StoryStore};
use crate::provider::create_runner;
use tracing::info;

pub async fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(universe) = args.universe {
        config.universe = universe;
    }
    if let Some(paragraphs) = args.paragraphs {
        config.paragraphs = paragraphs;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }

    config.validate()?;

    let request = GenerationRequest {
        lesson: read_input(&args.lesson)?,
        universe: config.universe.clone(),
        paragraphs: config.paragraphs,
    };

    if args.dry_run {
        info!("DRY RUN - the model will not be called");
        println!("\n=== Provider: {} ===\n", config.provider);
        println!(
            "{}",
            build_prompt(&request.lesson, &request.universe, request.paragraphs)
        );
        return Ok(());
    }

    let runner = create_runner(&config);
    let generated = generate_story(&config, runner.as_ref(), &request).await?;

    let stored = StoredStory::new(
        &request.lesson,
        &request.universe,
        generated.story,
        generated.report,
    );
    let store = StoryStore::new(&config.output_dir);
    let path = store.save(&stored)?;

    let images = &stored.report.image_prompts;
    let quizzes = &stored.report.quizzes;
    info!(
        "Story has {} paragraphs: {} image prompts synthesized, {} quizzes added, {} fixed",
        stored.story.paragraphs.len(),
        images.generated_fallbacks,
        quizzes.quizzes_added,
        quizzes.quizzes_fixed
    );

    println!("{}", stored.id);
    println!("Saved to {}", path.display());

    Ok(())
}
