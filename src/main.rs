use std::process;

use clap::Parser;

use lesson_tts::config::{self, GenerateConfig};
use lesson_tts::engines::openai::{OpenAiEngine, OpenAiParamsBuilder};
use lesson_tts::{run_plan, ItemGenerator, LessonPlan, OutputLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GenerateConfig::parse();

    let api_key = match config::api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let plan = match LessonPlan::load(&config.content) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "Starting generation for {} {} ({} items)",
        plan.month,
        plan.year,
        plan.item_count()
    );

    let mut builder = OpenAiParamsBuilder::default();
    builder
        .model(config.model.clone())
        .voice(config.voice.clone())
        .base_url(config.base_url.clone());
    if let Some(instructions) = &config.instructions {
        builder.instructions(instructions.clone());
    }
    let mut engine = OpenAiEngine::new(api_key, builder.build()?)?;

    let layout = OutputLayout::new(&config.output);
    let mut generator = ItemGenerator::new(&mut engine, config.pause());
    log::info!(
        "Writing audio under {} with a {:?} pause after each generated item",
        layout.root().display(),
        generator.pause()
    );
    let summary = run_plan(&plan, &layout, &mut generator)?;

    log::info!(
        "All done for {} {}: {summary} ({} items)",
        plan.month,
        plan.year,
        summary.total()
    );
    Ok(())
}
