//! Item generation and the run driver.
//!
//! Items are processed strictly one after another. An item whose artifact
//! already exists is skipped without touching the engine; a freshly
//! generated item is followed by a fixed pause before control returns.
//! Per-item failures are logged and reported as [`ItemOutcome::Failed`],
//! never propagated, so a single bad item cannot stop the batch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::layout::OutputLayout;
use crate::plan::{Category, Item, LessonPlan};
use crate::SynthesisEngine;

/// Pause after each generated item unless configured otherwise.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(8);

/// What happened to a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The artifact already existed; the engine was not called.
    Skipped(PathBuf),
    /// Audio was synthesized and written.
    Generated(PathBuf),
    /// Synthesis or the write failed; no artifact was left behind.
    Failed { path: PathBuf, error: String },
}

impl ItemOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ItemOutcome::Skipped(path) | ItemOutcome::Generated(path) => path,
            ItemOutcome::Failed { path, .. } => path,
        }
    }
}

/// Generates artifacts for individual items with a shared engine.
pub struct ItemGenerator<'a, E: SynthesisEngine> {
    engine: &'a mut E,
    pause: Duration,
}

impl<'a, E: SynthesisEngine> ItemGenerator<'a, E> {
    pub fn new(engine: &'a mut E, pause: Duration) -> Self {
        Self { engine, pause }
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Path of the artifact for `item` inside `dir`.
    pub fn artifact_path(&self, dir: &Path, item: &Item) -> PathBuf {
        dir.join(format!(
            "{}.{}",
            item.file,
            self.engine.output_format().extension()
        ))
    }

    /// Generate the artifact for one item unless it already exists.
    pub fn generate(&mut self, category: Category, dir: &Path, item: &Item) -> ItemOutcome {
        let path = self.artifact_path(dir, item);

        if path.exists() {
            log::info!("Skipping existing {category}: {}", path.display());
            return ItemOutcome::Skipped(path);
        }

        log::info!("Generating {category}: {}", path.display());
        log::info!("    Text: \"{}\"", item.text);

        match self.engine.synthesize_to_file(&item.text, &path, None) {
            Ok(bytes) => {
                log::info!("Saved {category}: {} ({bytes} bytes)", path.display());
                if !self.pause.is_zero() {
                    std::thread::sleep(self.pause);
                }
                ItemOutcome::Generated(path)
            }
            Err(e) => {
                log::error!("Error generating {category} ({}): {e}", item.file);
                ItemOutcome::Failed {
                    path,
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Tally of item outcomes for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Skipped(_) => self.skipped += 1,
            ItemOutcome::Generated(_) => self.generated += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.generated + self.skipped + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generated, {} skipped, {} failed",
            self.generated, self.skipped, self.failed
        )
    }
}

/// Walk every week and category of `plan` in order and generate each item.
///
/// Failing to create an output directory aborts the run; item failures do not.
pub fn run_plan<E: SynthesisEngine>(
    plan: &LessonPlan,
    layout: &OutputLayout,
    generator: &mut ItemGenerator<'_, E>,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (week_name, week) in &plan.weeks {
        log::info!("Week: {week_name}");
        layout.prepare_week(week_name)?;

        for category in Category::ALL {
            let dir = layout.category_dir(week_name, category);
            for item in week.items(category) {
                let outcome = generator.generate(category, &dir, item);
                summary.record(&outcome);
            }
        }
    }

    Ok(summary)
}
