//! Output directory layout: `<root>/<week>/<category>/<file>.<ext>`.

use std::path::{Path, PathBuf};

use crate::plan::Category;

/// Create `path` and any missing parents.
///
/// Returns `true` if the directory was created by this call. Creation is
/// logged; an existing directory is left alone silently.
pub fn ensure_dir(path: &Path) -> std::io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    log::info!("Created folder: {}", path.display());
    Ok(true)
}

/// Root of the generated audio tree.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn week_dir(&self, week: &str) -> PathBuf {
        self.root.join(week)
    }

    pub fn category_dir(&self, week: &str, category: Category) -> PathBuf {
        self.week_dir(week).join(category.dir_name())
    }

    /// Ensure the week directory and all three category directories exist.
    pub fn prepare_week(&self, week: &str) -> std::io::Result<()> {
        ensure_dir(&self.week_dir(week))?;
        for category in Category::ALL {
            ensure_dir(&self.category_dir(week, category))?;
        }
        Ok(())
    }
}
