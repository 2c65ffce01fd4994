//! Lesson plan documents.
//!
//! A lesson plan covers one month and is organised into named weeks. Each
//! week holds three ordered lists of items, one per [`Category`]:
//!
//! ```json
//! {
//!   "month": "January",
//!   "year": 2025,
//!   "weeks": {
//!     "week1": {
//!       "vocab": [{ "file": "hello", "text": "Hello" }],
//!       "sentences": [],
//!       "questions": [{ "file": "how_are_you", "text": "How are you?" }]
//!     }
//!   }
//! }
//! ```
//!
//! Week order is the order of the keys in the document.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Failed to read lesson plan {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse lesson plan {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One month of lesson content.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonPlan {
    #[serde(default)]
    pub month: String,
    /// Year label; numbers in the document are kept as their decimal text.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    pub weeks: IndexMap<String, Week>,
}

/// The three item lists of a single week. Absent or `null` lists are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Week {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vocab: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sentences: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub questions: Vec<Item>,
}

/// A piece of text and the base name of the audio file it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub file: String,
    pub text: String,
}

/// Item categories, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vocab,
    Sentences,
    Questions,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Vocab, Category::Sentences, Category::Questions];

    /// Name of the category's output directory inside a week.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Vocab => "vocab",
            Category::Sentences => "sentences",
            Category::Questions => "questions",
        }
    }

    /// Singular label used in progress messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Category::Vocab => "vocab",
            Category::Sentences => "sentence",
            Category::Questions => "question",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl Week {
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Vocab => &self.vocab,
            Category::Sentences => &self.sentences,
            Category::Questions => &self.questions,
        }
    }
}

impl LessonPlan {
    /// Read and parse a lesson plan from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PlanError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a lesson plan from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of items across all weeks and categories.
    pub fn item_count(&self) -> usize {
        self.weeks
            .values()
            .flat_map(|week| Category::ALL.iter().map(move |c| week.items(*c).len()))
            .sum()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(s) => s,
        Label::Number(n) => n.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANUARY: &str = r#"{
        "month": "January",
        "year": 2025,
        "weeks": {
            "week2": {
                "vocab": [{"file": "cat", "text": "Cat"}, {"file": "dog", "text": "Dog"}],
                "questions": [{"file": "q1", "text": "Is it a cat?"}]
            },
            "week1": {
                "sentences": [{"file": "s1", "text": "The cat sleeps."}],
                "notes": "ignored"
            }
        }
    }"#;

    #[test]
    fn weeks_keep_document_order() {
        let plan = LessonPlan::from_json(JANUARY).unwrap();
        let names: Vec<&str> = plan.weeks.keys().map(String::as_str).collect();
        assert_eq!(names, ["week2", "week1"]);
    }

    #[test]
    fn absent_lists_are_empty() {
        let plan = LessonPlan::from_json(JANUARY).unwrap();
        let week1 = &plan.weeks["week1"];
        assert!(week1.items(Category::Vocab).is_empty());
        assert!(week1.items(Category::Questions).is_empty());
        assert_eq!(
            week1.items(Category::Sentences),
            [Item {
                file: "s1".into(),
                text: "The cat sleeps.".into()
            }]
        );
        assert_eq!(plan.item_count(), 4);
    }

    #[test]
    fn null_lists_are_empty() {
        let json = r#"{"weeks": {"week1": {"vocab": null, "sentences": [{"file": "s1", "text": "Hi."}], "questions": null}}}"#;
        let plan = LessonPlan::from_json(json).unwrap();
        let week1 = &plan.weeks["week1"];
        assert!(week1.items(Category::Vocab).is_empty());
        assert!(week1.items(Category::Questions).is_empty());
        assert_eq!(week1.items(Category::Sentences).len(), 1);
    }

    #[test]
    fn year_accepts_string_or_number() {
        let plan = LessonPlan::from_json(JANUARY).unwrap();
        assert_eq!(plan.year, "2025");

        let plan = LessonPlan::from_json(r#"{"month": "May", "year": "2026", "weeks": {}}"#).unwrap();
        assert_eq!(plan.year, "2026");
    }

    #[test]
    fn missing_weeks_is_an_error() {
        assert!(LessonPlan::from_json(r#"{"month": "May", "year": 2026}"#).is_err());
    }

    #[test]
    fn malformed_item_is_an_error() {
        let json = r#"{"weeks": {"week1": {"vocab": [{"file": "a"}]}}}"#;
        assert!(LessonPlan::from_json(json).is_err());
    }

    #[test]
    fn load_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("february.json");
        let err = LessonPlan::load(&missing).unwrap_err();
        assert!(matches!(err, PlanError::Io { .. }));
        assert!(err.to_string().contains("february.json"));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            LessonPlan::load(&broken).unwrap_err(),
            PlanError::Parse { .. }
        ));
    }

    #[test]
    fn category_order_and_labels() {
        let dirs: Vec<&str> = Category::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(dirs, ["vocab", "sentences", "questions"]);
        assert_eq!(Category::Sentences.to_string(), "sentence");
    }
}
