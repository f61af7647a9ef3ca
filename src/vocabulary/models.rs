//! Data models for the vocabulary trainer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ease factor every new item starts with
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Topic tag of a vocabulary item.
///
/// Serialized with the bilingual label shown in the app, so files written by
/// earlier versions keep loading. The snake_case name is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "道路标志 (Segnali)", alias = "road_signs")]
    RoadSigns,
    #[serde(rename = "交通规则 (Norme)", alias = "rules")]
    Rules,
    #[serde(rename = "车辆构造 (Motore)", alias = "vehicle")]
    Vehicle,
    #[serde(rename = "驾驶行为 (Comportamento)", alias = "behavior")]
    Behavior,
    #[serde(rename = "安全防护 (Sicurezza)", alias = "safety")]
    Safety,
    #[serde(rename = "事故处理 (Incidenti)", alias = "accidents")]
    Accidents,
    #[serde(rename = "证件法规 (Documenti)", alias = "documents")]
    Documents,
    #[serde(rename = "通用词汇 (Generale)", alias = "general")]
    General,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::RoadSigns,
        Category::Rules,
        Category::Vehicle,
        Category::Behavior,
        Category::Safety,
        Category::Accidents,
        Category::Documents,
        Category::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::RoadSigns => "道路标志 (Segnali)",
            Category::Rules => "交通规则 (Norme)",
            Category::Vehicle => "车辆构造 (Motore)",
            Category::Behavior => "驾驶行为 (Comportamento)",
            Category::Safety => "安全防护 (Sicurezza)",
            Category::Accidents => "事故处理 (Incidenti)",
            Category::Documents => "证件法规 (Documenti)",
            Category::General => "通用词汇 (Generale)",
        }
    }

    /// Short ASCII name used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Category::RoadSigns => "road_signs",
            Category::Rules => "rules",
            Category::Vehicle => "vehicle",
            Category::Behavior => "behavior",
            Category::Safety => "safety",
            Category::Accidents => "accidents",
            Category::Documents => "documents",
            Category::General => "general",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.label() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Which part of the vocabulary a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &LearningItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("ALL"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// One vocabulary entry under spaced repetition.
///
/// `prompt` and `answer` are stored as `it` / `cn` to stay compatible with
/// existing saved vocabularies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub id: String,
    /// Italian term shown as the question
    #[serde(rename = "it", alias = "prompt")]
    pub prompt: String,
    /// Chinese translation expected as the answer
    #[serde(rename = "cn", alias = "answer")]
    pub answer: String,
    pub category: Category,
    /// Consecutive successful recalls since the last failure
    #[serde(default)]
    pub repetition: u32,
    /// Current interval in days
    #[serde(default)]
    pub interval: u32,
    /// SM-2 ease factor (default 2.5, never below 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Epoch milliseconds of the next review, 0 when never reviewed
    #[serde(default)]
    pub next_review_date: i64,
}

fn default_ease_factor() -> f64 {
    DEFAULT_EASE_FACTOR
}

impl LearningItem {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            answer: answer.into(),
            category,
            repetition: 0,
            interval: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            next_review_date: 0,
        }
    }

    /// Create a user-supplied item. Returns `None` when either side is blank.
    pub fn custom(prompt: &str, answer: &str, category: Category) -> Option<Self> {
        let prompt = prompt.trim();
        let answer = answer.trim();
        if prompt.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self::new(
            format!("custom-{}", Uuid::new_v4()),
            prompt,
            answer,
            category,
        ))
    }

    /// Check if the item is due for review at `now` (epoch millis)
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review_date <= now
    }

    pub fn is_learned(&self) -> bool {
        self.repetition > 0
    }

    pub fn is_mastered(&self) -> bool {
        self.repetition > 5
    }
}

/// Running totals across quiz sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub learned_count: usize,
    #[serde(default)]
    pub total_correct: u64,
    #[serde(default)]
    pub total_attempts: u64,
}

impl UserStats {
    pub fn record_attempt(&mut self, correct: bool) {
        self.total_attempts += 1;
        if correct {
            self.total_correct += 1;
        }
    }

    /// Recount learned items from the current vocabulary
    pub fn refresh_learned(&mut self, items: &[LearningItem]) {
        self.learned_count = items.iter().filter(|i| i.is_learned()).count();
    }

    /// Share of correct answers, `None` before the first attempt
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_attempts == 0 {
            None
        } else {
            Some(self.total_correct as f64 / self.total_attempts as f64)
        }
    }
}

/// Learning progress for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: Category,
    pub total: usize,
    pub learned: usize,
    pub percent: u32,
}
