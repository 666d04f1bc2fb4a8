use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::weights::WeightedBreakdown;

/// Identity details captured from the submission form. Immutable for the
/// duration of one appraisal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub employee_id: String,
}

impl FacultyRecord {
    /// Target value used when filtering sheet rows to this individual.
    pub fn match_name(&self) -> &str {
        self.name.trim()
    }

    pub fn designation_kind(&self) -> Designation {
        Designation::parse(&self.designation)
    }
}

/// Recognized designations carrying their own score weight vectors. Anything
/// else weighs every bucket at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Designation {
    AssistantProfessor,
    AssociateProfessor,
    Professor,
    Other,
}

impl Designation {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Assistant Professor" => Self::AssistantProfessor,
            "Associate Professor" => Self::AssociateProfessor,
            "Professor" => Self::Professor,
            _ => Self::Other,
        }
    }
}

/// The five top-level score accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBucket {
    Academics,
    Research,
    SelfDevelopment,
    Mentoring,
    Leadership,
}

impl ScoreBucket {
    /// Buckets in the order expected by the weight vectors and the weighted
    /// score table.
    pub fn ordered() -> [ScoreBucket; 5] {
        [
            Self::Academics,
            Self::Research,
            Self::SelfDevelopment,
            Self::Mentoring,
            Self::Leadership,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Academics => "academics",
            Self::Research => "research",
            Self::SelfDevelopment => "self_development",
            Self::Mentoring => "mentoring",
            Self::Leadership => "leadership",
        }
    }
}

/// Per-run accumulator state. Created fresh for every appraisal so that no
/// score ever leaks across runs; category rules are its only writers.
#[derive(Debug)]
pub struct ScoreContext {
    buckets: BTreeMap<ScoreBucket, f64>,
    counters: BTreeMap<String, f64>,
}

impl ScoreContext {
    pub fn new() -> Self {
        let mut counters = BTreeMap::new();
        for i in 1..=13 {
            counters.insert(format!("r{i}_1"), 0.0);
        }
        for i in 1..=7 {
            counters.insert(format!("p{i}_1"), 0.0);
        }
        for i in 1..=5 {
            counters.insert(format!("s{i}_1"), 0.0);
        }

        let buckets = ScoreBucket::ordered()
            .into_iter()
            .map(|bucket| (bucket, 0.0))
            .collect();

        Self { buckets, counters }
    }

    pub fn add(&mut self, bucket: ScoreBucket, amount: f64) {
        *self.buckets.entry(bucket).or_insert(0.0) += amount;
    }

    pub fn bucket(&self, bucket: ScoreBucket) -> f64 {
        self.buckets.get(&bucket).copied().unwrap_or(0.0)
    }

    pub fn add_counter(&mut self, slot: &str, amount: f64) {
        *self.counters.entry(slot.to_string()).or_insert(0.0) += amount;
    }

    /// Overwrites a counter instead of accumulating. The mentoring rule
    /// depends on this overwrite behavior.
    pub fn set_counter(&mut self, slot: &str, value: f64) {
        self.counters.insert(slot.to_string(), value);
    }

    pub fn counter(&self, slot: &str) -> f64 {
        self.counters.get(slot).copied().unwrap_or(0.0)
    }

    pub fn bucket_vector(&self) -> [f64; 5] {
        let mut values = [0.0; 5];
        for (i, bucket) in ScoreBucket::ordered().into_iter().enumerate() {
            values[i] = self.bucket(bucket);
        }
        values
    }

    /// Immutable snapshot handed back to the caller once the run completes.
    pub fn snapshot(&self, weighted: WeightedBreakdown) -> ScoreSummary {
        ScoreSummary {
            buckets: BucketScores {
                academics: self.bucket(ScoreBucket::Academics),
                research: self.bucket(ScoreBucket::Research),
                self_development: self.bucket(ScoreBucket::SelfDevelopment),
                mentoring: self.bucket(ScoreBucket::Mentoring),
                leadership: self.bucket(ScoreBucket::Leadership),
            },
            counters: self.counters.clone(),
            weighted,
        }
    }
}

impl Default for ScoreContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Final bucket values for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketScores {
    pub academics: f64,
    pub research: f64,
    pub self_development: f64,
    pub mentoring: f64,
    pub leadership: f64,
}

impl BucketScores {
    pub fn get(&self, bucket: ScoreBucket) -> f64 {
        match bucket {
            ScoreBucket::Academics => self.academics,
            ScoreBucket::Research => self.research,
            ScoreBucket::SelfDevelopment => self.self_development,
            ScoreBucket::Mentoring => self.mentoring,
            ScoreBucket::Leadership => self.leadership,
        }
    }

    /// Integer total used by the history log: each bucket truncated, then
    /// summed.
    pub fn truncated_total(&self) -> i64 {
        ScoreBucket::ordered()
            .into_iter()
            .map(|bucket| self.get(bucket) as i64)
            .sum()
    }
}

/// Everything the caller needs for downstream persistence: bucket and counter
/// values plus the weighted breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub buckets: BucketScores,
    pub counters: BTreeMap<String, f64>,
    pub weighted: WeightedBreakdown,
}

/// Renders a score for document text: integral values print without a
/// trailing ".0".
pub(crate) fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Lenient numeric parse used by amount-style columns: anything unparseable
/// counts as zero.
pub(crate) fn safe_float(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}
