use serde::{Deserialize, Serialize};

/// Body sent to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Envelope returned by the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the server analysed supplied text or content fetched from a URL
    #[serde(default)]
    pub source: Option<String>,
    pub results: AnalysisResult,
}

/// Sentiment and readability metrics computed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub word_count: u64,
    pub complex_words: u64,
    pub syllable_per_word: f64,
    pub personal_pronouns: u64,
}

/// A single displayable metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Fractional score, shown with two decimals
    Score(f64),
    /// Integer count, shown as-is
    Count(u64),
}

impl MetricValue {
    /// Value as plotted on the chart (scores rounded like their label).
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Score(v) => (v * 100.0).round() / 100.0,
            MetricValue::Count(c) => *c as f64,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Score(v) => write!(f, "{v:.2}"),
            MetricValue::Count(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: MetricValue,
}

impl AnalysisResult {
    /// The six metrics in display order.
    pub fn metrics(&self) -> [Metric; 6] {
        [
            Metric {
                label: "Polarity",
                value: MetricValue::Score(self.polarity),
            },
            Metric {
                label: "Subjectivity",
                value: MetricValue::Score(self.subjectivity),
            },
            Metric {
                label: "Word Count",
                value: MetricValue::Count(self.word_count),
            },
            Metric {
                label: "Complex Words",
                value: MetricValue::Count(self.complex_words),
            },
            Metric {
                label: "Syllables/Word",
                value: MetricValue::Score(self.syllable_per_word),
            },
            Metric {
                label: "Pronouns",
                value: MetricValue::Count(self.personal_pronouns),
            },
        ]
    }
}
