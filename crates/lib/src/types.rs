use serde::{Deserialize, Serialize};

/// A structured veterinary analysis, as reported by the assistant after a
/// document upload or an image analysis. Each field holds unstructured
/// natural-language text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisText {
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub insights_anomalies: String,
    #[serde(default)]
    pub followup_actions: String,
}

impl AnalysisText {
    /// The text fields in classification order: synopsis, insights, then
    /// follow-up actions.
    pub fn fields(&self) -> [&str; 3] {
        [
            &self.synopsis,
            &self.insights_anomalies,
            &self.followup_actions,
        ]
    }
}

/// The markup convention to apply when formatting assistant text.
///
/// Chat messages carry only bold markers and line breaks; advice text
/// (training, stool, and rescue summaries) additionally arrives with
/// markdown headers, section titles, and `- ` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Chat,
    Advice,
}
