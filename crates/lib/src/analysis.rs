//! # Analysis Response Parsing
//!
//! The assistant reports document analyses as plain text with three headed
//! sections: SYNOPSIS, INSIGHTS AND ANOMALIES, and FOLLOW-UP ACTIONS. This
//! module splits such a response into its named fields for downstream
//! classification and rendering.

use crate::errors::AnalysisError;
use crate::types::AnalysisText;
use tracing::debug;

const SYNOPSIS_HEADER: &str = "SYNOPSIS";
const INSIGHTS_HEADER: &str = "INSIGHTS";
const FOLLOWUP_HEADER: &str = "FOLLOW-UP";

/// Parses a raw assistant analysis response into its sections.
///
/// Blocks are separated by blank lines. A block starting with a known
/// header populates the matching field, header line included; a repeated
/// header replaces the earlier block. Section order in the response does
/// not matter.
///
/// Returns [`AnalysisError::EmptyContent`] when no section is recognized.
pub fn parse_analysis(raw: &str) -> Result<AnalysisText, AnalysisError> {
    let mut analysis = AnalysisText::default();

    for block in raw.split("\n\n") {
        let block = block.trim();
        if block.starts_with(SYNOPSIS_HEADER) {
            analysis.synopsis = block.to_string();
        } else if block.starts_with(INSIGHTS_HEADER) {
            analysis.insights_anomalies = block.to_string();
        } else if block.starts_with(FOLLOWUP_HEADER) {
            analysis.followup_actions = block.to_string();
        } else if !block.is_empty() {
            debug!("Skipping unrecognized analysis block ({} chars)", block.len());
        }
    }

    if analysis.synopsis.is_empty()
        && analysis.insights_anomalies.is_empty()
        && analysis.followup_actions.is_empty()
    {
        return Err(AnalysisError::EmptyContent);
    }

    Ok(analysis)
}
