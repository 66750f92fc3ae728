//! Analysis modes: the three fixed prompt variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{
    ATS_OPTIMIZATION_TEMPLATE, DETAILED_ANALYSIS_TEMPLATE, QUICK_SCAN_TEMPLATE,
};

/// Controls depth and focus of the requested analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    #[serde(alias = "Quick Scan")]
    QuickScan,
    #[serde(alias = "Detailed Analysis")]
    DetailedAnalysis,
    #[serde(alias = "ATS Optimization")]
    AtsOptimization,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::QuickScan,
        AnalysisMode::DetailedAnalysis,
        AnalysisMode::AtsOptimization,
    ];

    /// Label shown on the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::QuickScan => "Quick Scan",
            AnalysisMode::DetailedAnalysis => "Detailed Analysis",
            AnalysisMode::AtsOptimization => "ATS Optimization",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisMode::QuickScan => "quick_scan",
            AnalysisMode::DetailedAnalysis => "detailed_analysis",
            AnalysisMode::AtsOptimization => "ats_optimization",
        }
    }

    /// Label the model is told to print on its score line, as in
    /// `"<label>: XX/100"`. ATS Optimization differs from the other two.
    pub fn score_label(self) -> &'static str {
        match self {
            AnalysisMode::QuickScan | AnalysisMode::DetailedAnalysis => "ATS Score",
            AnalysisMode::AtsOptimization => "ATS Compatibility Score",
        }
    }

    pub(crate) fn template(self) -> &'static str {
        match self {
            AnalysisMode::QuickScan => QUICK_SCAN_TEMPLATE,
            AnalysisMode::DetailedAnalysis => DETAILED_ANALYSIS_TEMPLATE,
            AnalysisMode::AtsOptimization => ATS_OPTIMIZATION_TEMPLATE,
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    /// Accepts the snake_case identifier or the selector label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AnalysisMode::ALL
            .into_iter()
            .find(|m| {
                m.as_str().eq_ignore_ascii_case(wanted) || m.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                format!(
                    "Unknown analysis mode '{wanted}'. Expected one of: quick_scan, detailed_analysis, ats_optimization"
                )
            })
    }
}
