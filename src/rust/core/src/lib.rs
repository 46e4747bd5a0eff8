// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Condition Core: measurement-evaluation engine for concrete condition assessment
// (carbonation depth and rebound hammer).
//

pub mod assessment_kernel;
pub mod config;
pub mod error;
pub mod formulas;
pub mod ingest;
pub mod science;
#[cfg(test)]
pub mod tests_assessment;

// Re-export core types
pub use assessment_kernel::{AssessmentKernel, BatchReport, ExportRow, ValidationEvent};
pub use config::AssessmentConfig;
pub use error::AssessmentError;
pub use science::carbonation::{CarbonationAssessor, CarbonationGrade, CarbonationReport, RemainingLife};
pub use science::statistics::{StatisticsEngine, StatisticsSummary};
pub use science::strength::{
    FormulaFamily, FormulaLine, StrengthEstimator, StrengthGrade, StrengthReport,
};
