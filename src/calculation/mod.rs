//! Calculation logic for the Recruiter Ranking Engine.
//!
//! This module contains the productivity index calculation, the global
//! ranking built from it, and the aggregation of raw requisitions into the
//! per-recruiter totals both operate on.

mod aggregation;
mod global_ranking;
mod productivity_index;

pub use aggregation::aggregate_requisitions;
pub use global_ranking::{
    GlobalRankingResult, build_ranking, calculate_global_ranking, compare_ranked,
};
pub use productivity_index::{
    DEGENERATE_DAYS_MULTIPLIER, ProductivityIndexResult, RATIO_SCALE, SCORE_DECIMAL_PLACES,
    calculate_productivity_index, compute_score, score_rule,
};
