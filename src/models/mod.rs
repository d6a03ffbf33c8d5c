//! Core data models for the Recruiter Ranking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod ranked_recruiter;
mod ranking_report;
mod recruiter_aggregate;
mod requisition;

pub use ranked_recruiter::{RankedRecruiter, ScoreRule};
pub use ranking_report::{AuditStep, AuditTrace, AuditWarning, RankingReport};
pub use recruiter_aggregate::RecruiterAggregate;
pub use requisition::Requisition;
