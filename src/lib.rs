//! Recruiter Ranking Engine
//!
//! This crate computes a productivity index for each recruiter from the
//! number of requisitions they closed and the average days closing took, and
//! ranks recruiters by it with a deterministic tie-break policy.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
