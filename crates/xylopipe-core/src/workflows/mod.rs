//! # Workflows Module
//!
//! Top-level entry points. Each workflow strings together the core algorithms and the
//! engine's remote access, reports progress and leaves file layout to the caller.
//!
//! - **Retrieval Workflow** ([`retrieve`]) - search, sequence backfill when needed,
//!   normalization, optimum annotation, thermal classification and output writing.
//! - **Feature Workflow** ([`features`]) - sequence file in, feature table out.

pub mod features;
pub mod retrieve;
