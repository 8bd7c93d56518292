//! # xylopipe Core Library
//!
//! Retrieval, enrichment and feature extraction for glycoside-hydrolase (GH10/GH11)
//! xylanase sequences drawn from UniProtKB.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that the pure parts of the
//! pipeline can be tested without a network.
//!
//! - **[`core`]: The Foundation.** Stateless record models, column normalization, thermal
//!   classification, free-text optimum extraction, sequence descriptors and flat-file I/O.
//!
//! - **[`engine`]: The Remote Layer.** The `UniProtSource` seam and its HTTP client, the
//!   retry/fallback discipline of the record fetcher, the throttled worker pool used by the
//!   sequence backfiller and the detail annotator, configuration, errors and progress.
//!
//! - **[`workflows`]: The Public API.** End-to-end retrieval (fetch, normalize, annotate,
//!   classify) and feature extraction over a sequence file.

pub mod core;
pub mod engine;
pub mod workflows;
