//! # Engine Module
//!
//! Everything that talks to the remote database, and the machinery that keeps those
//! conversations polite and recoverable.
//!
//! ## Architecture
//!
//! - **Source** ([`source`], [`client`]) - the [`source::UniProtSource`] seam and its blocking
//!   HTTP implementation
//! - **Record Fetcher** ([`fetcher`]) - search with bounded retries and a one-shot fallback query
//! - **Worker Pool** ([`throttle`]) - bounded rayon pool behind a shared fixed-interval throttle
//! - **Sequence Backfiller** ([`backfill`]) - per-accession sequence retrieval, non-fatal per record
//! - **Detail Annotator** ([`annotator`]) - per-accession optimum temperature and pH
//! - **Configuration** ([`config`]), **Errors** ([`error`]), **Progress** ([`progress`])

pub mod annotator;
pub mod backfill;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod progress;
pub mod source;
pub mod throttle;

#[cfg(test)]
pub(crate) mod testing;
