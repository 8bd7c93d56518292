//! # Core Module
//!
//! Stateless building blocks of the pipeline. Nothing in here performs network access;
//! every function is a deterministic transformation of its inputs.
//!
//! - **Records** ([`models`]) - raw, enriched and classified records, sequence entries and feature vectors
//! - **Normalization** ([`normalize`]) - explicit column mapping, keep-first deduplication, sequence filtering
//! - **Classification** ([`classify`]) - optimum temperature to thermal class
//! - **Annotation** ([`annotation`]) - optimum temperature / pH extraction from free text
//! - **Descriptors** ([`properties`]) - composition, physicochemical scalars and motif counts
//! - **File I/O** ([`io`]) - TSV responses, FASTA-style sequence files and CSV tables

pub mod annotation;
pub mod classify;
pub mod io;
pub mod models;
pub mod normalize;
pub mod properties;
