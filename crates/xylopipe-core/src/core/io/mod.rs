//! Flat-file input/output for the pipeline.
//!
//! Remote search responses arrive as TSV ([`tsv`]); stage outputs are written as a
//! FASTA-style sequence file ([`fasta`]) and CSV tables ([`table`]). Writers share the
//! trait-based interface in [`traits`], which stages each file and renames it into place.

pub mod fasta;
pub mod table;
pub mod traits;
pub mod tsv;
