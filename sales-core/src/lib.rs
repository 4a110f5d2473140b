//! Core types and CSV ingestion for paper sales records.

pub mod date_range;
pub mod error;
pub mod record;
pub mod table;
