//! Error types for constraint evaluation.
//!
//! This module provides [`Summary`], the ordered, non-empty collection of
//! caller-defined errors produced by a failed evaluation, and [`SummaryError`]
//! for misuse of its constructors.

mod summary;

pub use summary::{Summary, SummaryError};
