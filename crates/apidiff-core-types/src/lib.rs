//! Core types shared across apidiff facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the structured logging macros, so that every crate in
//! the workspace emits events with the same field keys.

pub mod schema;
