//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog data and filter pipeline into listing APIs.
//! - Keep CLI/presentation layers decoupled from stage functions.

pub mod catalog_service;
