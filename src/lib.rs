//! `mailcase` — an email evidence auditor.
//!
//! This crate provides the core library for loading an email message,
//! decomposing its body into raw and decoded payload artifacts, and
//! persisting everything into a self-contained case workspace together
//! with a full audit log.

pub mod case;
pub mod config;
pub mod decompose;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
