//! Legacy Bridge
//!
//! Conversion of fixed-width legacy records (mainframe/SAP extracts)
//! into modern, AI-ready JSON schemas.
//!
//! This crate provides the core implementation for the
//! `legacy-bridge` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install legacy-bridge
//! legacy-bridge convert --sample --summary
//! ```
//!
//! Library callers build a [`bridge::Bridge`] from a validated
//! [`decoder::RecordLayout`] and a [`mapper::Provenance`] and feed it any
//! ordered sequence of raw lines.

pub mod bridge;
pub mod commands;
pub mod context;
pub mod decoder;
pub mod mapper;
pub mod output;
pub mod source;
pub mod utils;
