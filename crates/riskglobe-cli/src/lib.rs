//! riskglobe-cli
//! =============
//!
//! Command-line interface for the `riskglobe-core` globe model.
//!
//! This crate primarily provides a binary (`riskglobe-cli`). The small
//! library target only exists so that the crate documentation renders this
//! overview. See the README for full usage examples.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! riskglobe-cli --help
//! riskglobe-cli stats
//! riskglobe-cli country BR
//! riskglobe-cli render --drag=-120,40 --zoom 1.5 -o globe.svg
//! ```
//!
//! For programmatic access to the model, projection and scene, use the
//! [`riskglobe-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
