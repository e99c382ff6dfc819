// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! code-harbor REST API contract types and validation
//!
//! This crate defines the schema types and validation for the session REST
//! API. These types are shared between the REST client and any server or
//! mock implementations, so that the CLI never depends on wire details
//! directly.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
