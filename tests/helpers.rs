//! Test helpers for faktory integration tests.
//!
//! This module provides the in-memory mock backend and common test
//! utilities shared across the integration suite.

#[path = "helpers/mock_cms.rs"]
pub mod mock_cms;
