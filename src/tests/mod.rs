//! Unit tests for the NewsCheck client SDK
//!
//! This module contains tests for the client, the error system, the
//! configuration layer, and the page flows.

pub mod confirm_mock_tests;
pub mod predict_mock_tests;
