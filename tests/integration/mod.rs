//! Integration tests for container2compose
//!
//! This module contains integration tests that verify the inspect sources
//! and the overall container → Compose workflow.

pub mod common;
pub mod docker;
pub mod file;
pub mod nerdctl;
