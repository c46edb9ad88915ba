//! Common component tests.
//!
//! This module contains unit tests for the fundamental data structures
//! shared across the substrate.
