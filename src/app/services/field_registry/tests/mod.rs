//! Tests for the static field registry
