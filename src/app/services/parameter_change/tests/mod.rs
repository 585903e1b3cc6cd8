//! Tests for calibration parameter names
