//! Tests for job service
