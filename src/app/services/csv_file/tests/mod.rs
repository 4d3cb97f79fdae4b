//! Tests for the CSV file wrapper and validation state
