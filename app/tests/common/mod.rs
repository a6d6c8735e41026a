//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for Pinaculo command-line integration tests.

#![allow(dead_code)]

use app_lib::{calculate_report, execute, preview_report, AppConfig, NumerologyReport, OutputFormat};

/// Golden values for "Carlos Carpio", 06/05/1982, in table order.
pub const GOLDEN_TABLE: [(&str, u32); 24] = [
    ("A", 5),
    ("B", 6),
    ("C", 2),
    ("D", 22),
    ("E", 11),
    ("F", 8),
    ("G", 1),
    ("H", 7),
    ("I", 2),
    ("J", 11),
    ("K", 1),
    ("L", 4),
    ("M", 3),
    ("N", 3),
    ("O", 8),
    ("P", 3),
    ("Q", 4),
    ("R", 7),
    ("S", 11),
    ("T", 9),
    ("W", 9),
    ("X", 1),
    ("Y", 9),
    ("Z", 1),
];

/// Test harness wrapping the configuration the binary would build.
pub struct TestHarness {
    pub config: AppConfig,
}

impl TestHarness {
    /// Create a harness with an empty configuration.
    pub fn new() -> Self {
        TestHarness {
            config: AppConfig::default(),
        }
    }

    /// Create a harness for the example person.
    pub fn with_preview() -> Self {
        let mut harness = Self::new();
        harness.config.preview = true;
        harness
    }

    /// Create a harness for a given name and birth date.
    pub fn with_person(name: &str, date: &str) -> Self {
        let mut harness = Self::new();
        harness.config.name = Some(name.to_string());
        harness.config.date = Some(date.to_string());
        harness
    }

    /// Switch the output to JSON.
    pub fn json(mut self) -> Self {
        self.config.format = OutputFormat::Json;
        self
    }

    /// Run the command-line flow and return stdout or the error message.
    pub fn run(&self) -> Result<String, String> {
        execute(&self.config)
    }

    /// Run and parse the JSON output.
    pub fn run_json(&self) -> serde_json::Value {
        let output = self.run().expect("run failed");
        serde_json::from_str(&output).expect("output is not JSON")
    }

    /// Compute the report without rendering it, honoring `preview` like `execute`.
    pub fn report(&self) -> Result<NumerologyReport, String> {
        if self.config.preview {
            return preview_report();
        }
        calculate_report(
            self.config.name.as_deref().unwrap_or(""),
            self.config.date.as_deref().unwrap_or(""),
        )
    }
}
