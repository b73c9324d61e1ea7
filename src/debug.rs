//! Debugging helpers.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// The call stack at the point of capture, one rendered frame per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace {
    frames: Vec<String>,
}

impl StackTrace {
    /// Placeholder frame used when the platform can't capture backtraces.
    pub const UNAVAILABLE: &'static str = "<unavailable>";

    /// Capture the current stack, regardless of `RUST_BACKTRACE`.
    pub fn capture() -> Self {
        let backtrace = Backtrace::force_capture();
        match backtrace.status() {
            BacktraceStatus::Captured => Self::parse(&backtrace.to_string()),
            status => {
                tracing::debug!(?status, "stack trace unavailable");
                Self::unavailable()
            }
        }
    }

    fn unavailable() -> Self {
        Self {
            frames: vec![Self::UNAVAILABLE.to_string()],
        }
    }

    /// Keep the frame header lines (`  3: symbol`) and drop the `at file:line`
    /// lines that follow them.
    fn parse(rendered: &str) -> Self {
        let frames: Vec<String> = rendered
            .lines()
            .map(str::trim)
            .filter(|line| {
                line.split_once(':').is_some_and(|(number, _)| {
                    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
                })
            })
            .map(String::from)
            .collect();
        if frames.is_empty() {
            Self::unavailable()
        } else {
            Self { frames }
        }
    }

    /// Rendered frames, innermost first. Never empty.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "{frame}")?;
        }
        Ok(())
    }
}
