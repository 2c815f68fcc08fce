//! Logging helpers for formatted output.
//!
//! Small formatting utilities for run summaries: counts with thousands
//! separators, human-readable durations and rates, and a timer that logs the
//! start and completion of an operation.

use std::time::{Duration, Instant};

/// Formats a count with thousands separators (e.g., "1,234,567").
#[must_use]
pub fn format_count(count: u64) -> String {
    let raw = count.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, digit) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Formats a duration in human-readable form.
///
/// # Examples
///
/// ```
/// use parlife_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate with the given unit (e.g., "1,500 generations/s").
///
/// Rates below one per second are reported per minute instead.
#[must_use]
pub fn format_rate(count: u64, duration: Duration, unit: &str) -> String {
    let secs = duration.as_secs_f64();
    if secs <= f64::EPSILON {
        return format!("{} {unit}/s", format_count(count));
    }
    let per_sec = count as f64 / secs;
    if per_sec >= 1.0 {
        format!("{} {unit}/s", format_count(per_sec.round() as u64))
    } else {
        format!("{:.1} {unit}/min", per_sec * 60.0)
    }
}

/// Timer that logs when an operation starts and completes.
///
/// # Example
/// ```
/// use parlife_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Simulating generations");
///
/// // ... do work ...
///
/// timer.log_completion(10_000, "generations");
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Elapsed time since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64, unit: &str) {
        let duration = self.start_time.elapsed();
        log::info!(
            "{} completed: {} {unit} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration, unit)
        );
    }
}

#[cfg(test)]
#[allow(clippy::cast_precision_loss)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0s");
        assert_eq!(format_duration(Duration::from_secs(45)), "45s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m");
        assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1000, Duration::from_secs(1), "cells"), "1,000 cells/s");
        assert_eq!(format_rate(60, Duration::from_secs(60), "generations"), "1 generations/s");
        assert_eq!(format_rate(30, Duration::from_secs(60), "generations"), "30.0 generations/min");
        // Near-zero duration
        assert!(format_rate(1000, Duration::from_nanos(1), "cells").contains("cells/s"));
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("Test");
        timer.log_completion(1000, "items");
    }
}
