//! Progress reporting with ETA estimation

use std::time::Instant;

/// Counts finished items and logs progress at a fixed interval
pub struct ProgressTracker {
    total: u64,
    processed: u64,
    start_time: Instant,
    label: String,
}

impl ProgressTracker {
    /// Creates a new progress tracker
    pub fn new(total: u64, label: &str) -> Self {
        Self {
            total,
            processed: 0,
            start_time: Instant::now(),
            label: label.to_string(),
        }
    }

    /// Number of items recorded so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Records one finished item, logging every `report_interval` items and on completion
    pub fn increment_and_report(&mut self, report_interval: u64) {
        self.processed += 1;
        let current = self.processed;
        if current % report_interval.max(1) == 0 || current == self.total {
            self.report(current);
        }
    }

    fn report(&self, current: u64) {
        let elapsed_secs = self.start_time.elapsed().as_secs_f64();

        if current < self.total {
            let percent = current as f64 / self.total as f64 * 100.0;
            let rate = current as f64 / elapsed_secs.max(f64::EPSILON);
            let remaining = (self.total - current) as f64 / rate;
            tracing::info!(
                "{} {}/{} ({:.1}%) - elapsed: {} - ETA: {}",
                self.label,
                current,
                self.total,
                percent,
                format_duration(elapsed_secs),
                format_duration(remaining),
            );
        } else {
            tracing::info!(
                "{} {}/{} (100.0%) - completed in {}",
                self.label,
                current,
                self.total,
                format_duration(elapsed_secs),
            );
        }
    }
}

/// Renders sub-minute spans with one decimal, longer ones as whole `h m s`
fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }

    let whole = secs.round() as u64;
    let (hours, mins, rest) = (whole / 3600, whole / 60 % 60, whole % 60);
    if hours == 0 {
        format!("{}m {}s", mins, rest)
    } else {
        format!("{}h {}m {}s", hours, mins, rest)
    }
}
