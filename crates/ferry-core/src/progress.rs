//! Throughput smoothing, ETA derivation and display formatting

use std::collections::VecDeque;
use std::time::Instant;

use crate::copy::CopyProgress;

/// Smooths throughput over a sliding window of samples so the speed and
/// ETA readouts do not jitter with every chunk.
pub struct ProgressTracker {
    start_time: Instant,
    last_sample: Instant,
    last_bytes: u64,
    speed_history: VecDeque<f64>,
    max_samples: usize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            last_sample: Instant::now(),
            last_bytes: 0,
            speed_history: VecDeque::with_capacity(10),
            max_samples: 10,
        }
    }

    /// Feed a snapshot and get back `(smoothed_speed_bps, eta_seconds)`.
    ///
    /// A new speed sample is only taken when at least 100ms have passed
    /// since the previous one; in between, the smoothed value holds.
    pub fn sample(&mut self, progress: &CopyProgress) -> (f64, Option<f64>) {
        let now = Instant::now();
        let since_last = now.duration_since(self.last_sample).as_secs_f64();

        if since_last > 0.1 {
            let delta = progress.bytes_copied.saturating_sub(self.last_bytes) as f64;
            self.speed_history.push_back(delta / since_last);
            if self.speed_history.len() > self.max_samples {
                self.speed_history.pop_front();
            }
            self.last_sample = now;
            self.last_bytes = progress.bytes_copied;
        }

        let speed = if self.speed_history.is_empty() {
            // No samples yet, fall back to the overall average
            let total_elapsed = now.duration_since(self.start_time).as_secs_f64();
            if total_elapsed > 0.0 {
                progress.bytes_copied as f64 / total_elapsed
            } else {
                0.0
            }
        } else {
            self.speed_history.iter().sum::<f64>() / self.speed_history.len() as f64
        };

        let eta = if speed > 0.0 && progress.bytes_copied < progress.total_bytes {
            Some(progress.remaining_bytes() as f64 / speed)
        } else {
            None
        };

        (speed, eta)
    }

    pub fn reset(&mut self) {
        self.start_time = Instant::now();
        self.last_sample = Instant::now();
        self.last_bytes = 0;
        self.speed_history.clear();
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a byte count as a human-readable size
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes < KIB {
        format!("{:.0} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes / KIB)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes / MIB)
    } else {
        format!("{:.1} GB", bytes / GIB)
    }
}

/// Format bytes per second as a human-readable speed
pub fn format_speed(bps: f64) -> String {
    if bps < 1024.0 {
        format!("{:.0} B/s", bps)
    } else if bps < 1024.0 * 1024.0 {
        format!("{:.1} KB/s", bps / 1024.0)
    } else if bps < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB/s", bps / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB/s", bps / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Format a duration in seconds as a human-readable string
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let secs = total_seconds % 60;
        if secs > 0 {
            format!("{}m {}s", minutes, secs)
        } else {
            format!("{}m", minutes)
        }
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn format_speed_units() {
        assert_eq!(format_speed(100.0), "100 B/s");
        assert_eq!(format_speed(1536.0), "1.5 KB/s");
        assert_eq!(format_speed(5.0 * 1024.0 * 1024.0), "5.0 MB/s");
    }

    #[test]
    fn format_duration_ranges() {
        assert_eq!(format_duration(5.0), "5s");
        assert_eq!(format_duration(65.0), "1m 5s");
        assert_eq!(format_duration(120.0), "2m");
        assert_eq!(format_duration(3660.0), "1h 1m");
        assert_eq!(format_duration(7200.0), "2h");
        assert_eq!(format_duration(-1.0), "0s");
    }

    #[test]
    fn tracker_eta_none_when_complete() {
        let mut tracker = ProgressTracker::new();
        let progress = CopyProgress {
            bytes_copied: 100,
            total_bytes: 100,
            elapsed: Duration::from_secs(1),
        };
        let (_, eta) = tracker.sample(&progress);
        assert_eq!(eta, None);
    }

    #[test]
    fn tracker_reports_progress_speed() {
        let mut tracker = ProgressTracker::new();
        std::thread::sleep(Duration::from_millis(20));
        let progress = CopyProgress {
            bytes_copied: 1000,
            total_bytes: 2000,
            elapsed: Duration::from_millis(20),
        };
        let (speed, eta) = tracker.sample(&progress);
        assert!(speed > 0.0);
        assert!(eta.is_some());
    }
}
