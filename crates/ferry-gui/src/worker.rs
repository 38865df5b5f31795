//! Background worker for file copy operations
//!
//! The UI never performs file I/O itself: it posts a [`Command`] to a
//! long-lived worker thread and drains [`Event`]s each frame. Progress
//! flows one-directionally as owned snapshots, so no locking is needed.

use crossbeam_channel::{unbounded, Receiver, Sender};
use ferry_core::{copy_file, CopyOptions, CopyRequest, ProgressTracker};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Progress messages are rate-limited to this interval so a fast copy
/// does not saturate the UI channel. The final snapshot is always sent.
const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Command sent from the UI to the worker
#[derive(Debug)]
pub enum Command {
    Copy {
        request: CopyRequest,
        options: CopyOptions,
    },
}

/// Progress update posted back to the UI
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub bytes_copied: u64,
    pub total_bytes: u64,
    /// Completion fraction in 0..=1 (1.0 for an empty source)
    pub fraction: f32,
    /// Smoothed throughput in bytes per second
    pub speed_bps: f64,
    /// Estimated seconds remaining, when throughput is known
    pub eta_seconds: Option<f64>,
}

/// Outcome of a finished copy
#[derive(Debug, Clone)]
pub enum CopyStatus {
    Success { destination: PathBuf },
    Error(String),
}

/// Event posted from the worker to the UI
#[derive(Debug, Clone)]
pub enum Event {
    Progress(ProgressUpdate),
    Finished(CopyStatus),
}

/// Handle to the background worker thread
pub struct Worker {
    sender: Sender<Command>,
    receiver: Receiver<Event>,
}

impl Worker {
    /// Spawn the worker thread and return its handle
    pub fn spawn() -> Self {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();

        thread::spawn(move || worker_thread(cmd_rx, evt_tx));

        Self {
            sender: cmd_tx,
            receiver: evt_rx,
        }
    }

    /// Send a command to the worker
    pub fn send(&self, command: Command) -> Result<(), crossbeam_channel::SendError<Command>> {
        self.sender.send(command)
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Receive an event, waiting up to `timeout`
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

fn worker_thread(commands: Receiver<Command>, events: Sender<Event>) {
    info!("Worker thread started");

    // Commands are processed one at a time, so at most one copy is ever
    // in flight.
    while let Ok(command) = commands.recv() {
        match command {
            Command::Copy { request, options } => run_copy(&request, &options, &events),
        }
    }

    info!("Worker thread exiting");
}

fn run_copy(request: &CopyRequest, options: &CopyOptions, events: &Sender<Event>) {
    info!(
        source = %request.source.display(),
        destination = %request.destination_dir.display(),
        "Starting copy"
    );

    let mut tracker = ProgressTracker::new();
    let mut last_sent: Option<Instant> = None;

    let result = copy_file(request, options, |progress| {
        let (speed_bps, eta_seconds) = tracker.sample(progress);

        let is_final = progress.bytes_copied >= progress.total_bytes;
        let due = last_sent.map_or(true, |t| t.elapsed() >= UPDATE_INTERVAL);
        if is_final || due {
            let _ = events.send(Event::Progress(ProgressUpdate {
                bytes_copied: progress.bytes_copied,
                total_bytes: progress.total_bytes,
                fraction: progress.fraction(),
                speed_bps,
                eta_seconds,
            }));
            last_sent = Some(Instant::now());
        }
    });

    match result {
        Ok(outcome) => {
            info!(
                destination = %outcome.destination.display(),
                bytes = outcome.bytes_copied,
                "Copy finished"
            );
            let _ = events.send(Event::Finished(CopyStatus::Success {
                destination: outcome.destination,
            }));
        }
        Err(e) => {
            error!(error = %e, "Copy failed");
            let _ = events.send(Event::Finished(CopyStatus::Error(e.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_testing::assertions::assert_files_equal;
    use ferry_testing::fixtures::create_patterned_file;
    use ferry_testing::TestDir;

    const RECV_TIMEOUT: Duration = Duration::from_secs(10);

    fn drain_until_finished(worker: &Worker) -> (Vec<ProgressUpdate>, CopyStatus) {
        let mut updates = Vec::new();
        loop {
            match worker.recv_timeout(RECV_TIMEOUT) {
                Some(Event::Progress(update)) => updates.push(update),
                Some(Event::Finished(status)) => return (updates, status),
                None => panic!("Worker produced no event within timeout"),
            }
        }
    }

    #[test]
    fn worker_copies_and_reports_success() {
        let test_dir = TestDir::new().unwrap();
        let source = create_patterned_file(&test_dir, "source.bin", 200_000).unwrap();
        let dest_dir = test_dir.create_dir("dest").unwrap();

        let worker = Worker::spawn();
        worker
            .send(Command::Copy {
                request: CopyRequest::new(&source, &dest_dir),
                options: CopyOptions::default(),
            })
            .unwrap();

        let (updates, status) = drain_until_finished(&worker);

        assert!(!updates.is_empty());
        for pair in updates.windows(2) {
            assert!(pair[1].bytes_copied >= pair[0].bytes_copied);
        }
        assert_eq!(updates.last().unwrap().fraction, 1.0);

        match status {
            CopyStatus::Success { destination } => {
                assert_files_equal(&source, &destination).unwrap();
            }
            CopyStatus::Error(e) => panic!("Copy failed: {}", e),
        }
    }

    #[test]
    fn worker_reports_missing_source_as_error() {
        let test_dir = TestDir::new().unwrap();
        let dest_dir = test_dir.create_dir("dest").unwrap();

        let worker = Worker::spawn();
        worker
            .send(Command::Copy {
                request: CopyRequest::new(test_dir.path().join("missing.txt"), &dest_dir),
                options: CopyOptions::default(),
            })
            .unwrap();

        let (_, status) = drain_until_finished(&worker);
        match status {
            CopyStatus::Error(message) => {
                assert!(message.contains("not found"), "Unexpected message: {}", message);
            }
            CopyStatus::Success { .. } => panic!("Expected failure for missing source"),
        }
        assert!(!dest_dir.join("missing.txt").exists());
    }

    #[test]
    fn worker_serializes_queued_commands() {
        let test_dir = TestDir::new().unwrap();
        let first = create_patterned_file(&test_dir, "first.bin", 50_000).unwrap();
        let second = create_patterned_file(&test_dir, "second.bin", 50_000).unwrap();
        let dest_dir = test_dir.create_dir("dest").unwrap();

        let worker = Worker::spawn();
        for source in [&first, &second] {
            worker
                .send(Command::Copy {
                    request: CopyRequest::new(source, &dest_dir),
                    options: CopyOptions::default(),
                })
                .unwrap();
        }

        // The first copy finishes completely before the second reports
        let (_, first_status) = drain_until_finished(&worker);
        assert!(matches!(first_status, CopyStatus::Success { .. }));
        let (_, second_status) = drain_until_finished(&worker);
        assert!(matches!(second_status, CopyStatus::Success { .. }));

        assert_files_equal(&first, &dest_dir.join("first.bin")).unwrap();
        assert_files_equal(&second, &dest_dir.join("second.bin")).unwrap();
    }

    #[test]
    fn worker_handles_empty_source() {
        let test_dir = TestDir::new().unwrap();
        let source = test_dir.create_file("empty.txt", b"").unwrap();
        let dest_dir = test_dir.create_dir("dest").unwrap();

        let worker = Worker::spawn();
        worker
            .send(Command::Copy {
                request: CopyRequest::new(&source, &dest_dir),
                options: CopyOptions::default(),
            })
            .unwrap();

        let (updates, status) = drain_until_finished(&worker);
        assert!(matches!(status, CopyStatus::Success { .. }));
        // The final snapshot is always delivered, even with nothing to copy
        assert_eq!(updates.last().unwrap().fraction, 1.0);
        assert_eq!(updates.last().unwrap().total_bytes, 0);
    }
}
