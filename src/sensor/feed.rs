//! Gesture sensor backed by a line feed written by an external pose detector.
//!
//! The detector writes one line per camera frame to `pose-feed-<index>` in
//! the data directory (usually a FIFO). A reader thread parses lines and
//! hands them to the game thread over a channel; `poll` drains whatever has
//! arrived and keeps only the newest state.
//!
//! Opening a FIFO blocks until the detector connects and cannot be
//! cancelled, so each feed gets one reader for the lifetime of the sensor.
//! `release` only detaches from it and the next `acquire` picks it up again.

use super::tracker::{PoseReading, PoseTracker};
use super::{GestureSample, GestureSensor};
use crate::core::POSE_FEED_PREFIX;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError, TrySendError};
use std::thread;

/// Readings buffered per feed. Lines arriving while the mailbox is full are
/// dropped; only the newest state matters.
const FEED_BACKLOG: usize = 64;

/// How a drain of the mailbox ended.
enum Drain {
    /// Some readings arrived. A hang-up right after them is reported by the
    /// next drain.
    Received,
    Idle,
    /// The reader hung up after delivering everything it had.
    Closed,
}

/// Pass every queued reading to `on_reading`.
fn drain(rx: &Receiver<PoseReading>, mut on_reading: impl FnMut(PoseReading)) -> Drain {
    let mut received = false;
    loop {
        match rx.try_recv() {
            Ok(reading) => {
                on_reading(reading);
                received = true;
            }
            Err(_) if received => return Drain::Received,
            Err(TryRecvError::Empty) => return Drain::Idle,
            Err(TryRecvError::Disconnected) => return Drain::Closed,
        }
    }
}

struct FeedLink {
    index: u32,
    tracker: PoseTracker,
}

pub struct FeedSensor {
    feed_dir: PathBuf,
    world_height: f64,
    /// Live reader per feed index, kept across acquire/release cycles.
    readers: HashMap<u32, Receiver<PoseReading>>,
    link: Option<FeedLink>,
    readers_started: usize,
}

impl FeedSensor {
    pub fn new(feed_dir: impl Into<PathBuf>, world_height: f64) -> Self {
        Self {
            feed_dir: feed_dir.into(),
            world_height,
            readers: HashMap::new(),
            link: None,
            readers_started: 0,
        }
    }

    pub fn feed_path(&self, index: u32) -> PathBuf {
        self.feed_dir.join(format!("{}{}", POSE_FEED_PREFIX, index))
    }

    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    /// Reader threads spawned so far.
    pub fn readers_started(&self) -> usize {
        self.readers_started
    }
}

fn spawn_reader(path: &Path) -> io::Result<Receiver<PoseReading>> {
    let (tx, rx) = mpsc::sync_channel(FEED_BACKLOG);
    let path = path.to_path_buf();

    thread::Builder::new()
        .name("pose-feed".to_string())
        .spawn(move || {
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("Pose feed {} could not be opened: {}", path.display(), e);
                    return;
                }
            };
            for line in BufReader::new(file).lines() {
                let Ok(line) = line else { break };
                match PoseReading::parse(&line) {
                    Some(reading) => match tx.try_send(reading) {
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Disconnected(_)) => break,
                    },
                    None => log::debug!("Skipping malformed pose line: {:?}", line),
                }
            }
            log::debug!("Pose feed {} reached end of stream", path.display());
        })?;

    Ok(rx)
}

impl GestureSensor for FeedSensor {
    fn acquire(&mut self, index: u32) -> io::Result<()> {
        self.release();

        let path = self.feed_path(index);
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no pose feed at {}", path.display()),
            ));
        }

        // Readings queued while detached are stale. A reader whose feed has
        // closed in the meantime is replaced.
        if let Some(rx) = self.readers.get(&index) {
            if let Drain::Closed = drain(rx, |_| {}) {
                self.readers.remove(&index);
            }
        }
        if !self.readers.contains_key(&index) {
            let rx = spawn_reader(&path)?;
            self.readers.insert(index, rx);
            self.readers_started += 1;
        }

        self.link = Some(FeedLink {
            index,
            tracker: PoseTracker::new(self.world_height),
        });
        log::info!("Attached to pose feed {}", path.display());
        Ok(())
    }

    fn poll(&mut self) -> Option<GestureSample> {
        let link = self.link.as_mut()?;
        let Some(rx) = self.readers.get(&link.index) else {
            self.link = None;
            return None;
        };

        match drain(rx, |reading| link.tracker.observe(reading)) {
            Drain::Received => {}
            Drain::Idle => link.tracker.idle_tick(),
            Drain::Closed => {
                log::warn!("Pose feed closed, falling back to jump control");
                let index = link.index;
                self.readers.remove(&index);
                self.link = None;
                return None;
            }
        }

        Some(link.tracker.sample())
    }

    fn release(&mut self) {
        if self.link.take().is_some() {
            log::info!("Released pose feed");
        }
    }
}
