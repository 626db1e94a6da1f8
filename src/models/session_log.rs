//! Writing-session log: one record per editing run, with the idle pauses taken
//! during it.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRecord {
    pub started_at: u64,
    pub secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub started_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<u64>,
    pub start_words: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_words: Option<usize>,
    #[serde(default)]
    pub pauses: Vec<PauseRecord>,
}

impl SessionRecord {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn paused_secs(&self) -> u64 {
        self.pauses.iter().map(|p| p.secs).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseChange {
    None,
    Started,
    Ended(Duration),
}

/// In-memory side of the log: the open pause, if any, and when the running session began.
#[derive(Debug, Clone, Default)]
pub struct PauseTracker {
    paused_since: Option<(Instant, u64)>,
    session_start: Option<Instant>,
}

impl PauseTracker {
    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    pub fn session_start(&self) -> Option<Instant> {
        self.session_start
    }

    pub fn begin_session(&mut self, now: Instant) {
        self.session_start = Some(now);
        self.paused_since = None;
    }

    /// Opens a pause once idle time reaches `threshold`; closes it when a key arrives.
    /// The pause is taken to have started at `last_key`.
    pub fn update(
        &mut self,
        now: Instant,
        last_key: Instant,
        key_just_pressed: bool,
        threshold: Duration,
        record: &mut SessionRecord,
    ) -> PauseChange {
        if key_just_pressed {
            let Some((since, unix_start)) = self.paused_since.take() else {
                return PauseChange::None;
            };
            let length = now.saturating_duration_since(since);
            record.pauses.push(PauseRecord {
                started_at: unix_start,
                secs: length.as_secs(),
            });
            return PauseChange::Ended(length);
        }

        if self.paused_since.is_some() {
            return PauseChange::None;
        }
        let idle = now.saturating_duration_since(last_key);
        if idle < threshold {
            return PauseChange::None;
        }
        let unix_start = unix_now().saturating_sub(idle.as_secs());
        self.paused_since = Some((last_key, unix_start));
        PauseChange::Started
    }

    /// A pause still open when the session ends lasts until `now`.
    pub fn finish(&mut self, now: Instant, record: &mut SessionRecord) {
        if let Some((since, unix_start)) = self.paused_since.take() {
            record.pauses.push(PauseRecord {
                started_at: unix_start,
                secs: now.saturating_duration_since(since).as_secs(),
            });
        }
    }

    /// Active writing time: elapsed since the session began, minus recorded and open pauses.
    pub fn active_time(&self, now: Instant, record: &SessionRecord) -> Duration {
        let Some(start) = self.session_start else {
            return Duration::ZERO;
        };
        let mut paused = Duration::from_secs(record.paused_secs());
        if let Some((since, _)) = self.paused_since {
            paused += now.saturating_duration_since(since);
        }
        now.saturating_duration_since(start).saturating_sub(paused)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/session_log.rs"]
mod tests;
