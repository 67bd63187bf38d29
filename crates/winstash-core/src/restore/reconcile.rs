//! Matching a freshly spawned process to the window it opens.
//!
//! The backend has no window-created notification, so the window list is
//! polled until its size changes and the new ids are diffed against the
//! snapshot taken before the spawn.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::backend::{WindowBackend, WindowId, WindowRecord};

/// How a new window was singled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Exactly one id appeared.
    Unique,
    /// Several appeared; one belongs to the spawned pid.
    Pid,
    /// Several appeared and none belongs to the spawned pid; lowest id taken.
    Arbitrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMatch {
    pub id: WindowId,
    pub strategy: MatchStrategy,
}

/// Pick the new window among `after`, given the ids present `before`.
///
/// Returns `None` when no id is new (a window closed while another opened,
/// or nothing changed).
pub fn pick_new_window(
    before: &HashSet<WindowId>,
    after: &[WindowRecord],
    spawned_pid: Option<u32>,
) -> Option<WindowMatch> {
    let mut fresh: Vec<&WindowRecord> = after.iter().filter(|w| !before.contains(&w.id)).collect();
    fresh.sort_by_key(|w| w.id);

    match fresh.as_slice() {
        [] => None,
        [only] => Some(WindowMatch {
            id: only.id,
            strategy: MatchStrategy::Unique,
        }),
        [lowest, ..] => {
            if let Some(pid) = spawned_pid
                && let Some(owned) = fresh.iter().find(|w| w.pid == Some(pid))
            {
                return Some(WindowMatch {
                    id: owned.id,
                    strategy: MatchStrategy::Pid,
                });
            }
            Some(WindowMatch {
                id: lowest.id,
                strategy: MatchStrategy::Arbitrary,
            })
        }
    }
}

/// Poll until a new window appears or `timeout` elapses.
///
/// List failures while polling are logged and retried.
pub fn wait_for_new_window(
    backend: &dyn WindowBackend,
    before: &[WindowRecord],
    spawned_pid: Option<u32>,
    timeout: Duration,
    poll_interval: Duration,
) -> Option<WindowMatch> {
    let before_ids: HashSet<WindowId> = before.iter().map(|w| w.id).collect();
    let start = Instant::now();

    loop {
        match backend.list_windows() {
            Ok(after) if after.len() != before.len() => {
                if let Some(found) = pick_new_window(&before_ids, &after, spawned_pid) {
                    if found.strategy == MatchStrategy::Arbitrary {
                        warn!(
                            event = "core.restore.ambiguous_match",
                            window_id = found.id,
                            pid = ?spawned_pid
                        );
                    }
                    debug!(
                        event = "core.restore.window_matched",
                        window_id = found.id,
                        strategy = ?found.strategy,
                        elapsed_ms = start.elapsed().as_millis() as u64
                    );
                    return Some(found);
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(event = "core.restore.poll_list_failed", error = %e);
            }
        }

        if start.elapsed() >= timeout {
            return None;
        }

        std::thread::sleep(poll_interval);
    }
}
