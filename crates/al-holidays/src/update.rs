//! Remote catalog updates.

use std::sync::Arc;

use al_core::errors::Result;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::catalog::HolidayCatalog;
use crate::clock::{Clock, SystemClock};
use crate::resolver::HolidayResolver;
use crate::store::{CatalogStore, UpdateMeta};

/// Minimum interval between remote checks.
pub const CHECK_INTERVAL_DAYS: i64 = 7;

/// Fetches catalog text from a remote source.
///
/// The HTTP transport lives outside this crate. Implementations are
/// expected to issue a GET for the given URL with
/// `Accept: application/json` and to report a non-2xx status or an empty
/// body as [`Error::Fetch`](al_core::Error::Fetch).
pub trait CatalogFetcher: Send + Sync {
    /// Fetch the raw catalog body from `url`.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Outcome of an update attempt.
///
/// A closed set of results: the update path reports failures through
/// [`UpdateOutcome::Error`] and never propagates an error or panics
/// across this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A newer catalog was fetched and persisted.
    Success {
        /// Version of the catalog now persisted.
        version: String,
    },
    /// Nothing to do: the interval has not elapsed, or the remote
    /// version is not newer than the current one.
    NotNeeded {
        /// Human-readable reason.
        reason: String,
    },
    /// The check failed; previously persisted state is untouched.
    Error {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Last-check bookkeeping, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    /// Instant of the last successful remote check, if any.
    pub last_checked_at: Option<DateTime<Utc>>,
    /// Version of the persisted catalog, if any.
    pub version: Option<String>,
}

/// Decides when to fetch a new catalog and persists the result.
///
/// Fetch and file IO block, so calls belong off any interactive thread;
/// they never touch the resolver's in-memory catalog except through
/// [`HolidayResolver::invalidate`] after a successful persist.
pub struct UpdateManager {
    store: CatalogStore,
    fetcher: Box<dyn CatalogFetcher>,
    clock: Arc<dyn Clock>,
    resolver: Option<Arc<HolidayResolver>>,
}

impl UpdateManager {
    /// Manager over `store`, fetching with `fetcher`.
    pub fn new(store: CatalogStore, fetcher: Box<dyn CatalogFetcher>) -> Self {
        UpdateManager {
            store,
            fetcher,
            clock: Arc::new(SystemClock),
            resolver: None,
        }
    }

    /// Invalidate `resolver` after each successful update.
    pub fn with_resolver(mut self, resolver: Arc<HolidayResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch and persist a new catalog if the check interval has elapsed
    /// and the remote version is newer.
    ///
    /// A completed check stamps the last-checked time even when the
    /// version is unchanged, so the next check waits a full interval. A
    /// failed fetch or parse does not stamp it; the next call tries
    /// again.
    pub fn check_and_update_if_needed(&self, url: &str) -> UpdateOutcome {
        let meta = match self.store.load_meta() {
            Ok(meta) => meta,
            Err(e) => {
                warn!(error = %e, "update metadata unreadable, treating as never checked");
                UpdateMeta::default()
            }
        };
        let now = self.clock.now();
        if meta.last_checked_at > 0 {
            let elapsed = now.timestamp() - meta.last_checked_at;
            if elapsed < Duration::days(CHECK_INTERVAL_DAYS).num_seconds() {
                debug!(elapsed_seconds = elapsed, "interval not elapsed, skipping check");
                return UpdateOutcome::NotNeeded {
                    reason: "checked recently".to_string(),
                };
            }
        }
        self.fetch_and_apply(url, &meta, now, false)
    }

    /// Fetch and persist unconditionally, bypassing both the interval
    /// gate and the version comparison.
    pub fn force_update(&self, url: &str) -> UpdateOutcome {
        let meta = self.store.load_meta().unwrap_or_default();
        let now = self.clock.now();
        self.fetch_and_apply(url, &meta, now, true)
    }

    /// Return the last check time and the persisted catalog version.
    pub fn last_update_info(&self) -> UpdateInfo {
        let meta = self.store.load_meta().unwrap_or_default();
        UpdateInfo {
            last_checked_at: (meta.last_checked_at > 0)
                .then(|| DateTime::from_timestamp(meta.last_checked_at, 0))
                .flatten(),
            version: (!meta.version.is_empty()).then(|| meta.version.clone()),
        }
    }

    fn fetch_and_apply(
        &self,
        url: &str,
        meta: &UpdateMeta,
        now: DateTime<Utc>,
        force: bool,
    ) -> UpdateOutcome {
        let raw = match self.fetcher.fetch(url) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                return UpdateOutcome::Error {
                    reason: e.to_string(),
                };
            }
        };
        let remote = match HolidayCatalog::from_json(&raw) {
            Ok(remote) => remote,
            Err(e) => {
                warn!(error = %e, "remote catalog unparseable, keeping current");
                return UpdateOutcome::Error {
                    reason: e.to_string(),
                };
            }
        };
        if !force && remote.version <= meta.version {
            // Not newer: stamp the check time, keep the current catalog
            let stamped = UpdateMeta {
                last_checked_at: now.timestamp(),
                ..meta.clone()
            };
            if let Err(e) = self.store.save_meta(&stamped) {
                return UpdateOutcome::Error {
                    reason: e.to_string(),
                };
            }
            debug!(remote = %remote.version, current = %meta.version, "remote catalog not newer");
            return UpdateOutcome::NotNeeded {
                reason: "already up to date".to_string(),
            };
        }
        // Persist the raw bytes (parse already validated them) so
        // unknown fields survive for future readers
        if let Err(e) = self.store.save_catalog(&raw) {
            return UpdateOutcome::Error {
                reason: e.to_string(),
            };
        }
        let stamped = UpdateMeta {
            last_checked_at: now.timestamp(),
            version: remote.version.clone(),
        };
        if let Err(e) = self.store.save_meta(&stamped) {
            return UpdateOutcome::Error {
                reason: e.to_string(),
            };
        }
        if let Some(resolver) = &self.resolver {
            resolver.invalidate();
        }
        info!(version = %remote.version, "holiday catalog updated");
        UpdateOutcome::Success {
            version: remote.version,
        }
    }
}
