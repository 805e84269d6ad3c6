//! In-memory TTL cache for the built profile.
//!
//! DESIGN
//! ======
//! One slot behind a `Mutex`: the profile is a few kilobytes rebuilt from
//! local files, so a single cached value with an age check covers the hot
//! path. Internals take explicit timestamps so expiry is testable without
//! sleeping.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use profile::Profile;

const DEFAULT_TTL_SECS: u64 = 300;

/// Shared, cloneable profile cache.
#[derive(Clone)]
pub struct ProfileCache {
    inner: Arc<Mutex<Option<CacheSlot>>>,
    ttl: Duration,
}

struct CacheSlot {
    stored_at: Instant,
    profile: Profile,
}

impl ProfileCache {
    /// Cache with the TTL from `PROFILE_CACHE_TTL_SECS` (seconds, default 300).
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_ttl(Duration::from_secs(env_parse("PROFILE_CACHE_TTL_SECS", DEFAULT_TTL_SECS)))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(None)), ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached profile, if present and younger than the TTL.
    #[must_use]
    pub fn get(&self) -> Option<Profile> {
        self.get_at(Instant::now())
    }

    /// Internal: lookup with explicit timestamp (for testing).
    fn get_at(&self, now: Instant) -> Option<Profile> {
        let slot = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.as_ref()
            .filter(|cached| now.duration_since(cached.stored_at) <= self.ttl)
            .map(|cached| cached.profile.clone())
    }

    /// Store a freshly built profile, replacing any previous value.
    pub fn put(&self, profile: Profile) {
        self.put_at(profile, Instant::now());
    }

    fn put_at(&self, profile: Profile, now: Instant) {
        let mut slot = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(CacheSlot { stored_at: now, profile });
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
