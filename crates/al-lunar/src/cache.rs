//! Memoized per-date conversions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::convert::LunarCalendar;
use crate::lunar_date::LunarDate;
use crate::solar_date::SolarDate;

/// A memoizing wrapper around [`LunarCalendar::solar_to_lunar`].
///
/// Entries accumulate for the lifetime of the cache — conversions are a
/// few hundred bytes each and a process touches a bounded set of days —
/// and [`clear`](LunarDateCache::clear) drops them all at once. The map
/// is guarded by a mutex and the conversion runs under the lock, so
/// concurrent lookups of the same date perform the computation exactly
/// once. Safe to share between threads.
#[derive(Debug, Default)]
pub struct LunarDateCache {
    calendar: LunarCalendar,
    entries: Mutex<HashMap<SolarDate, LunarDate>>,
}

impl LunarDateCache {
    /// Cache over the default (UTC+7) calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache over a specific calendar.
    pub fn with_calendar(calendar: LunarCalendar) -> Self {
        LunarDateCache {
            calendar,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying calendar.
    pub fn calendar(&self) -> &LunarCalendar {
        &self.calendar
    }

    /// Return the lunar date for `date`, computing it on first use.
    pub fn get(&self, date: &SolarDate) -> LunarDate {
        let mut entries = self.entries.lock().expect("lunar cache mutex poisoned");
        *entries
            .entry(*date)
            .or_insert_with(|| self.calendar.solar_to_lunar(date))
    }

    /// Return the number of memoized dates.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("lunar cache mutex poisoned").len()
    }

    /// Return `true` if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every memoized entry.
    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("lunar cache mutex poisoned")
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_conversions() {
        let cache = LunarDateCache::new();
        let tet = SolarDate::from_ymd(2024, 2, 10).unwrap();
        let first = cache.get(&tet);
        let second = cache.get(&tet);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!((first.day, first.month, first.year), (1, 1, 2024));
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = LunarDateCache::new();
        cache.get(&SolarDate::from_ymd(2024, 2, 10).unwrap());
        cache.get(&SolarDate::from_ymd(2024, 2, 11).unwrap());
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn matches_direct_conversion() {
        let cache = LunarDateCache::new();
        let calendar = LunarCalendar::default();
        for day in 1..=28 {
            let d = SolarDate::from_ymd(2025, 6, day).unwrap();
            assert_eq!(cache.get(&d), calendar.solar_to_lunar(&d));
        }
    }

    #[test]
    fn shared_between_threads() {
        use std::sync::Arc;

        let cache = Arc::new(LunarDateCache::new());
        let date = SolarDate::from_ymd(2025, 1, 29).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get(&date))
            })
            .collect();
        for handle in handles {
            let lunar = handle.join().unwrap();
            assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2025));
        }
        assert_eq!(cache.len(), 1);
    }
}
