//! Holiday resolution for concrete years.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use al_lunar::{LunarCalendar, LunarDate, SolarDate};
use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::builtin;
use crate::catalog::{HolidayCatalog, LunarRule, ResolvedHoliday, SolarRule};
use crate::clock::{Clock, SystemClock};
use crate::provider::{
    self, BuiltinProvider, BundledProvider, CachedFileProvider, CatalogProvider,
};
use crate::store::CatalogStore;

/// How long a loaded catalog stays active before the provider chain is
/// consulted again.
pub const CATALOG_TTL_HOURS: i64 = 24;

struct ActiveCatalog {
    catalog: Arc<HolidayCatalog>,
    loaded_at: DateTime<Utc>,
}

/// Derives the concrete holiday list for Gregorian years from the active
/// catalog.
///
/// The catalog is loaded lazily from the provider chain and kept for
/// [`CATALOG_TTL_HOURS`]; resolved years are cached until
/// [`invalidate`](HolidayResolver::invalidate), which the update manager
/// calls after persisting a new catalog. Both caches are mutex-guarded,
/// so a resolver can be shared behind an [`Arc`]. Resolution never fails
/// and never returns an empty answer for a standard chain — the built-in
/// tail always yields a catalog.
pub struct HolidayResolver {
    providers: Vec<Box<dyn CatalogProvider>>,
    calendar: LunarCalendar,
    clock: Arc<dyn Clock>,
    active: Mutex<Option<ActiveCatalog>>,
    years: Mutex<HashMap<i32, Arc<Vec<ResolvedHoliday>>>>,
}

impl HolidayResolver {
    /// Resolver over the standard chain: cached download from `store`,
    /// then the bundled catalog, then the built-in table.
    pub fn new(store: &CatalogStore) -> Self {
        Self::with_providers(vec![
            Box::new(CachedFileProvider::new(store.catalog_path())),
            Box::new(BundledProvider),
            Box::new(BuiltinProvider),
        ])
    }

    /// Resolver over an explicit provider chain, tried in order.
    pub fn with_providers(providers: Vec<Box<dyn CatalogProvider>>) -> Self {
        HolidayResolver {
            providers,
            calendar: LunarCalendar::default(),
            clock: Arc::new(SystemClock),
            active: Mutex::new(None),
            years: Mutex::new(HashMap::new()),
        }
    }

    /// Use a specific lunisolar calendar (UTC offset) for lunar rules.
    pub fn with_calendar(mut self, calendar: LunarCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Return all holidays of a Gregorian year, sorted by date
    /// ascending. Same-day holidays keep catalog declaration order
    /// (solar rules before lunar rules).
    pub fn holidays_for_year(&self, year: i32) -> Arc<Vec<ResolvedHoliday>> {
        if let Some(found) = self
            .years
            .lock()
            .expect("year cache mutex poisoned")
            .get(&year)
        {
            return Arc::clone(found);
        }
        let catalog = self.active_catalog();
        let resolved = Arc::new(self.resolve_year(&catalog, year));
        Arc::clone(
            self.years
                .lock()
                .expect("year cache mutex poisoned")
                .entry(year)
                .or_insert(resolved),
        )
    }

    /// Return the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: &SolarDate) -> Option<ResolvedHoliday> {
        self.holidays_for_year(date.year())
            .iter()
            .find(|h| h.date == *date)
            .cloned()
    }

    /// Return `true` if any holiday falls on `date`.
    pub fn is_holiday(&self, date: &SolarDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Drop the active catalog and every resolved year.
    pub fn invalidate(&self) {
        *self.active.lock().expect("active catalog mutex poisoned") = None;
        self.years.lock().expect("year cache mutex poisoned").clear();
    }

    /// Return the version of the catalog currently in use, loading one
    /// if necessary.
    pub fn active_version(&self) -> String {
        self.active_catalog().version.clone()
    }

    fn active_catalog(&self) -> Arc<HolidayCatalog> {
        let mut active = self.active.lock().expect("active catalog mutex poisoned");
        let now = self.clock.now();
        if let Some(current) = active.as_ref() {
            if now - current.loaded_at < Duration::hours(CATALOG_TTL_HOURS) {
                return Arc::clone(&current.catalog);
            }
        }
        let (catalog, _source) = provider::load_first(&self.providers)
            .unwrap_or_else(|_| (builtin::builtin_catalog(), "builtin".to_string()));
        let catalog = Arc::new(catalog);
        *active = Some(ActiveCatalog {
            catalog: Arc::clone(&catalog),
            loaded_at: now,
        });
        catalog
    }

    fn resolve_year(&self, catalog: &HolidayCatalog, year: i32) -> Vec<ResolvedHoliday> {
        let mut resolved = Vec::new();
        for rule in &catalog.holidays.solar {
            match self.resolve_solar(rule, year) {
                Some(holiday) => resolved.push(holiday),
                None => warn!(
                    id = %rule.id,
                    month = rule.month,
                    day = rule.day,
                    "solar rule does not name a valid date, skipped"
                ),
            }
        }
        for rule in &catalog.holidays.lunar {
            if let Some(holiday) = self.resolve_lunar(rule, year) {
                resolved.push(holiday);
            }
        }
        // Stable sort: same-day entries keep declaration order
        resolved.sort_by_key(|h| h.date);
        resolved
    }

    fn resolve_solar(&self, rule: &SolarRule, year: i32) -> Option<ResolvedHoliday> {
        let date = SolarDate::from_ymd(year, rule.month, rule.day).ok()?;
        Some(ResolvedHoliday {
            name: rule.name.clone(),
            date,
            is_lunar: false,
            description: rule.description.clone(),
            is_public_holiday: rule.is_public_holiday,
        })
    }

    /// A lunar rule can straddle the Gregorian year boundary: a rule in
    /// the 12th lunar month of year `y − 1` lands in January of `y`.
    /// Try the rule in lunar year `y`, then `y − 1`, and keep the
    /// occurrence whose Gregorian year is `y`.
    fn resolve_lunar(&self, rule: &LunarRule, year: i32) -> Option<ResolvedHoliday> {
        for lunar_year in [year, year - 1] {
            let lunar = match LunarDate::new(rule.lunar_day, rule.lunar_month, lunar_year, false)
            {
                Ok(lunar) => lunar,
                Err(e) => {
                    warn!(id = %rule.id, error = %e, "lunar rule out of range, skipped");
                    return None;
                }
            };
            match self.calendar.lunar_to_solar(&lunar) {
                Ok(date) if date.year() == year => {
                    return Some(ResolvedHoliday {
                        name: rule.name.clone(),
                        date,
                        is_lunar: true,
                        description: rule.description.clone(),
                        is_public_holiday: rule.is_public_holiday,
                    });
                }
                // Lands in another Gregorian year, or does not occur in
                // this lunar year at all
                Ok(_) | Err(_) => {}
            }
        }
        None
    }
}
