//! Built-in fallback catalog.
//!
//! The last link in the provider chain: a minimal hardcoded table of the
//! nationally fixed solar holidays and the best-known lunar observances,
//! so holiday resolution still has an answer when no catalog can be read
//! from anywhere.

use crate::catalog::{HolidayCatalog, HolidaySections, LunarRule, SolarRule};

/// Version string reported by the built-in catalog. Sorts below any real
/// catalog version.
pub const BUILTIN_VERSION: &str = "0.0.0";

/// Return the hardcoded fallback catalog.
pub fn builtin_catalog() -> HolidayCatalog {
    HolidayCatalog {
        version: BUILTIN_VERSION.to_string(),
        last_updated: String::new(),
        holidays: HolidaySections {
            solar: vec![
                solar("new-year", "Tết Dương lịch", 1, 1, "New Year's Day", true),
                solar(
                    "party-foundation",
                    "Ngày thành lập Đảng",
                    2,
                    3,
                    "Communist Party Foundation Day",
                    false,
                ),
                solar(
                    "reunification",
                    "Ngày Giải phóng miền Nam",
                    4,
                    30,
                    "Reunification Day",
                    true,
                ),
                solar(
                    "labor-day",
                    "Ngày Quốc tế Lao động",
                    5,
                    1,
                    "International Labor Day",
                    true,
                ),
                solar("national-day", "Ngày Quốc khánh", 9, 2, "National Day", true),
            ],
            lunar: vec![
                lunar("tet-1", "Tết Nguyên Đán", 1, 1, "Vietnamese New Year", true),
                lunar("tet-2", "Mùng 2 Tết", 1, 2, "2nd day of Tet", true),
                lunar("tet-3", "Mùng 3 Tết", 1, 3, "3rd day of Tet", true),
                lunar(
                    "nguyen-tieu",
                    "Rằm tháng Giêng",
                    1,
                    15,
                    "First Full Moon Festival",
                    false,
                ),
                lunar(
                    "hung-kings",
                    "Giỗ Tổ Hùng Vương",
                    3,
                    10,
                    "Hung Kings' Temple Festival",
                    true,
                ),
                lunar(
                    "doan-ngo",
                    "Tết Đoan Ngọ",
                    5,
                    5,
                    "Killing Inner Insects Festival",
                    false,
                ),
                lunar("vu-lan", "Lễ Vu Lan", 7, 15, "Ghost Festival", false),
                lunar(
                    "mid-autumn",
                    "Tết Trung Thu",
                    8,
                    15,
                    "Mid-Autumn Festival",
                    false,
                ),
                lunar("kitchen-gods", "Tết Ông Táo", 12, 23, "Kitchen God Day", false),
            ],
        },
    }
}

fn solar(id: &str, name: &str, month: u8, day: u8, description: &str, public: bool) -> SolarRule {
    SolarRule {
        id: id.to_string(),
        name: name.to_string(),
        month,
        day,
        description: description.to_string(),
        is_public_holiday: public,
        color: "#FF0000".to_string(),
    }
}

fn lunar(id: &str, name: &str, month: u8, day: u8, description: &str, public: bool) -> LunarRule {
    LunarRule {
        id: id.to_string(),
        name: name.to_string(),
        lunar_month: month,
        lunar_day: day,
        description: description.to_string(),
        is_public_holiday: public,
        color: "#FF0000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_national_holidays() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.version, BUILTIN_VERSION);
        assert_eq!(catalog.holidays.solar.len(), 5);
        assert_eq!(catalog.holidays.lunar.len(), 9);
        assert!(catalog
            .holidays
            .solar
            .iter()
            .any(|h| h.id == "national-day" && h.month == 9 && h.day == 2));
        assert!(catalog
            .holidays
            .lunar
            .iter()
            .any(|h| h.id == "tet-1" && h.lunar_month == 1 && h.lunar_day == 1));
    }

    #[test]
    fn ids_are_unique() {
        let catalog = builtin_catalog();
        let mut ids: Vec<&str> = catalog
            .holidays
            .solar
            .iter()
            .map(|h| h.id.as_str())
            .chain(catalog.holidays.lunar.iter().map(|h| h.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
