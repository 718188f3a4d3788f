// ==========================================
// Nikora Promo Orders - Weekday Type
// ==========================================
// Delivery days are Monday..Friday only; anything the
// schedule cannot express lands in the Unassigned bucket
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Weekday (delivery day)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All delivery days, Monday first
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Canonical English label ("Monday".."Friday")
    ///
    /// This is the value stored in the working weekday column and the
    /// partition name used in run summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Locale key for the localized display name
    pub fn locale_key(&self) -> &'static str {
        match self {
            Weekday::Monday => "weekday.monday",
            Weekday::Tuesday => "weekday.tuesday",
            Weekday::Wednesday => "weekday.wednesday",
            Weekday::Thursday => "weekday.thursday",
            Weekday::Friday => "weekday.friday",
        }
    }

    /// Parse a raw schedule cell into a delivery day
    ///
    /// Accepted forms, tried in order:
    /// 1. integer 1..=5 (positional, 1 = Monday); other integers are invalid
    ///    and do NOT fall through to name matching
    /// 2. English day name, case-insensitive (Monday..Friday only)
    /// 3. Georgian day name, exact match
    ///
    /// Returns None for anything else, including blank values, Saturday and
    /// Sunday in any language.
    pub fn normalize(raw: &str) -> Option<Weekday> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<u32>() {
                Ok(n) if (1..=5).contains(&n) => Some(Weekday::ALL[(n - 1) as usize]),
                _ => None,
            };
        }

        match s.to_lowercase().as_str() {
            "monday" => return Some(Weekday::Monday),
            "tuesday" => return Some(Weekday::Tuesday),
            "wednesday" => return Some(Weekday::Wednesday),
            "thursday" => return Some(Weekday::Thursday),
            "friday" => return Some(Weekday::Friday),
            _ => {}
        }

        match s {
            "ორშაბათი" => Some(Weekday::Monday),
            "სამშაბათი" => Some(Weekday::Tuesday),
            "ოთხშაბათი" => Some(Weekday::Wednesday),
            "ხუთშაბათი" => Some(Weekday::Thursday),
            "პარასკევი" => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// Normalize a raw schedule cell to a label string
    ///
    /// Convenience for the working column: unrecognized values become the
    /// empty string, which downstream code reads as "unassigned".
    pub fn normalize_label(raw: &str) -> String {
        Weekday::normalize(raw)
            .map(|d| d.label().to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
