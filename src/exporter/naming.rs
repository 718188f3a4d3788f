// ==========================================
// Nikora Promo Orders - Export File Naming
// ==========================================
// File and archive names follow one template:
//   "{brand}, {partition label}, {date}.xlsx"
// Labels come from the translation catalog so the names
// stay Georgian regardless of the host's global locale
// ==========================================

use crate::domain::Weekday;
use crate::i18n::t_in;
use chrono::NaiveDate;

/// MIME type for the per-partition workbooks
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// MIME type for the combined archive
pub const ZIP_MIME: &str = "application/zip";

/// Date format used in every export name
pub const DATE_FMT: &str = "%Y-%m-%d";

// ==========================================
// ExportNamer - file names for one run
// ==========================================
#[derive(Debug, Clone)]
pub struct ExportNamer {
    brand: String,
    locale: String,
}

impl ExportNamer {
    pub fn new(brand: &str, locale: &str) -> Self {
        Self {
            brand: brand.to_string(),
            locale: locale.to_string(),
        }
    }

    /// Workbook name for one delivery day, e.g.
    /// "ნიკორა, ორშაბათი, 2025-03-10.xlsx"
    pub fn weekday_file_name(&self, weekday: Weekday, date: NaiveDate) -> String {
        let label = t_in(&self.locale, weekday.locale_key());
        self.xlsx_name(&label, date)
    }

    /// Workbook name for the rows without a delivery day, e.g.
    /// "ნიკორა, გაურკვეველი დღე, 2025-03-10.xlsx"
    pub fn unassigned_file_name(&self, date: NaiveDate) -> String {
        let label = t_in(&self.locale, "weekday.unassigned");
        self.xlsx_name(&label, date)
    }

    /// Combined archive name, e.g.
    /// "ნიკორა, დაგრუპული დღეებით, 2025-03-10.zip"
    pub fn archive_file_name(&self, date: NaiveDate) -> String {
        let label = t_in(&self.locale, "export.grouped_archive");
        format!(
            "{}, {}, {}.zip",
            self.brand,
            label,
            date.format(DATE_FMT)
        )
    }

    fn xlsx_name(&self, label: &str, date: NaiveDate) -> String {
        format!(
            "{}, {}, {}.xlsx",
            self.brand,
            label,
            date.format(DATE_FMT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_weekday_file_name_georgian() {
        let namer = ExportNamer::new("ნიკორა", "ka");
        assert_eq!(
            namer.weekday_file_name(Weekday::Monday, date()),
            "ნიკორა, ორშაბათი, 2025-03-10.xlsx"
        );
        assert_eq!(
            namer.weekday_file_name(Weekday::Friday, date()),
            "ნიკორა, პარასკევი, 2025-03-10.xlsx"
        );
    }

    #[test]
    fn test_unassigned_file_name_georgian() {
        let namer = ExportNamer::new("ნიკორა", "ka");
        assert_eq!(
            namer.unassigned_file_name(date()),
            "ნიკორა, გაურკვეველი დღე, 2025-03-10.xlsx"
        );
    }

    #[test]
    fn test_archive_file_name_georgian() {
        let namer = ExportNamer::new("ნიკორა", "ka");
        assert_eq!(
            namer.archive_file_name(date()),
            "ნიკორა, დაგრუპული დღეებით, 2025-03-10.zip"
        );
    }

    #[test]
    fn test_english_locale_names() {
        let namer = ExportNamer::new("Nikora", "en");
        assert_eq!(
            namer.weekday_file_name(Weekday::Tuesday, date()),
            "Nikora, Tuesday, 2025-03-10.xlsx"
        );
        assert_eq!(
            namer.unassigned_file_name(date()),
            "Nikora, Unassigned day, 2025-03-10.xlsx"
        );
    }
}
