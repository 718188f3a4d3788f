// ==========================================
// Nikora Promo Orders - Column Profile
// ==========================================
// The six column names the pipeline needs. Locked defaults
// match the files the retailer actually sends; operators
// never pick columns by hand.
// ==========================================

use serde::{Deserialize, Serialize};

// Locked default column names
pub const DEFAULT_ORDER_BARCODE_COL: &str = "Код EAN/UPC";
pub const DEFAULT_ORDER_SHOP_COL: &str = "Завод";
pub const DEFAULT_SCHEDULE_SHOP_COL: &str = "shop_code";
pub const DEFAULT_SCHEDULE_WEEKDAY_COL: &str = "allowed_weekday";
pub const DEFAULT_MAP_NEW_CODE_COL: &str = "ძირითადი შტრიხკოდი";
pub const DEFAULT_MAP_OLD_CODE_COL: &str = "შტრიხკოდი";

/// Column names for the three input tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Barcode column in the order table
    #[serde(default = "default_order_barcode")]
    pub order_barcode: String,

    /// Shop identifier column in the order table
    #[serde(default = "default_order_shop")]
    pub order_shop: String,

    /// Shop identifier column in the schedule table
    #[serde(default = "default_schedule_shop")]
    pub schedule_shop: String,

    /// Weekday indicator column in the schedule table
    #[serde(default = "default_schedule_weekday")]
    pub schedule_weekday: String,

    /// New-code column in the barcode map (Georgian header)
    #[serde(default = "default_map_new_code")]
    pub map_new_code: String,

    /// Old-code column in the barcode map (Georgian header)
    #[serde(default = "default_map_old_code")]
    pub map_old_code: String,
}

fn default_order_barcode() -> String {
    DEFAULT_ORDER_BARCODE_COL.to_string()
}

fn default_order_shop() -> String {
    DEFAULT_ORDER_SHOP_COL.to_string()
}

fn default_schedule_shop() -> String {
    DEFAULT_SCHEDULE_SHOP_COL.to_string()
}

fn default_schedule_weekday() -> String {
    DEFAULT_SCHEDULE_WEEKDAY_COL.to_string()
}

fn default_map_new_code() -> String {
    DEFAULT_MAP_NEW_CODE_COL.to_string()
}

fn default_map_old_code() -> String {
    DEFAULT_MAP_OLD_CODE_COL.to_string()
}

impl Default for ColumnProfile {
    fn default() -> Self {
        Self {
            order_barcode: default_order_barcode(),
            order_shop: default_order_shop(),
            schedule_shop: default_schedule_shop(),
            schedule_weekday: default_schedule_weekday(),
            map_new_code: default_map_new_code(),
            map_old_code: default_map_old_code(),
        }
    }
}
