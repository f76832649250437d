//! Application-level configuration constants.

use elevate_drive::defaults;
use elevate_drive::theme::ThemeMode;

// Default values for input fields
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_THEME: ThemeMode = ThemeMode::Dark;

// Slider bounds follow the weight domain the calculator validates against
pub const MIN_WEIGHT_KG: u32 = defaults::MIN_WEIGHT_KG as u32;
pub const MAX_WEIGHT_KG: u32 = defaults::MAX_WEIGHT_KG as u32;
pub const WEIGHT_STEP_KG: u32 = 1;

// UI text
pub const APP_TITLE: &str = "Drive";
pub const CARD_TITLE: &str = "Elevate Your Drive";
pub const CARD_SUBTITLE: &str = "Alcohol Calculator";
pub const DRINK_UNIT_LABEL: &str = "glasses";
