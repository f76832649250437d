use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod theme;
pub mod utils;

/// Formula constants
pub mod defaults {
    /// Pounds per kilogram
    pub const LB_PER_KG: f64 = 2.20462;
    /// One standard drink ≈ 0.6 oz of pure alcohol
    pub const ALCOHOL_OZ_PER_DRINK: f64 = 0.6;
    /// Widmark conversion factor for ounces and pounds
    pub const WIDMARK_FACTOR: f64 = 5.14;
    pub const R_MALE: f64 = 0.73;
    pub const R_FEMALE: f64 = 0.66;
    /// Stricter than the common 0.08 legal limit
    pub const DRIVE_THRESHOLD_BAC: f64 = 0.02;
    /// BAC eliminated per hour
    pub const METABOLISM_PER_HOUR: f64 = 0.015;
    /// Weight domain accepted by the UI
    pub const MIN_WEIGHT_KG: f64 = 40.0;
    pub const MAX_WEIGHT_KG: f64 = 120.0;
}

pub const DISCLAIMER: &str = "(Estimation only. Always drive safely!)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Beer,
    Wine,
    Shot,
}

impl DrinkType {
    /// Display order of the drink counters.
    pub const ALL: [DrinkType; 3] = [DrinkType::Beer, DrinkType::Wine, DrinkType::Shot];

    /// Ounces of pure alcohol counted per drink. Uniform across types.
    pub fn alcohol_ounces(self) -> f64 {
        match self {
            DrinkType::Beer => defaults::ALCOHOL_OZ_PER_DRINK,
            DrinkType::Wine => defaults::ALCOHOL_OZ_PER_DRINK,
            DrinkType::Shot => defaults::ALCOHOL_OZ_PER_DRINK,
        }
    }

    /// Nominal grams of alcohol per glass. Informational only, the BAC
    /// estimate does not read it.
    pub fn grams(self) -> u32 {
        match self {
            DrinkType::Beer => 14,
            DrinkType::Wine => 20,
            DrinkType::Shot => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrinkType::Beer => "Beer",
            DrinkType::Wine => "Wine",
            DrinkType::Shot => "Shot",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Widmark distribution ratio selected by gender.
    pub fn distribution_ratio(self) -> f64 {
        match self {
            Gender::Male => defaults::R_MALE,
            Gender::Female => defaults::R_FEMALE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Number of drinks consumed per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrinkCounts {
    pub beer: u32,
    pub wine: u32,
    pub shot: u32,
}

impl DrinkCounts {
    pub fn get(&self, drink: DrinkType) -> u32 {
        match drink {
            DrinkType::Beer => self.beer,
            DrinkType::Wine => self.wine,
            DrinkType::Shot => self.shot,
        }
    }

    pub fn with(mut self, drink: DrinkType, count: u32) -> Self {
        *self.slot_mut(drink) = count;
        self
    }

    pub fn incremented(self, drink: DrinkType) -> Self {
        let count = self.get(drink).saturating_add(1);
        self.with(drink, count)
    }

    /// Never goes below zero.
    pub fn decremented(self, drink: DrinkType) -> Self {
        let count = self.get(drink).saturating_sub(1);
        self.with(drink, count)
    }

    pub fn total(&self) -> u32 {
        DrinkType::ALL.iter().map(|&d| self.get(d)).sum()
    }

    /// Fluid ounces of pure alcohol across all drinks.
    pub fn alcohol_ounces(&self) -> f64 {
        DrinkType::ALL
            .iter()
            .map(|&d| self.get(d) as f64 * d.alcohol_ounces())
            .sum()
    }

    fn slot_mut(&mut self, drink: DrinkType) -> &mut u32 {
        match drink {
            DrinkType::Beer => &mut self.beer,
            DrinkType::Wine => &mut self.wine,
            DrinkType::Shot => &mut self.shot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub weight_kg: f64,
    pub gender: Gender,
}

impl Default for PersonProfile {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            gender: Gender::Male,
        }
    }
}

// Caller-side validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    NonFiniteWeight,
    NonPositiveWeight(f64),
    WeightOutOfRange { weight_kg: f64, min: f64, max: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFiniteWeight => write!(f, "Weight must be a finite number"),
            InputError::NonPositiveWeight(w) => {
                write!(f, "Weight must be positive, got {} kg", w)
            }
            InputError::WeightOutOfRange { weight_kg, min, max } => write!(
                f,
                "Weight {} kg is outside the supported range [{} to {}] kg",
                weight_kg, min, max
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Everything the view layer collects, passed by value to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub profile: PersonProfile,
    #[serde(default)]
    pub drinks: DrinkCounts,
}

/// State transitions issued by the UI controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorAction {
    SetWeight(f64),
    SetGender(Gender),
    Increment(DrinkType),
    Decrement(DrinkType),
}

impl CalculatorInput {
    pub fn new(weight_kg: f64, gender: Gender, drinks: DrinkCounts) -> Self {
        Self {
            profile: PersonProfile { weight_kg, gender },
            drinks,
        }
    }

    /// Return the input that results from `action`. `self` is left untouched.
    pub fn apply(&self, action: CalculatorAction) -> Self {
        let mut next = *self;
        match action {
            CalculatorAction::SetWeight(weight_kg) => next.profile.weight_kg = weight_kg,
            CalculatorAction::SetGender(gender) => next.profile.gender = gender,
            CalculatorAction::Increment(drink) => next.drinks = self.drinks.incremented(drink),
            CalculatorAction::Decrement(drink) => next.drinks = self.drinks.decremented(drink),
        }
        next
    }

    /// Check the weight against the domain the UI offers.
    pub fn validate(&self) -> Result<(), InputError> {
        let w = self.profile.weight_kg;
        if !w.is_finite() {
            return Err(InputError::NonFiniteWeight);
        }
        if w <= 0.0 {
            return Err(InputError::NonPositiveWeight(w));
        }
        if !(defaults::MIN_WEIGHT_KG..=defaults::MAX_WEIGHT_KG).contains(&w) {
            return Err(InputError::WeightOutOfRange {
                weight_kg: w,
                min: defaults::MIN_WEIGHT_KG,
                max: defaults::MAX_WEIGHT_KG,
            });
        }
        Ok(())
    }
}

/// Estimate BAC with the simplified Widmark formula, assuming every drink
/// was consumed at once (no elapsed time).
///
/// The result is a unitless fraction: 0.08 means 0.08% BAC. Inputs are not
/// validated; a weight near zero yields a very large or non-finite value.
pub fn estimate_bac(weight_kg: f64, gender: Gender, drinks: &DrinkCounts) -> f64 {
    let weight_lb = weight_kg * defaults::LB_PER_KG;
    let r = gender.distribution_ratio();
    let total_ounces = drinks.alcohol_ounces();
    (total_ounces * defaults::WIDMARK_FACTOR) / (weight_lb * r)
}

/// Whole hours to wait until BAC drops to the drive threshold, at a
/// constant elimination rate.
///
/// A non-finite (NaN) BAC maps to 0; callers keep it out by validating weight.
pub fn hours_to_drive(bac: f64) -> u32 {
    if bac <= defaults::DRIVE_THRESHOLD_BAC {
        return 0;
    }
    ((bac - defaults::DRIVE_THRESHOLD_BAC) / defaults::METABOLISM_PER_HOUR).ceil() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveVerdict {
    Ready,
    Wait(u32),
}

impl DriveVerdict {
    pub fn from_hours(hours: u32) -> Self {
        if hours == 0 {
            DriveVerdict::Ready
        } else {
            DriveVerdict::Wait(hours)
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DriveVerdict::Ready)
    }

    pub fn message(&self) -> String {
        match self {
            DriveVerdict::Ready => "You are ready to drive!".to_string(),
            DriveVerdict::Wait(hours) => format!(
                "Wait {} hour{} before driving!",
                hours,
                if *hours > 1 { "s" } else { "" }
            ),
        }
    }
}

impl fmt::Display for DriveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub bac: f64,
    pub hours: u32,
}

impl Evaluation {
    pub fn verdict(&self) -> DriveVerdict {
        DriveVerdict::from_hours(self.hours)
    }
}

/// Run both estimators over the current input.
pub fn evaluate_input(input: &CalculatorInput) -> Evaluation {
    let bac = estimate_bac(input.profile.weight_kg, input.profile.gender, &input.drinks);
    let hours = hours_to_drive(bac);
    debug!(
        "Recomputed: {:.1} kg, {:?}, {} drinks -> BAC {:.4}, wait {} h",
        input.profile.weight_kg,
        input.profile.gender,
        input.drinks.total(),
        bac,
        hours
    );
    Evaluation { bac, hours }
}

/// Validate the input, then run both estimators.
pub fn evaluate_checked(input: CalculatorInput) -> Result<Evaluation, InputError> {
    input.validate()?;
    Ok(evaluate_input(&input))
}

/// JS entry point for host pages that bring their own form.
///
/// # Arguments
/// * `input_js` - Serialized `CalculatorInput`
///
/// # Returns
/// Serialized `Evaluation`. Malformed or out-of-range input is thrown as an
/// error string.
#[wasm_bindgen]
pub fn evaluate(input_js: JsValue) -> Result<JsValue, JsValue> {
    let input: CalculatorInput = serde_wasm_bindgen::from_value(input_js).map_err(|e| {
        warn!("Rejected calculator input: {}", e);
        JsValue::from_str(&format!("Failed to deserialize input: {}", e))
    })?;

    let evaluation = evaluate_checked(input).map_err(|e| {
        warn!("Rejected calculator input: {}", e);
        JsValue::from_str(&format!("Invalid input: {}", e))
    })?;

    serde_wasm_bindgen::to_value(&evaluation).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beers(n: u32) -> DrinkCounts {
        DrinkCounts::default().with(DrinkType::Beer, n)
    }

    #[test]
    fn test_no_drinks_is_ready() {
        let bac = estimate_bac(70.0, Gender::Male, &DrinkCounts::default());
        assert_eq!(bac, 0.0);
        assert_eq!(hours_to_drive(bac), 0);
    }

    #[test]
    fn test_two_beers_male() {
        let bac = estimate_bac(70.0, Gender::Male, &beers(2));
        assert!((bac - 0.0548).abs() < 0.0001, "bac = {}", bac);
        assert_eq!(hours_to_drive(bac), 3);
    }

    #[test]
    fn test_two_beers_female() {
        let bac = estimate_bac(70.0, Gender::Female, &beers(2));
        assert!((bac - 0.0606).abs() < 0.0001, "bac = {}", bac);
        assert_eq!(hours_to_drive(bac), 3);
    }

    #[test]
    fn test_drink_types_weigh_the_same() {
        let wine = DrinkCounts::default().with(DrinkType::Wine, 2);
        let shots = DrinkCounts::default().with(DrinkType::Shot, 2);
        let b = estimate_bac(80.0, Gender::Male, &beers(2));
        assert_eq!(b, estimate_bac(80.0, Gender::Male, &wine));
        assert_eq!(b, estimate_bac(80.0, Gender::Male, &shots));
    }

    #[test]
    fn test_grams_metadata() {
        assert_eq!(DrinkType::Beer.grams(), 14);
        assert_eq!(DrinkType::Wine.grams(), 20);
        assert_eq!(DrinkType::Shot.grams(), 10);
    }

    #[test]
    fn test_hours_threshold_boundary() {
        assert_eq!(hours_to_drive(0.0), 0);
        assert_eq!(hours_to_drive(0.02), 0);
        assert_eq!(hours_to_drive(0.0201), 1);
        assert_eq!(hours_to_drive(0.04), 2);
        assert_eq!(hours_to_drive(0.1), 6);
    }

    #[test]
    fn test_decrement_saturates_at_zero() {
        let counts = DrinkCounts::default().decremented(DrinkType::Shot);
        assert_eq!(counts.shot, 0);
        let counts = counts.incremented(DrinkType::Shot).incremented(DrinkType::Shot);
        assert_eq!(counts.decremented(DrinkType::Shot).shot, 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let input = CalculatorInput::default();
        let next = input
            .apply(CalculatorAction::Increment(DrinkType::Wine))
            .apply(CalculatorAction::SetGender(Gender::Female))
            .apply(CalculatorAction::SetWeight(82.0));
        assert_eq!(input, CalculatorInput::default());
        assert_eq!(next.drinks.wine, 1);
        assert_eq!(next.profile.gender, Gender::Female);
        assert_eq!(next.profile.weight_kg, 82.0);
    }

    #[test]
    fn test_validate_weight() {
        let ok = CalculatorInput::new(70.0, Gender::Male, DrinkCounts::default());
        assert!(ok.validate().is_ok());
        assert_eq!(
            ok.apply(CalculatorAction::SetWeight(0.0)).validate(),
            Err(InputError::NonPositiveWeight(0.0))
        );
        assert_eq!(
            ok.apply(CalculatorAction::SetWeight(f64::NAN)).validate(),
            Err(InputError::NonFiniteWeight)
        );
        assert!(matches!(
            ok.apply(CalculatorAction::SetWeight(150.0)).validate(),
            Err(InputError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(DriveVerdict::from_hours(0).message(), "You are ready to drive!");
        assert_eq!(DriveVerdict::from_hours(1).message(), "Wait 1 hour before driving!");
        assert_eq!(DriveVerdict::from_hours(3).message(), "Wait 3 hours before driving!");
        assert!(DriveVerdict::from_hours(0).is_ready());
    }

    #[test]
    fn test_nan_bac_maps_to_no_wait() {
        let bac = estimate_bac(0.0, Gender::Male, &DrinkCounts::default());
        assert!(bac.is_nan());
        assert_eq!(hours_to_drive(bac), 0);
        assert_eq!(hours_to_drive(f64::NAN), 0);
    }

    #[test]
    fn test_evaluate_checked_accepts_valid_input() {
        let input = CalculatorInput::new(70.0, Gender::Male, beers(2));
        let eval = evaluate_checked(input).unwrap();
        assert!((eval.bac - 0.0548).abs() < 0.0001);
        assert_eq!(eval.hours, 3);
    }

    #[test]
    fn test_evaluate_checked_rejects_zero_weight() {
        let input = CalculatorInput::new(0.0, Gender::Male, DrinkCounts::default());
        assert_eq!(evaluate_checked(input), Err(InputError::NonPositiveWeight(0.0)));
    }

    #[test]
    fn test_evaluate_checked_rejects_heavy_weight() {
        let input = CalculatorInput::new(150.0, Gender::Female, beers(1));
        assert_eq!(
            evaluate_checked(input),
            Err(InputError::WeightOutOfRange {
                weight_kg: 150.0,
                min: defaults::MIN_WEIGHT_KG,
                max: defaults::MAX_WEIGHT_KG,
            })
        );
        assert_eq!(
            evaluate_checked(input).unwrap_err().to_string(),
            "Weight 150 kg is outside the supported range [40 to 120] kg"
        );
    }

    #[test]
    fn test_input_wire_shape() {
        let json = r#"{"profile":{"weight_kg":70.0,"gender":"female"},"drinks":{"beer":2}}"#;
        let input: CalculatorInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.profile.gender, Gender::Female);
        assert_eq!(input.drinks, beers(2));

        let eval = evaluate_input(&input);
        assert_eq!(eval.hours, 3);
        assert_eq!(eval.verdict(), DriveVerdict::Wait(3));
    }
}
