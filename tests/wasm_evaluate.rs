#![cfg(target_arch = "wasm32")]

use elevate_drive::{evaluate, CalculatorInput, DrinkCounts, DrinkType, Evaluation, Gender};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn to_js(input: &CalculatorInput) -> JsValue {
    serde_wasm_bindgen::to_value(input).unwrap()
}

#[wasm_bindgen_test]
fn evaluate_returns_evaluation_object() {
    let drinks = DrinkCounts::default().with(DrinkType::Beer, 2);
    let input = CalculatorInput::new(70.0, Gender::Male, drinks);
    let out = evaluate(to_js(&input)).unwrap();
    let eval: Evaluation = serde_wasm_bindgen::from_value(out).unwrap();
    assert_eq!(eval.hours, 3);
    assert!((eval.bac - 0.0548).abs() < 0.0001);
}

#[wasm_bindgen_test]
fn evaluate_throws_on_out_of_range_weight() {
    let input = CalculatorInput::new(150.0, Gender::Female, DrinkCounts::default());
    let err = evaluate(to_js(&input)).unwrap_err();
    let msg = err.as_string().unwrap();
    assert!(msg.starts_with("Invalid input: Weight 150 kg"), "{}", msg);
}

#[wasm_bindgen_test]
fn evaluate_throws_on_malformed_input() {
    let err = evaluate(JsValue::from_str("not an input")).unwrap_err();
    let msg = err.as_string().unwrap();
    assert!(msg.starts_with("Failed to deserialize input"), "{}", msg);
}
