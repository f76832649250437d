//! Pure Yew view components for the calculator card.
//!
//! Components render from props only; state lives in the app root.

use crate::config::{DRINK_UNIT_LABEL, MAX_WEIGHT_KG, MIN_WEIGHT_KG, WEIGHT_STEP_KG};
use elevate_drive::theme::{Palette, ThemeMode};
use elevate_drive::utils::{format_bac_percent, format_weight_kg};
use elevate_drive::{DrinkType, Evaluation, Gender, DISCLAIMER};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Weight slider with a free-text field that accepts units.
#[derive(Properties, PartialEq)]
pub struct WeightSliderProps {
    pub weight_kg: f64,
    pub text: String,
    pub error: Option<String>,
    pub onslide: Callback<f64>,
    pub on_text_input: Callback<InputEvent>,
    pub on_commit: Callback<()>,
}

#[function_component(WeightSlider)]
pub fn weight_slider(props: &WeightSliderProps) -> Html {
    let oninput = {
        let onslide = props.onslide.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<f64>() {
                onslide.emit(val);
            }
        })
    };
    let onkeydown = {
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="weight_text_input">
                { "Weight: " }<b>{ format_weight_kg(props.weight_kg) }</b>
            </label>
            <div class="slider-with-value">
                <input type="range"
                    min={MIN_WEIGHT_KG.to_string()}
                    max={MAX_WEIGHT_KG.to_string()}
                    step={WEIGHT_STEP_KG.to_string()}
                    value={props.weight_kg.round().to_string()}
                    {oninput}
                />
                <input
                    type="text"
                    id="weight_text_input"
                    class={classes!("slider-value", props.error.is_some().then_some("invalid"))}
                    placeholder="70kg or 154lb"
                    value={props.text.clone()}
                    oninput={props.on_text_input.clone()}
                    onchange={props.on_commit.reform(|_| ())}
                    {onkeydown}
                />
            </div>
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Exclusive two-choice gender selector.
#[derive(Properties, PartialEq)]
pub struct GenderToggleProps {
    pub gender: Gender,
    pub on_select: Callback<Gender>,
}

#[function_component(GenderToggle)]
pub fn gender_toggle(props: &GenderToggleProps) -> Html {
    let button = |option: Gender| {
        let selected = props.gender == option;
        let onclick = props.on_select.reform(move |_: MouseEvent| option);
        html! {
            <button
                class={classes!("toggle-button", selected.then_some("selected"))}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                { option.label() }
            </button>
        }
    };

    html! {
        <div class="form-group">
            <label>{ "Gender:" }</label>
            <div class="toggle-group">
                { button(Gender::Male) }
                { button(Gender::Female) }
            </div>
        </div>
    }
}

/// One row of `-` / count / `+` for a drink type.
#[derive(Properties, PartialEq)]
pub struct DrinkCounterProps {
    pub drink: DrinkType,
    pub count: u32,
    pub on_increment: Callback<DrinkType>,
    pub on_decrement: Callback<DrinkType>,
}

#[function_component(DrinkCounter)]
pub fn drink_counter(props: &DrinkCounterProps) -> Html {
    let drink = props.drink;
    let dec = props.on_decrement.reform(move |_: MouseEvent| drink);
    let inc = props.on_increment.reform(move |_: MouseEvent| drink);

    html! {
        <div class="drink-row">
            <span class="drink-name">{ drink.label() }</span>
            <button class="counter-button"
                aria-label={format!("decrease {}", drink)}
                disabled={props.count == 0}
                onclick={dec}
            >{ "-" }</button>
            <input type="number" class="drink-count" value={props.count.to_string()} disabled=true />
            <button class="counter-button"
                aria-label={format!("increase {}", drink)}
                onclick={inc}
            >{ "+" }</button>
            <span class="drink-unit">{ DRINK_UNIT_LABEL }</span>
        </div>
    }
}

/// Verdict line, estimated BAC and disclaimer.
#[derive(Properties, PartialEq)]
pub struct VerdictProps {
    pub evaluation: Evaluation,
    pub palette: Palette,
}

#[function_component(Verdict)]
pub fn verdict(props: &VerdictProps) -> Html {
    let verdict = props.evaluation.verdict();
    let style = format!("color: {};", props.palette.verdict_color(verdict.is_ready()));

    html! {
        <div class="verdict">
            <h2 class="verdict-message" {style}>{ verdict.message() }</h2>
            <div class="bac-estimate">
                { format!("Estimated BAC: {}", format_bac_percent(props.evaluation.bac)) }
            </div>
            <p class="disclaimer">{ DISCLAIMER }</p>
        </div>
    }
}

/// Header bar with the theme switch.
#[derive(Properties, PartialEq)]
pub struct AppBarProps {
    pub title: AttrValue,
    pub mode: ThemeMode,
    pub on_toggle: Callback<()>,
}

#[function_component(AppBar)]
pub fn app_bar(props: &AppBarProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    html! {
        <header class="app-bar">
            <h1 class="app-title">{ props.title.clone() }</h1>
            <button class="theme-toggle" aria-label="toggle theme" {onclick}>
                { props.mode.toggle_icon() }
            </button>
        </header>
    }
}
