//! Main module for the Elevate Drive widget using Yew.
//! Wires UI components, the input reducer and the theme switch.

use elevate_drive::{
    evaluate_input,
    theme::ThemeMode,
    utils::{format_weight_kg, parse_weight_to_kg},
    CalculatorAction, CalculatorInput, DrinkCounts, DrinkType, Gender,
};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{AppBar, DrinkCounter, GenderToggle, Verdict, WeightSlider};
use config::*;
use hooks::{use_calculator_input, use_validated_input};

/// Calculator card: owns the input value and recomputes on every render.
#[derive(Properties, PartialEq)]
struct CalculatorCardProps {
    mode: ThemeMode,
}

#[function_component(CalculatorCard)]
fn calculator_card(props: &CalculatorCardProps) -> Html {
    let palette = props.mode.palette();
    let input = use_calculator_input(CalculatorInput::new(
        DEFAULT_WEIGHT_KG,
        Gender::Male,
        DrinkCounts::default(),
    ));
    let current = input.0;
    let evaluation = evaluate_input(&current);

    let weight_text = {
        let dispatcher = input.dispatcher();
        use_validated_input::<f64>(
            format_weight_kg(DEFAULT_WEIGHT_KG),
            Rc::new(parse_weight_to_kg),
            Rc::new(|w: &f64| format_weight_kg(*w)),
            Callback::from(move |w: f64| dispatcher.dispatch(CalculatorAction::SetWeight(w))),
        )
    };

    let onslide = {
        let dispatcher = input.dispatcher();
        let sync = weight_text.sync.clone();
        Callback::from(move |w: f64| {
            dispatcher.dispatch(CalculatorAction::SetWeight(w));
            sync.emit(w);
        })
    };
    let on_select_gender = {
        let dispatcher = input.dispatcher();
        Callback::from(move |g: Gender| dispatcher.dispatch(CalculatorAction::SetGender(g)))
    };
    let on_increment = {
        let dispatcher = input.dispatcher();
        Callback::from(move |d: DrinkType| dispatcher.dispatch(CalculatorAction::Increment(d)))
    };
    let on_decrement = {
        let dispatcher = input.dispatcher();
        Callback::from(move |d: DrinkType| dispatcher.dispatch(CalculatorAction::Decrement(d)))
    };

    html! {
        <div class="card">
            <h2 class="card-title">{ CARD_TITLE }</h2>
            <h3 class="card-subtitle">{ CARD_SUBTITLE }</h3>

            <WeightSlider
                weight_kg={current.profile.weight_kg}
                text={weight_text.text.clone()}
                error={weight_text.error.clone()}
                {onslide}
                on_text_input={weight_text.on_text_input.clone()}
                on_commit={weight_text.on_commit.clone()}
            />

            <GenderToggle gender={current.profile.gender} on_select={on_select_gender} />

            <div class="form-group">
                <label>{ "What did you drink?" }</label>
                <div class="drink-list">
                    { DrinkType::ALL.iter().map(|&drink| html! {
                        <DrinkCounter
                            key={drink.label()}
                            {drink}
                            count={current.drinks.get(drink)}
                            on_increment={on_increment.clone()}
                            on_decrement={on_decrement.clone()}
                        />
                    }).collect::<Html>() }
                </div>
            </div>

            <Verdict {evaluation} {palette} />
        </div>
    }
}

/// App root holding the theme mode.
#[function_component]
pub fn App() -> Html {
    let mode = use_state(|| DEFAULT_THEME);
    let on_toggle = {
        let mode = mode.clone();
        Callback::from(move |_: ()| {
            let next = mode.toggled();
            log::debug!("Switching theme to {:?}", next);
            mode.set(next);
        })
    };
    let style = mode.palette().css_vars();

    html! {
        <div class="app" {style}>
            <AppBar title={APP_TITLE} mode={*mode} {on_toggle} />
            <main class="content">
                <CalculatorCard mode={*mode} />
            </main>
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();
    log::info!("Starting {}", APP_TITLE);
    yew::Renderer::<App>::new().render();
}
