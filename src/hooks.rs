use elevate_drive::{CalculatorAction, CalculatorInput};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Reducer wrapper so the view layer can own a `CalculatorInput`.
#[derive(Clone, PartialEq, Default)]
pub struct InputState(pub CalculatorInput);

impl Reducible for InputState {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            return self;
        }
        Rc::new(InputState(next))
    }
}

/// Current calculator input plus a dispatcher for control events.
#[hook]
pub fn use_calculator_input(initial: CalculatorInput) -> UseReducerHandle<InputState> {
    use_reducer(move || InputState(initial))
}

/// Holds the state and callbacks for a validated text field.
#[derive(Clone)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Updates the text state on every keystroke.
    pub on_text_input: Callback<InputEvent>,
    /// Parses the current text and, on success, emits the value to `on_valid`.
    pub on_commit: Callback<()>,
    /// Replaces the text with the canonical form of a value set elsewhere.
    pub sync: Callback<T>,
}

/// Custom hook to manage state for a validated text field.
///
/// Parsed values are handed to `on_valid` rather than stored here, so the
/// owning reducer stays the single source of truth.
#[hook]
pub fn use_validated_input<T: Clone + PartialEq + 'static>(
    initial_text: String,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
    format: Rc<dyn Fn(&T) -> String>,
    on_valid: Callback<T>,
) -> ValidatedInput<T> {
    let text_state = use_state(move || initial_text);
    let error_state = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let text = text_state.clone();
        let error_setter = error_state.clone();
        let parse_fn = parse_and_validate.clone();
        let format = format.clone();
        Callback::from(move |_| match parse_fn(text.as_str()) {
            Ok(parsed) => {
                text.set(format(&parsed));
                error_setter.set(None);
                on_valid.emit(parsed);
            }
            Err(msg) => {
                log::debug!("Rejected input '{}': {}", *text, msg);
                error_setter.set(Some(msg));
            }
        })
    };

    let sync = {
        let text = text_state.clone();
        let error_setter = error_state.clone();
        Callback::from(move |value: T| {
            let formatted = format(&value);
            if *text != formatted {
                text.set(formatted);
            }
            error_setter.set(None);
        })
    };

    ValidatedInput {
        text: (*text_state).clone(),
        error: (*error_state).clone(),
        on_text_input,
        on_commit,
        sync,
    }
}
