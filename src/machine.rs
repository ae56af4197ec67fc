use std::fmt;

/// State of the single trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Enter,
    Wait,
    Retry,
    Clear,
}

impl ButtonState {
    pub fn label(self) -> &'static str {
        match self {
            ButtonState::Enter => "Enter",
            ButtonState::Wait => "Wait",
            ButtonState::Retry => "Retry",
            ButtonState::Clear => "Clear",
        }
    }

    /// The control is disabled exactly while a lookup is in flight.
    pub fn is_enabled(self) -> bool {
        self != ButtonState::Wait
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEffect {
    BeginLookup,
    ShowFieldError,
    ResetAll,
    /// Pressed while disabled.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

pub fn press(current: ButtonState, fields_valid: bool) -> (ButtonState, PressEffect) {
    match current {
        ButtonState::Enter | ButtonState::Retry if fields_valid => {
            (ButtonState::Wait, PressEffect::BeginLookup)
        }
        ButtonState::Enter | ButtonState::Retry => (current, PressEffect::ShowFieldError),
        ButtonState::Wait => (ButtonState::Wait, PressEffect::Rejected),
        ButtonState::Clear => (ButtonState::Enter, PressEffect::ResetAll),
    }
}

/// Result of the lookup chain. Only meaningful while waiting.
pub fn settle(current: ButtonState, outcome: Outcome) -> ButtonState {
    match (current, outcome) {
        (ButtonState::Wait, Outcome::Succeeded) => ButtonState::Clear,
        (ButtonState::Wait, Outcome::Failed) => ButtonState::Retry,
        (other, _) => other,
    }
}

/// A date field changed. Without a rendered image the label goes back to Enter.
pub fn date_edited(current: ButtonState, image_shown: bool) -> ButtonState {
    match current {
        ButtonState::Enter | ButtonState::Retry if !image_shown => ButtonState::Enter,
        other => other,
    }
}
