use crate::machine::ButtonState;
use crate::models::{DisplayState, GeneratedImage, ImageView};
use crate::selector::DateSelector;

/// Holds at most one generated image.
#[derive(Debug, Clone, Default)]
pub struct ResultSlot {
    current: Option<GeneratedImage>,
}

impl ResultSlot {
    /// Replaces whatever was shown before.
    pub fn render(&mut self, image: GeneratedImage) {
        self.current = Some(image);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&GeneratedImage> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    pub selector: DateSelector,
    pub result: ResultSlot,
    pub error: Option<String>,
    button: ButtonState,
    busy: bool,
}

impl ViewModel {
    pub fn new(current_year: i32) -> Self {
        Self {
            selector: DateSelector::new(current_year),
            result: ResultSlot::default(),
            error: None,
            button: ButtonState::Enter,
            busy: false,
        }
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Busy tracks the button: the cursor spins exactly while waiting.
    pub fn set_button(&mut self, next: ButtonState) {
        self.button = next;
        self.busy = next == ButtonState::Wait;
    }
}

pub fn render(view: &ViewModel) -> DisplayState {
    let selector = &view.selector;
    DisplayState {
        year_options: selector.year_options().iter().map(|y| format!("{y:04}")).collect(),
        month_options: selector.month_options().iter().map(|m| format!("{m:02}")).collect(),
        day_options: selector.day_options().iter().map(|d| format!("{d:02}")).collect(),
        year: selector.year().map(|y| format!("{y:04}")).unwrap_or_default(),
        month: selector.month().map(|m| format!("{m:02}")).unwrap_or_default(),
        day: selector.day().map(|d| format!("{d:02}")).unwrap_or_default(),
        selected_date: selector.describe(),
        error: view.error.clone(),
        button_label: view.button.label().to_string(),
        button_enabled: view.button.is_enabled(),
        busy: view.busy,
        image: view.result.current().map(|image| ImageView {
            url: image.url.clone(),
            alt: format!("Generated image: {}", image.prompt),
            caption: image.prompt.clone(),
        }),
    }
}
