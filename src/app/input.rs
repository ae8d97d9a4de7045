//! Ticker entry: keystroke capture and submit triggers.

/// Keys the input box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Something the user did to the input area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input box content changed to this raw value.
    Changed(String),
    /// A key was pressed while the input box had focus.
    KeyDown(Key),
    /// The submit button was clicked.
    SubmitClicked,
}

/// What a captured event asks the session to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Submit,
}

/// The ticker currently typed into the input box.
///
/// Always stored upper-cased. Empty is a valid state but never a valid submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerInput {
    value: String,
}

impl TickerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value with `raw`, upper-cased.
    pub fn set(&mut self, raw: &str) {
        self.value = raw.to_uppercase();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `true` when there is nothing worth submitting.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Applies `event` and reports whether it triggers a submission.
    ///
    /// `submit_enabled` mirrors the button state: clicks on a disabled button are
    /// ignored, while Enter is always honored.
    pub fn capture(&mut self, event: InputEvent, submit_enabled: bool) -> InputAction {
        match event {
            InputEvent::Changed(raw) => {
                self.set(&raw);
                InputAction::None
            }
            InputEvent::KeyDown(Key::Enter) => InputAction::Submit,
            InputEvent::KeyDown(Key::Other) => InputAction::None,
            InputEvent::SubmitClicked if submit_enabled => InputAction::Submit,
            InputEvent::SubmitClicked => InputAction::None,
        }
    }
}
