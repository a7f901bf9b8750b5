use crate::mvi::UiState;

/// Snapshot of the converter: raw field text and the last-known rate.
///
/// Both derived amounts are computed on demand and never stored, so the
/// state cannot drift out of sync with itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ConverterState {
    input_text: Option<String>,
    rate: Option<f64>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            input_text: Some("100".to_string()),
            rate: None,
        }
    }
}

impl UiState for ConverterState {}

impl ConverterState {
    pub fn input_text(&self) -> Option<&str> {
        self.input_text.as_deref()
    }

    /// Last successfully fetched USD-per-EUR rate, if any.
    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    /// The field text parsed as a number, or `None` when the text is
    /// absent or not numeric. Used by the view as the invalid-input cue.
    pub fn input_amount(&self) -> Option<f64> {
        self.input_text.as_deref().and_then(|t| t.parse().ok())
    }

    /// Converted amount in USD; present only when both the input parses
    /// and a rate has been fetched.
    pub fn output_amount(&self) -> Option<f64> {
        match (self.input_amount(), self.rate) {
            (Some(input), Some(rate)) => Some(input * rate),
            _ => None,
        }
    }

    pub(super) fn with_input_text(mut self, text: Option<String>) -> Self {
        self.input_text = text;
        self
    }

    pub(super) fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }
}
