use crate::converter::command::Command;
use crate::converter::intent::ConverterIntent;
use crate::converter::state::ConverterState;
use crate::mvi::Reducer;

/// The converter reducer. Carries the rates endpoint so a `Reload` can be
/// described as a concrete fetch; everything else about it is pure.
pub struct ConverterReducer {
    endpoint: String,
}

impl ConverterReducer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Reducer for ConverterReducer {
    type State = ConverterState;
    type Intent = ConverterIntent;
    type Command = Command;

    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Self::Command>) {
        match intent {
            ConverterIntent::SetInputText(text) => (state.with_input_text(text), None),
            ConverterIntent::DataReceived(data) => {
                // Stale-rate-on-error: anything short of a well-formed
                // response leaves the previous rate in place.
                match data.as_deref().and_then(extract_usd_rate) {
                    Some(rate) => (state.with_rate(rate), None),
                    None => (state, None),
                }
            }
            ConverterIntent::Reload => {
                let command = Command::LoadData {
                    url: self.endpoint.clone(),
                    on_complete: ConverterIntent::DataReceived,
                };
                (state, Some(command))
            }
        }
    }
}

/// Lenient probe for `{"rates": {"USD": <number>, ...}}`.
///
/// Non-JSON bodies, missing keys, and wrong types all collapse to `None`;
/// the caller treats that as "unusable response", not an error.
fn extract_usd_rate(body: &[u8]) -> Option<f64> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("rates")?.get("USD")?.as_f64()
}
