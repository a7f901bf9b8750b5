use crate::mvi::Intent;

/// Messages the converter reducer understands.
#[derive(Debug)]
pub enum ConverterIntent {
    /// The user edited the input field. `None` means the field is empty.
    SetInputText(Option<String>),
    /// A fetch completed. `None` means the transport failed entirely;
    /// `Some` carries the raw response body, valid or not.
    DataReceived(Option<Vec<u8>>),
    /// The user asked for a fresh rate.
    Reload,
}

impl Intent for ConverterIntent {}
