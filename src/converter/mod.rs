//! The conversion core: state, intents, commands, and the reducer.
//!
//! Everything here is pure. Network effects are only described (as
//! [`Command`] values) and executed by `crate::rates`.

mod command;
mod intent;
mod reducer;
mod state;

pub use command::Command;
pub use intent::ConverterIntent;
pub use reducer::ConverterReducer;
pub use state::ConverterState;
