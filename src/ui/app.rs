use crate::converter::{Command, ConverterIntent, ConverterReducer, ConverterState};
use crate::mvi::Reducer;

/// Owner of the converter state. All dispatches happen on the main loop
/// thread; the reducer does no locking and relies on that.
pub struct App {
    state: ConverterState,
    reducer: ConverterReducer,
    should_quit: bool,
}

impl App {
    pub fn new(reducer: ConverterReducer) -> Self {
        Self {
            state: ConverterState::default(),
            reducer,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        self.reducer.endpoint()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Run an intent through the reducer and store the new state.
    ///
    /// Any returned command must be handed to the effect runner by the
    /// caller; the app itself never performs effects.
    pub fn dispatch(&mut self, intent: ConverterIntent) -> Option<Command> {
        let (state, command) = self.reducer.reduce(std::mem::take(&mut self.state), intent);
        self.state = state;
        command
    }
}
