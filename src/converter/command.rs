use crate::converter::intent::ConverterIntent;

/// Effect descriptions the reducer can emit.
///
/// The reducer never touches the network; it hands one of these to the
/// effect runner, which performs the fetch and feeds the wrapped result
/// back in as a new intent. Keeping the constructor as a plain fn pointer
/// keeps commands inspectable and the reducer testable offline.
#[derive(Debug)]
pub enum Command {
    LoadData {
        url: String,
        on_complete: fn(Option<Vec<u8>>) -> ConverterIntent,
    },
}
