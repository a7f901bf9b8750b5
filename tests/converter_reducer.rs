use fxconv::converter::{Command, ConverterIntent, ConverterReducer, ConverterState};
use fxconv::mvi::Reducer;

const ENDPOINT: &str = "http://api.fixer.io/latest?base=EUR";

fn reducer() -> ConverterReducer {
    ConverterReducer::new(ENDPOINT)
}

fn rates_body(usd: &str) -> Vec<u8> {
    format!(r#"{{"base":"EUR","date":"2017-07-18","rates":{{"GBP":0.8721,"USD":{}}}}}"#, usd)
        .into_bytes()
}

fn approx(actual: Option<f64>, expected: f64) -> bool {
    matches!(actual, Some(v) if (v - expected).abs() < 1e-9)
}

#[test]
fn set_input_text_stores_parseable_text() {
    let (state, command) = reducer().reduce(
        ConverterState::default(),
        ConverterIntent::SetInputText(Some("42.5".to_string())),
    );
    assert_eq!(state.input_text(), Some("42.5"));
    assert_eq!(state.input_amount(), Some(42.5));
    assert!(command.is_none());
}

#[test]
fn set_input_text_with_garbage_clears_amount_not_text() {
    let (state, command) = reducer().reduce(
        ConverterState::default(),
        ConverterIntent::SetInputText(Some("abc".to_string())),
    );
    assert_eq!(state.input_text(), Some("abc"));
    assert_eq!(state.input_amount(), None);
    assert!(command.is_none());
}

#[test]
fn set_input_text_never_returns_command() {
    let inputs = [Some("100".to_string()), Some("".to_string()), None];
    for text in inputs {
        let (_, command) = reducer().reduce(
            ConverterState::default(),
            ConverterIntent::SetInputText(text),
        );
        assert!(command.is_none());
    }
}

#[test]
fn set_input_text_is_idempotent() {
    let r = reducer();
    let (once, _) = r.reduce(
        ConverterState::default(),
        ConverterIntent::SetInputText(Some("7.5".to_string())),
    );
    let (twice, _) = r.reduce(
        once.clone(),
        ConverterIntent::SetInputText(Some("7.5".to_string())),
    );
    assert_eq!(once, twice);
}

#[test]
fn reload_returns_load_data_for_endpoint_and_leaves_state_alone() {
    let r = reducer();
    let before = ConverterState::default();
    let (after, command) = r.reduce(before.clone(), ConverterIntent::Reload);
    assert_eq!(before, after);

    match command {
        Some(Command::LoadData { url, .. }) => assert_eq!(url, ENDPOINT),
        None => panic!("expected LoadData command"),
    }

    // Same contract once a rate is already loaded.
    let (loaded, _) = r.reduce(after, ConverterIntent::DataReceived(Some(rates_body("1.2"))));
    let (after, command) = r.reduce(loaded.clone(), ConverterIntent::Reload);
    assert_eq!(loaded, after);
    assert!(matches!(command, Some(Command::LoadData { .. })));
}

#[test]
fn reload_command_wraps_bytes_as_data_received() {
    let (_, command) = reducer().reduce(ConverterState::default(), ConverterIntent::Reload);
    let Some(Command::LoadData { on_complete, .. }) = command else {
        panic!("expected LoadData command");
    };

    let body = rates_body("1.2");
    match on_complete(Some(body.clone())) {
        ConverterIntent::DataReceived(Some(bytes)) => assert_eq!(bytes, body),
        other => panic!("expected DataReceived, got {:?}", other),
    }
    assert!(matches!(
        on_complete(None),
        ConverterIntent::DataReceived(None)
    ));
}

#[test]
fn data_received_valid_body_sets_rate() {
    let (state, command) = reducer().reduce(
        ConverterState::default(),
        ConverterIntent::DataReceived(Some(rates_body("1.2"))),
    );
    assert_eq!(state.rate(), Some(1.2));
    assert!(command.is_none());
}

#[test]
fn data_received_malformed_body_keeps_previous_rate() {
    let r = reducer();
    let (state, _) = r.reduce(
        ConverterState::default(),
        ConverterIntent::DataReceived(Some(rates_body("1.2"))),
    );

    let malformed: [&[u8]; 4] = [
        b"not json at all",
        br#"{"rates":"USD"}"#,
        br#"{"rates":{"GBP":0.87}}"#,
        br#"{"rates":{"USD":null}}"#,
    ];
    let mut state = state;
    for body in malformed {
        let (next, command) = r.reduce(state, ConverterIntent::DataReceived(Some(body.to_vec())));
        assert_eq!(next.rate(), Some(1.2), "rate regressed on {:?}", body);
        assert!(command.is_none());
        state = next;
    }
}

#[test]
fn data_received_absent_bytes_is_noop() {
    let r = reducer();
    let (before, _) = r.reduce(
        ConverterState::default(),
        ConverterIntent::DataReceived(Some(rates_body("1.05"))),
    );
    let (after, command) = r.reduce(before.clone(), ConverterIntent::DataReceived(None));
    assert_eq!(before, after);
    assert!(command.is_none());
}

#[test]
fn end_to_end_scenario() {
    let r = reducer();

    // Fresh state: "100" entered, no rate yet, so no output.
    let state = ConverterState::default();
    assert_eq!(state.input_text(), Some("100"));
    assert_eq!(state.output_amount(), None);

    let (state, _) = r.reduce(state, ConverterIntent::DataReceived(Some(rates_body("1.1"))));
    assert!(approx(state.output_amount(), 110.0));

    // Garbage input keeps the rate but kills both derived amounts.
    let (state, _) = r.reduce(state, ConverterIntent::SetInputText(Some("abc".to_string())));
    assert_eq!(state.input_amount(), None);
    assert_eq!(state.output_amount(), None);
    assert_eq!(state.rate(), Some(1.1));
}

#[test]
fn absent_then_numeric_input_scenario() {
    let r = reducer();
    let (state, _) = r.reduce(ConverterState::default(), ConverterIntent::SetInputText(None));
    assert_eq!(state.input_text(), None);
    assert_eq!(state.input_amount(), None);

    let (state, _) = r.reduce(state, ConverterIntent::SetInputText(Some("50".to_string())));
    assert_eq!(state.input_amount(), Some(50.0));
}
