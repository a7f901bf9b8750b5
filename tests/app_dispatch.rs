use fxconv::converter::{Command, ConverterIntent, ConverterReducer};
use fxconv::ui::app::App;

const ENDPOINT: &str = "https://rates.example/latest?base=EUR";

fn make_app() -> App {
    App::new(ConverterReducer::new(ENDPOINT))
}

#[test]
fn new_app_exposes_defaults() {
    let app = make_app();
    assert_eq!(app.endpoint(), ENDPOINT);
    assert_eq!(app.state().input_text(), Some("100"));
    assert_eq!(app.state().output_amount(), None);
    assert!(!app.should_quit());
}

#[test]
fn quit_is_sticky() {
    let mut app = make_app();
    app.request_quit();
    assert!(app.should_quit());
}

#[test]
fn reload_round_trip_updates_output() {
    let mut app = make_app();

    let command = app.dispatch(ConverterIntent::Reload);
    let Some(Command::LoadData { url, on_complete }) = command else {
        panic!("expected LoadData command");
    };
    assert_eq!(url, ENDPOINT);

    // Play the effect runner: deliver the body through the command's own
    // constructor, then dispatch the resulting intent.
    let body = br#"{"rates":{"USD":1.1,"GBP":0.87}}"#.to_vec();
    let follow_up = on_complete(Some(body));
    let command = app.dispatch(follow_up);
    assert!(command.is_none());

    let output = app.state().output_amount().expect("output after fetch");
    assert!((output - 110.0).abs() < 1e-9);
}

#[test]
fn failed_fetch_leaves_state_untouched() {
    let mut app = make_app();
    let before = app.state().clone();

    let Some(Command::LoadData { on_complete, .. }) = app.dispatch(ConverterIntent::Reload)
    else {
        panic!("expected LoadData command");
    };
    app.dispatch(on_complete(None));

    assert_eq!(app.state(), &before);
}

#[test]
fn overlapping_reloads_last_response_wins() {
    let mut app = make_app();

    let Some(Command::LoadData { on_complete: first, .. }) =
        app.dispatch(ConverterIntent::Reload)
    else {
        panic!("expected LoadData command");
    };
    let Some(Command::LoadData { on_complete: second, .. }) =
        app.dispatch(ConverterIntent::Reload)
    else {
        panic!("expected LoadData command");
    };

    // Completions may arrive in any order; the later dispatch wins.
    app.dispatch(second(Some(br#"{"rates":{"USD":1.2}}"#.to_vec())));
    app.dispatch(first(Some(br#"{"rates":{"USD":1.3}}"#.to_vec())));
    assert_eq!(app.state().rate(), Some(1.3));
}
