mod support;

use fzpick::runtime::Runtime;
use fzpick::state::SelectionState;
use fzpick::ui::Renderer;
use fzpick::{Config, Outcome, PickError, app};
use std::cell::Cell;
use std::io;
use support::ScriptedConsole;

struct Session {
    result: Result<Outcome, PickError>,
    output: String,
    restored: bool,
}

fn run_session(config: &Config, input: &str, console: ScriptedConsole) -> Session {
    let restored = console.restored_flag();
    let mut output = Vec::new();
    let result = app::run(config, input.as_bytes(), &mut output, || Ok(console));
    Session {
        result,
        output: String::from_utf8(output).expect("utf8 output"),
        restored: restored.get(),
    }
}

fn pick(config: &Config, input: &str, keys: &[&[u8]]) -> (Result<Outcome, PickError>, String) {
    let session = run_session(config, input, ScriptedConsole::new(keys));
    assert!(session.restored, "console left unrestored");
    (session.result, session.output)
}

fn no_terminal() -> io::Result<ScriptedConsole> {
    panic!("terminal must not be opened")
}

#[test]
fn typed_query_and_arrow_pick_second_best() {
    let (result, output) = pick(
        &Config::default(),
        "apricot\napple\napply\n",
        &[b"ap", b"\x1b[B", b"\r"],
    );
    assert_eq!(result.expect("run"), Outcome::Selected("apply".to_string()));
    assert_eq!(output, "apply\n");
}

#[test]
fn single_line_is_printed_without_a_prompt() {
    let mut output = Vec::new();
    let outcome = app::run(&Config::default(), "only-line\n".as_bytes(), &mut output, no_terminal)
        .expect("run");
    assert_eq!(outcome, Outcome::Selected("only-line".to_string()));
    assert!(outcome.is_success());
    assert_eq!(output, b"only-line\n");
}

#[test]
fn empty_input_fails_without_output() {
    let mut output = Vec::new();
    let result = app::run(&Config::default(), "\n\n".as_bytes(), &mut output, no_terminal);
    assert!(matches!(result, Err(PickError::NoInput)));
    assert!(output.is_empty());
}

#[test]
fn interrupt_cancels_and_prints_nothing() {
    let (result, output) = pick(&Config::default(), "a\nb\n", &[b"a", b"\x03"]);
    let outcome = result.expect("run");
    assert_eq!(outcome, Outcome::Cancelled);
    assert!(!outcome.is_success());
    assert!(output.is_empty());
}

#[test]
fn closed_terminal_cancels() {
    let (result, output) = pick(&Config::default(), "a\nb\n", &[]);
    assert_eq!(result.expect("run"), Outcome::Cancelled);
    assert!(output.is_empty());
}

#[test]
fn confirm_restores_the_console() {
    let session = run_session(&Config::default(), "a\nb\n", ScriptedConsole::new(&[b"\r"]));
    assert!(session.restored);
    assert_eq!(session.result.expect("run"), Outcome::Selected("a".to_string()));
    assert_eq!(session.output, "a\n");
}

#[test]
fn cancel_restores_the_console() {
    let session = run_session(&Config::default(), "a\nb\n", ScriptedConsole::new(&[b"\x03"]));
    assert!(session.restored);
    assert_eq!(session.result.expect("run"), Outcome::Cancelled);
}

#[test]
fn end_of_input_restores_the_console() {
    let session = run_session(&Config::default(), "a\nb\n", ScriptedConsole::new(&[b"b"]));
    assert!(session.restored);
    assert_eq!(session.result.expect("run"), Outcome::Cancelled);
    assert!(session.output.is_empty());
}

#[test]
fn signal_interrupted_read_cancels_and_restores() {
    let console = ScriptedConsole::new(&[b"a"])
        .then_fail(io::Error::new(io::ErrorKind::Interrupted, "interrupted by signal"));
    let session = run_session(&Config::default(), "a\nb\n", console);
    assert!(session.restored);
    assert_eq!(session.result.expect("run"), Outcome::Cancelled);
    assert!(session.output.is_empty());
}

#[test]
fn read_error_restores_before_failing() {
    let console = ScriptedConsole::new(&[b"a"]).then_fail(io::Error::other("tty gone"));
    let session = run_session(&Config::default(), "a\nb\n", console);
    assert!(session.restored);
    assert!(matches!(session.result, Err(PickError::Io(_))));
    assert!(session.output.is_empty());
}

#[test]
fn console_is_opened_only_for_interactive_sessions() {
    let opened = Cell::new(false);
    let mut output = Vec::new();
    let outcome = app::run(&Config::default(), "a\nb\n".as_bytes(), &mut output, || {
        opened.set(true);
        Ok(ScriptedConsole::new(&[b"\r"]))
    })
    .expect("run");
    assert!(opened.get());
    assert_eq!(outcome, Outcome::Selected("a".to_string()));
}

#[test]
fn down_arrow_past_the_matches_confirms_the_last_match() {
    let keys: &[&[u8]] = &[b"be", b"\x1b[B\x1b[B\x1b[B\x1b[B\x1b[B", b"\r"];
    let (result, output) = pick(&Config::default(), "alpha\nbeta\nbeetle\ngamma\n", keys);
    assert_eq!(result.expect("run"), Outcome::Selected("beetle".to_string()));
    assert_eq!(output, "beetle\n");
}

#[test]
fn initial_query_filters_before_the_first_key() {
    let config = Config {
        query: "gam".to_string(),
        ..Config::default()
    };
    let (result, output) = pick(&config, "alpha\nbeta\ngamma\n", &[b"\r"]);
    assert_eq!(result.expect("run"), Outcome::Selected("gamma".to_string()));
    assert_eq!(output, "gamma\n");
}

#[test]
fn escape_sequence_split_across_reads() {
    let (result, _) = pick(&Config::default(), "one\ntwo\nthree\n", &[b"\x1b", b"[", b"B", b"\r"]);
    assert_eq!(result.expect("run"), Outcome::Selected("two".to_string()));
}

#[test]
fn visible_rows_bound_the_selection() {
    let config = Config {
        lines: 2,
        ..Config::default()
    };
    let keys: &[&[u8]] = &[b"\x1b[B\x1b[B\x1b[B", b"\r"];
    let (result, _) = pick(&config, "r1\nr2\nr3\nr4\n", keys);
    assert_eq!(result.expect("run"), Outcome::Selected("r2".to_string()));
}

#[test]
fn show_matches_lists_ranked_candidates() {
    let config = Config {
        show_matches: Some("ap".to_string()),
        ..Config::default()
    };
    let mut output = Vec::new();
    let outcome = app::run(
        &config,
        "apricot\nbanana\napple\napply\n".as_bytes(),
        &mut output,
        no_terminal,
    )
    .expect("run");
    assert_eq!(outcome, Outcome::Listed);
    assert_eq!(String::from_utf8(output).expect("utf8"), "apple\napply\napricot\n");
}

#[test]
fn show_matches_with_scores() {
    let config = Config {
        show_matches: Some("ab".to_string()),
        show_scores: true,
        ..Config::default()
    };
    let mut output = Vec::new();
    app::run(&config, "ab\nzzz\n".as_bytes(), &mut output, no_terminal).expect("run");
    assert_eq!(String::from_utf8(output).expect("utf8"), "(  inf) ab\n");
}

#[test]
fn show_matches_as_json() {
    let config = Config {
        show_matches: Some("fb".to_string()),
        json: true,
        ..Config::default()
    };
    let mut output = Vec::new();
    app::run(&config, "foo/bar\nnope\n".as_bytes(), &mut output, no_terminal).expect("run");

    let value: serde_json::Value = serde_json::from_slice(&output).expect("json");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "foo/bar");
    assert_eq!(entries[0]["positions"], serde_json::json!([0, 4]));
    assert!(entries[0]["score"].is_f64());
}

#[test]
fn prompt_and_matches_are_drawn_on_the_console() {
    let state = SelectionState::new(vec!["red".to_string(), "green".to_string()], 10);
    let mut runtime = Runtime::new(state, ScriptedConsole::new(&[b"g", b"\r"]), Renderer::default());
    let outcome = runtime.run().expect("run");
    assert_eq!(outcome, Outcome::Selected("green".to_string()));

    let drawn = &runtime.terminal().drawn;
    assert!(drawn.contains("> g"));
    assert!(drawn.contains("green"));
    assert!(drawn.contains("..."));
}
