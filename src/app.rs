use crate::config::Config;
use crate::core::search::report::{MatchReport, format_score};
use crate::core::search::Ranker;
use crate::core::state::SelectionState;
use crate::error::{PickError, PickResult};
use crate::runtime::{Outcome, Runtime};
use crate::source::read_candidates;
use crate::terminal::Console;
use crate::ui::renderer::Renderer;
use std::io::{self, Read, Write};

/// Runs one invocation: reads candidates from `input`, then either answers
/// without a terminal (single candidate, `--show-matches`) or opens one via
/// `connect` and lets the user pick. The chosen line goes to `output`.
pub fn run<R, W, C, F>(config: &Config, input: R, mut output: W, connect: F) -> PickResult<Outcome>
where
    R: Read,
    W: Write,
    C: Console,
    F: FnOnce() -> io::Result<C>,
{
    let candidates = read_candidates(input)?;
    tracing::info!(candidates = candidates.len(), "input read");

    if candidates.is_empty() {
        return Err(PickError::NoInput);
    }

    if let Some(query) = config.show_matches.as_deref() {
        write_matches(config, query, &candidates, &mut output)?;
        return Ok(Outcome::Listed);
    }

    if let [only] = candidates.as_slice() {
        tracing::info!("single candidate, skipping prompt");
        writeln!(output, "{only}")?;
        output.flush()?;
        return Ok(Outcome::Selected(only.clone()));
    }

    let state = SelectionState::new(candidates, config.lines).with_query(config.query.clone());
    let console = connect()?;
    let mut runtime = Runtime::new(state, console, Renderer::new(config.renderer_config()));
    let result = runtime.run();

    let mut console = runtime.into_terminal();
    if let Err(err) = console.restore() {
        tracing::warn!(error = %err, "failed to restore terminal");
    }

    let outcome = result?;
    tracing::info!(?outcome, "session finished");
    if let Outcome::Selected(line) = &outcome {
        writeln!(output, "{line}")?;
        output.flush()?;
    }
    Ok(outcome)
}

fn write_matches<W: Write>(
    config: &Config,
    query: &str,
    candidates: &[String],
    output: &mut W,
) -> PickResult<()> {
    let mut ranker = Ranker::new();
    let matches = ranker.rank(query, candidates);
    tracing::info!(query, matches = matches.len(), "listing matches");

    if config.json {
        let reports = MatchReport::build(&mut ranker, query, candidates, &matches);
        serde_json::to_writer(&mut *output, &reports)?;
        writeln!(output)?;
    } else {
        for entry in &matches {
            let text = &candidates[entry.index];
            if config.show_scores {
                writeln!(output, "{} {text}", format_score(entry.score))?;
            } else {
                writeln!(output, "{text}")?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
