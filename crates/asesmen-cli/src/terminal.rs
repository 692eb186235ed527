//! Interactive line-based driver for [`Flow`].

use std::io::{BufRead, Write};

use asesmen_core::ResultRoute;

use crate::config::AppConfig;
use crate::flow::{Flow, FlowError};
use crate::render;

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user reached the result screen and then exited.
    Completed(ResultRoute),
    /// The user quit (or input ended) before finishing.
    Quit,
}

enum Input {
    Answer(bool),
    Back,
    Skip,
    Quit,
    Other,
}

fn read_input<R: BufRead>(input: &mut R) -> eyre::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn parse_answer(line: &str) -> Input {
    match line {
        "y" | "ya" => Input::Answer(true),
        "n" | "t" | "tidak" => Input::Answer(false),
        "b" => Input::Back,
        "s" => Input::Skip,
        "q" => Input::Quit,
        _ => Input::Other,
    }
}

/// Run welcome → questionnaire → result until the user quits.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    flow: &mut Flow,
    config: &AppConfig,
) -> eyre::Result<Outcome> {
    loop {
        write!(output, "{}", render::welcome())?;
        writeln!(output, "\nTekan Enter untuk mulai, q untuk keluar.")?;
        match read_input(input)?.as_deref() {
            None | Some("q") => return Ok(Outcome::Quit),
            Some(_) => {}
        }

        let Some(route) = questionnaire(input, output, flow, config)? else {
            return Ok(Outcome::Quit);
        };

        let scores = flow
            .result_scores()
            .ok_or_else(|| eyre::eyre!("result screen has no scores"))?;
        write!(output, "\n{}", render::result_view(&scores, config.bar_width))?;
        writeln!(output, "\nu = ulangi asesmen, Enter = selesai")?;

        match read_input(input)?.as_deref() {
            Some("u") => flow.restart(),
            _ => return Ok(Outcome::Completed(route)),
        }
    }
}

/// Walk the question list. Returns the result route once all questions are
/// answered, or `None` if the user quits.
fn questionnaire<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    flow: &mut Flow,
    config: &AppConfig,
) -> eyre::Result<Option<ResultRoute>> {
    let total = flow.start_assessment().total();
    writeln!(output, "\ny = Ya, n = Tidak, b = kembali, s = lewati, q = keluar")?;

    let mut cursor = 0;
    loop {
        if cursor >= total {
            match flow.request_results() {
                Ok(route) => {
                    writeln!(output, "\n{}", render::results_action(true))?;
                    return Ok(Some(route));
                }
                Err(FlowError::Incomplete { .. }) => {
                    writeln!(output, "\n{}", render::results_action(false))?;
                    cursor = flow
                        .session()
                        .and_then(|s| s.first_unanswered())
                        .unwrap_or(0);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let session = flow.session().ok_or(FlowError::NotStarted)?;
        let question = session
            .question(cursor)
            .ok_or_else(|| eyre::eyre!("question {cursor} missing from session"))?;
        writeln!(
            output,
            "\n{}",
            render::progress_line(session.progress(), config.bar_width)
        )?;
        write!(output, "{}", render::question_card(cursor, total, question))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_input(input)? else {
            return Ok(None);
        };
        match parse_answer(&line) {
            Input::Answer(value) => {
                let progress = flow.answer(cursor, value)?;
                // Once everything is answered, go straight to results.
                cursor = if progress.is_complete() { total } else { cursor + 1 };
            }
            Input::Back => cursor = cursor.saturating_sub(1),
            Input::Skip => cursor += 1,
            Input::Quit => return Ok(None),
            Input::Other => writeln!(output, "Jawab dengan y atau n.")?,
        }
    }
}
