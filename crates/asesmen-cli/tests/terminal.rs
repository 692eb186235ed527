use std::io::Cursor;

use asesmen_cli::config::AppConfig;
use asesmen_cli::flow::{Flow, Screen};
use asesmen_cli::terminal::{Outcome, run};
use asesmen_core::ResultRoute;

fn drive(script: &str) -> (Outcome, String, Flow) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut flow = Flow::new();
    let outcome = run(&mut input, &mut output, &mut flow, &AppConfig::default()).unwrap();
    (outcome, String::from_utf8(output).unwrap(), flow)
}

fn answers(line: &str, count: usize) -> String {
    format!("{line}\n").repeat(count)
}

#[test]
fn all_yes_reaches_full_results() {
    let script = format!("\n{}\n", answers("y", 54));
    let (outcome, output, flow) = drive(&script);

    let route = ResultRoute {
        autism: 18,
        adhd: 18,
        intellectual_disability: 18,
    };
    assert_eq!(outcome, Outcome::Completed(route));
    assert_eq!(flow.screen(), Screen::Result(route));
    assert!(output.contains("Lihat Hasil Asesmen"));
    assert!(output.contains("18 dari 18 pertanyaan  100%"));
    assert!(output.contains("Konsultasikan dengan ahli"));
}

#[test]
fn quitting_on_welcome_ends_without_session() {
    let (outcome, output, flow) = drive("q\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("Asesmen Perkembangan Anak"));
    assert!(flow.session().is_none());
}

#[test]
fn end_of_input_mid_questionnaire_quits() {
    let script = format!("\n{}", answers("n", 10));
    let (outcome, _, flow) = drive(&script);
    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(flow.session().unwrap().answered_count(), 10);
}

#[test]
fn skipped_question_is_revisited_before_results() {
    // Skip the first question, answer the rest, then answer the skipped one.
    let script = format!("\ns\n{}y\n\n", answers("n", 53));
    let (outcome, output, _) = drive(&script);

    assert!(output.contains("Lengkapi semua pertanyaan"));
    assert_eq!(
        outcome,
        Outcome::Completed(ResultRoute {
            autism: 1,
            adhd: 0,
            intellectual_disability: 0,
        })
    );
}

#[test]
fn back_allows_overwriting_previous_answer() {
    // y for q1, back, n for q1, then n for the remaining 53.
    let script = format!("\ny\nb\nn\n{}\n", answers("n", 53));
    let (outcome, _, _) = drive(&script);
    assert_eq!(
        outcome,
        Outcome::Completed(ResultRoute {
            autism: 0,
            adhd: 0,
            intellectual_disability: 0,
        })
    );
}

#[test]
fn unrecognised_input_prompts_again() {
    let script = format!("\nmaybe\n{}\n", answers("y", 54));
    let (outcome, output, _) = drive(&script);
    assert!(output.contains("Jawab dengan y atau n."));
    assert!(matches!(outcome, Outcome::Completed(_)));
}

#[test]
fn restart_after_results_begins_fresh_attempt() {
    let script = format!("\n{}u\nq\n", answers("y", 54));
    let (outcome, _, flow) = drive(&script);
    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(flow.screen(), Screen::Welcome);
    assert!(flow.session().is_none());
}
