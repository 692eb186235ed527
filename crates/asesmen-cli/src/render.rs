//! Plain-text views for the terminal.

use std::fmt::Write;

use asesmen_core::scoring::MAX_RAW_COUNT;
use asesmen_core::{Answer, Category, CategoryScores, Progress, Question, ScoreResult};

pub const TITLE: &str = "Asesmen Perkembangan Anak";
pub const DISCLAIMER: &str =
    "Hasil ini hanya sebagai panduan awal. Konsultasikan dengan ahli untuk diagnosis yang akurat.";

/// Label of the results action, depending on whether it is enabled.
pub fn results_action(complete: bool) -> &'static str {
    if complete {
        "Lihat Hasil Asesmen"
    } else {
        "Lengkapi semua pertanyaan"
    }
}

/// A `[####......]` bar filled to `percent` of `width`.
pub fn bar(percent: u32, width: u16) -> String {
    let width = usize::from(width);
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn welcome() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Aplikasi ini membantu menilai aspek perkembangan anak dalam 3 kategori:"
    );
    for category in Category::ALL {
        let _ = writeln!(out, "  • {}", welcome_name(category));
    }
    out
}

fn welcome_name(category: Category) -> &'static str {
    match category {
        Category::Autism => "Autisme",
        Category::Adhd => "ADHD",
        Category::IntellectualDisability => "Intellectual Disability",
    }
}

pub fn progress_line(progress: Progress, width: u16) -> String {
    let percent = if progress.total == 0 {
        0
    } else {
        (progress.answered * 100 / progress.total) as u32
    };
    format!(
        "Progres: {}/{} {}",
        progress.answered,
        progress.total,
        bar(percent, width)
    )
}

pub fn question_card(index: usize, total: usize, question: &Question) -> String {
    let mark = |answer: Answer| if question.answer == answer { "●" } else { "○" };
    format!(
        "Pertanyaan {} dari {} · {}\n{}\n  {} Ya (y)   {} Tidak (n)\n",
        index + 1,
        total,
        question.category.label(),
        question.text,
        mark(Answer::Yes),
        mark(Answer::No),
    )
}

pub fn result_card(result: &ScoreResult, width: u16) -> String {
    format!(
        "{}\n  {} dari {} pertanyaan  {}%\n  {}\n",
        result.category.label(),
        result.raw_count,
        MAX_RAW_COUNT,
        result.percent,
        bar(result.percent, width)
    )
}

pub fn result_view(scores: &CategoryScores, width: u16) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hasil Asesmen");
    let _ = writeln!(out, "Perkembangan Anak");
    let _ = writeln!(out);
    for result in scores.iter() {
        let _ = writeln!(out, "{}", result_card(result, width));
    }
    let _ = writeln!(out, "Catatan Penting");
    let _ = writeln!(out, "{DISCLAIMER}");
    out
}

/// Numbered listing of the catalog, grouped under category headings.
pub fn catalog_listing(questions: &[Question]) -> String {
    let mut out = String::new();
    let mut current = None;
    for (i, question) in questions.iter().enumerate() {
        if current != Some(question.category) {
            if current.is_some() {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "## {}", question.category.label());
            current = Some(question.category);
        }
        let _ = writeln!(out, "{:>2}. {}", i + 1, question.text);
    }
    out
}
