use asesmen_cli::render::{
    DISCLAIMER, bar, catalog_listing, progress_line, question_card, result_view, results_action,
    welcome,
};
use asesmen_core::{Progress, ResultRoute, Session, generate_catalog};

#[test]
fn bar_fills_proportionally() {
    assert_eq!(bar(0, 10), "[..........]");
    assert_eq!(bar(50, 10), "[#####.....]");
    assert_eq!(bar(100, 10), "[##########]");
    assert_eq!(bar(27, 10), "[##........]");
    assert_eq!(bar(250, 4), "[####]");
}

#[test]
fn results_action_reflects_completion() {
    assert_eq!(results_action(true), "Lihat Hasil Asesmen");
    assert_eq!(results_action(false), "Lengkapi semua pertanyaan");
}

#[test]
fn welcome_lists_all_categories() {
    let text = welcome();
    assert!(text.starts_with("Asesmen Perkembangan Anak"));
    for name in ["Autisme", "ADHD", "Intellectual Disability"] {
        assert!(text.contains(name), "{name}");
    }
}

#[test]
fn progress_line_shows_counts() {
    let line = progress_line(
        Progress {
            answered: 27,
            total: 54,
        },
        10,
    );
    assert_eq!(line, "Progres: 27/54 [#####.....]");
}

#[test]
fn question_card_marks_current_answer() {
    let session = Session::start().with_answer(18, false).unwrap();
    let card = question_card(18, 54, session.question(18).unwrap());

    assert!(card.starts_with("Pertanyaan 19 dari 54 · ADHD"));
    assert!(card.contains("Apakah anak mudah ceroboh?"));
    assert!(card.contains("○ Ya (y)   ● Tidak (n)"));
}

#[test]
fn result_view_uses_shared_percent_formula() {
    let scores = ResultRoute::parse("result/5/9/18").unwrap().scores().unwrap();
    let view = result_view(&scores, 10);

    assert!(view.contains("Spektrum Autisme\n  5 dari 18 pertanyaan  27%"));
    assert!(view.contains("ADHD\n  9 dari 18 pertanyaan  50%"));
    assert!(view.contains("Intellectual Disability\n  18 dari 18 pertanyaan  100%"));
    assert!(view.contains(DISCLAIMER));
}

#[test]
fn catalog_listing_numbers_every_question() {
    let listing = catalog_listing(&generate_catalog());
    assert!(listing.starts_with("## Spektrum Autisme\n 1. "));
    assert!(listing.contains("\n## ADHD\n19. Apakah anak mudah ceroboh?"));
    assert!(listing.contains("54. Apakah anak kadang tantrum"));
}
