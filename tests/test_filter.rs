//! Integration tests for category filtering of the project grid.

mod common;

use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_game_dev_filter_on_sample_board() {
    let mut board = seeded_board();

    board.set_category(Filter::Only(Category::GameDev));

    assert_eq!(
        visible_titles(&board),
        vec!["Mobile RPG".to_string(), "Augmented Reality Game".to_string()]
    );
}

#[test]
fn test_each_category_keeps_relative_order() {
    let mut board = seeded_board();
    let all = board.projects().to_vec();

    for category in Category::ALL {
        board.set_category(Filter::Only(category));
        assert_eq!(visible_titles(&board), titles_in(&all, category), "{category}");
    }
}

#[test]
fn test_all_projects_shows_everything_unfiltered() {
    let mut board = seeded_board();
    board.set_category(Filter::Only(Category::Python));
    board.set_category(Filter::All);

    let expected: Vec<String> = board.projects().iter().map(|p| p.title.clone()).collect();
    assert_eq!(expected.len(), 8);
    assert_eq!(visible_titles(&board), expected);
}

#[test]
fn test_filter_reflects_newly_added_projects() {
    let mut board = seeded_board();
    board.set_category(Filter::Only(Category::Python));

    fill_draft(&mut board, "Scraper", "Crawl some sites", Category::Python);
    board.commit_draft().expect("valid draft");

    assert_eq!(
        visible_titles(&board),
        vec![
            "AI Chatbot".to_string(),
            "Data Visualization Tool".to_string(),
            "Scraper".to_string(),
        ]
    );
}

#[test]
fn test_empty_category_yields_empty_grid() {
    let mut board = ViewState::default();
    board.set_category(Filter::Only(Category::WebDev));
    assert!(visible_titles(&board).is_empty());
}

#[test]
fn test_dispatch_set_category() -> anyhow::Result<()> {
    let mut board = seeded_board();
    board.dispatch(Action::SetCategory(Filter::Only(Category::Uncategorized)))?;

    assert_eq!(board.selected_category(), Filter::Only(Category::Uncategorized));
    assert_eq!(
        visible_titles(&board),
        vec!["Smart Home App".to_string(), "Productivity Tracker".to_string()]
    );
    Ok(())
}
