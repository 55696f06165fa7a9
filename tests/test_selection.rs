//! Integration tests for project selection and the detail panel source.

mod common;

use common::*;

#[test]
fn test_nothing_selected_initially() {
    let board = seeded_board();
    assert!(board.selected_project().is_none());
    assert!(!board.is_selected(ProjectId(1)));
}

#[test]
fn test_select_project_marks_single_card() {
    let mut board = seeded_board();
    board.select_project(ProjectId(5));

    let selected = board.selected_project().expect("selection");
    assert_eq!(selected.title, "Data Visualization Tool");
    assert_eq!(selected.category, Category::Python);

    let marked: Vec<ProjectId> = board
        .filtered_projects()
        .filter(|p| board.is_selected(p.id))
        .map(|p| p.id)
        .collect();
    assert_eq!(marked, vec![ProjectId(5)]);
}

#[test]
fn test_selection_replaced_by_next_click() {
    let mut board = seeded_board();
    board.select_project(ProjectId(1));
    board.select_project(ProjectId(2));

    assert!(!board.is_selected(ProjectId(1)));
    assert!(board.is_selected(ProjectId(2)));
}

#[test]
fn test_selection_survives_filter_that_hides_it() -> anyhow::Result<()> {
    let mut board = seeded_board();
    board.dispatch(Action::SelectProject(ProjectId(1)))?;
    board.dispatch(Action::SetCategory(Filter::Only(Category::GameDev)))?;

    assert!(board.filtered_projects().all(|p| p.id != ProjectId(1)));
    assert_eq!(
        board.selected_project().map(|p| p.title.as_str()),
        Some("AI Chatbot")
    );
    Ok(())
}

#[test]
fn test_new_project_can_be_selected() -> anyhow::Result<()> {
    let mut board = seeded_board();
    fill_draft(&mut board, "Fresh", "Just added", Category::WebDev);
    let id = board.commit_draft()?;

    board.select_project(id);
    assert_eq!(board.selected_project().map(|p| p.id), Some(ProjectId(9)));
    Ok(())
}
