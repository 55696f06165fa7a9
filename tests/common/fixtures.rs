use projboard::{Category, DraftField, Project, ViewState};

/// Store pre-filled with the eight sample projects.
pub fn seeded_board() -> ViewState {
    ViewState::seeded()
}

/// Opens the add-project modal and fills in every draft field.
pub fn fill_draft(board: &mut ViewState, title: &str, description: &str, category: Category) {
    board.open_add_modal();
    board.update_draft_field(DraftField::Title(title.to_string()));
    board.update_draft_field(DraftField::Description(description.to_string()));
    board.update_draft_field(DraftField::Category(category));
}

pub fn visible_titles(board: &ViewState) -> Vec<String> {
    board
        .filtered_projects()
        .map(|project| project.title.clone())
        .collect()
}

pub fn titles_in(projects: &[Project], category: Category) -> Vec<String> {
    projects
        .iter()
        .filter(|project| project.category == category)
        .map(|project| project.title.clone())
        .collect()
}
