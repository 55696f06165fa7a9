use tracing::{debug, info};

use super::{Draft, DraftError, DraftField, Filter, Project, ProjectId, seed};

/// A state transition of [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCategory(Filter),
    SelectProject(ProjectId),
    OpenAddModal,
    CloseAddModal,
    UpdateDraft(DraftField),
    CommitDraft,
}

/// All view state of the board. Mutated only through the transition methods
/// below (or [`ViewState::dispatch`]); every view is derived from it.
#[derive(Debug, Clone)]
pub struct ViewState {
    projects: Vec<Project>,
    selected_category: Filter,
    selected_project: Option<ProjectId>,
    is_adding_project: bool,
    draft: Draft,
    next_id: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_projects(Vec::new())
    }
}

impl ViewState {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Self {
            projects,
            selected_category: Filter::All,
            selected_project: None,
            is_adding_project: false,
            draft: Draft::default(),
            next_id,
        }
    }

    /// Board pre-filled with the sample projects.
    pub fn seeded() -> Self {
        Self::with_projects(seed::sample_projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected_category(&self) -> Filter {
        self.selected_category
    }

    pub fn is_adding_project(&self) -> bool {
        self.is_adding_project
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Projects matching the active filter, in insertion order.
    pub fn filtered_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        let filter = self.selected_category;
        self.projects
            .iter()
            .filter(move |project| filter.matches(project.category))
    }

    /// The selected project, whether or not the active filter still shows it.
    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected_project?;
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn is_selected(&self, id: ProjectId) -> bool {
        self.selected_project == Some(id)
    }

    pub fn set_category(&mut self, filter: Filter) {
        debug!(%filter, "category filter changed");
        self.selected_category = filter;
    }

    pub fn select_project(&mut self, id: ProjectId) {
        debug!(%id, "project selected");
        self.selected_project = Some(id);
    }

    pub fn open_add_modal(&mut self) {
        debug!("add-project modal opened");
        self.is_adding_project = true;
    }

    /// Hides the modal. The draft is kept and shows up again on reopen.
    pub fn close_add_modal(&mut self) {
        debug!("add-project modal closed");
        self.is_adding_project = false;
    }

    pub fn update_draft_field(&mut self, field: DraftField) {
        self.draft.set(field);
    }

    /// Appends the draft as a new project, resets the draft and closes the
    /// modal. An invalid draft leaves the whole state untouched.
    pub fn commit_draft(&mut self) -> Result<ProjectId, DraftError> {
        if let Err(err) = self.draft.validate() {
            debug!(%err, "draft rejected");
            return Err(err);
        }

        let id = ProjectId(self.next_id);
        self.next_id += 1;

        let project = std::mem::take(&mut self.draft).into_project(id);
        info!(%id, title = %project.title, category = %project.category, "project added");
        self.projects.push(project);
        self.is_adding_project = false;
        Ok(id)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), DraftError> {
        match action {
            Action::SetCategory(filter) => self.set_category(filter),
            Action::SelectProject(id) => self.select_project(id),
            Action::OpenAddModal => self.open_add_modal(),
            Action::CloseAddModal => self.close_add_modal(),
            Action::UpdateDraft(field) => self.update_draft_field(field),
            Action::CommitDraft => {
                self.commit_draft()?;
            }
        }
        Ok(())
    }
}
