use crate::core::{Action, DraftField, Filter, ProjectId};

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Filter),
    ProjectClicked(ProjectId),
    AddProjectPressed,
    CancelPressed,
    DraftChanged(DraftField),
    SubmitPressed,
}

impl From<Message> for Action {
    fn from(message: Message) -> Self {
        match message {
            Message::FilterSelected(filter) => Action::SetCategory(filter),
            Message::ProjectClicked(id) => Action::SelectProject(id),
            Message::AddProjectPressed => Action::OpenAddModal,
            Message::CancelPressed => Action::CloseAddModal,
            Message::DraftChanged(field) => Action::UpdateDraft(field),
            Message::SubmitPressed => Action::CommitDraft,
        }
    }
}
