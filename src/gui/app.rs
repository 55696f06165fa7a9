use iced::{
    Element, Fill, Task, Theme,
    widget::{container, row, text, text_input},
};
use tracing::debug;

use super::{
    Message,
    panels::{
        Panel, add_project::AddProjectModal, categories::CategoryPanel, details::DetailPanel,
        grid::ProjectGrid,
    },
    widgets::{BOLD, layout, modal},
};
use crate::core::ViewState;

#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub theme: Theme,
    pub seed_projects: bool,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            seed_projects: true,
        }
    }
}

pub struct ProjectBoardApp {
    state: ViewState,
    theme: Theme,
}

impl ProjectBoardApp {
    pub fn new(options: StartupOptions) -> (Self, Task<Message>) {
        let state = if options.seed_projects {
            ViewState::seeded()
        } else {
            ViewState::default()
        };
        (
            Self {
                state,
                theme: options.theme,
            },
            Task::none(),
        )
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn title(&self) -> String {
        "Personal Project Manager".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // A rejected draft keeps the modal open without any on-screen error.
        if let Err(err) = self.state.dispatch(message.into()) {
            debug!(%err, "add project ignored");
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            container(text("Logo").size(24).font(BOLD)).width(Fill),
            // decorative: no on_input, so the field stays inert
            text_input("Search", "").width(240).padding(8),
        ];

        let board = layout(
            header,
            CategoryPanel.view(&self.state),
            ProjectGrid.view(&self.state),
            DetailPanel.view(&self.state),
        );

        if self.state.is_adding_project() {
            modal(board, AddProjectModal.view(&self.state))
        } else {
            board
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

pub fn run(options: StartupOptions) -> iced::Result {
    iced::application(
        move || ProjectBoardApp::new(options.clone()),
        ProjectBoardApp::update,
        ProjectBoardApp::view,
    )
    .title(ProjectBoardApp::title)
    .theme(ProjectBoardApp::theme)
    .window_size((1200.0, 800.0))
    .run()
}
