use iced::{
    Element, Fill, Length,
    widget::{column, container, text},
};
use iced_widget::container::rounded_box;

use crate::{
    core::ViewState,
    gui::{Message, panels::Panel, widgets::BOLD},
};

pub const PLACEHOLDER: &str = "Click a project to view its details";

#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPanel;

impl Panel for DetailPanel {
    fn view<'a>(&self, state: &'a ViewState) -> Element<'a, Message> {
        let body: Element<'a, Message> = match state.selected_project() {
            Some(project) => column![
                text(project.title.as_str()).size(18).font(BOLD),
                text(project.description.as_str()).size(14),
                text(format!("Category: {}", project.category)).size(14),
            ]
            .spacing(8)
            .into(),
            None => text(PLACEHOLDER).into(),
        };

        column![
            text("Project Details").size(20).font(BOLD),
            container(body)
                .padding(16)
                .center_x(Fill)
                .center_y(Length::Fixed(256.0))
                .style(rounded_box),
        ]
        .spacing(16)
        .into()
    }
}
