use iced::{
    Element, Fill,
    widget::{Column, button, column, container, text},
};

use crate::{
    core::{Filter, ViewState},
    gui::{Message, panels::Panel, widgets::BOLD},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPanel;

impl Panel for CategoryPanel {
    fn view<'a>(&self, state: &'a ViewState) -> Element<'a, Message> {
        let active = state.selected_category();
        let filters = Filter::ALL.into_iter().map(|filter| -> Element<'a, Message> {
            button(text(filter.label()))
                .width(Fill)
                .padding([8, 16])
                .style(if filter == active {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::FilterSelected(filter))
                .into()
        });

        column![
            text("Categories").size(20).font(BOLD),
            Column::with_children(filters).spacing(8),
            button(text("+ Add Project"))
                .width(Fill)
                .padding([8, 16])
                .style(button::success)
                .on_press(Message::AddProjectPressed),
            // decorative, no action attached
            container(button(text("Settings")).style(button::secondary)).align_bottom(Fill),
        ]
        .spacing(16)
        .into()
    }
}
