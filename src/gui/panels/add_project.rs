use iced::{
    Element,
    widget::{button, column, container, pick_list, row, text, text_input},
};
use iced_widget::container::rounded_box;

use crate::{
    core::{Category, DraftField, ViewState},
    gui::{Message, panels::Panel, widgets::BOLD},
};

/// Form body of the add-project overlay. Only meaningful while the store
/// reports the modal as open; the app decides whether to show it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddProjectModal;

impl Panel for AddProjectModal {
    fn view<'a>(&self, state: &'a ViewState) -> Element<'a, Message> {
        let draft = state.draft();

        let form = column![
            text("Add New Project").size(20).font(BOLD),
            text_input("Project Title", &draft.title)
                .on_input(|title| Message::DraftChanged(DraftField::Title(title)))
                .on_submit(Message::SubmitPressed)
                .padding(8),
            text_input("Project Description", &draft.description)
                .on_input(|description| {
                    Message::DraftChanged(DraftField::Description(description))
                })
                .on_submit(Message::SubmitPressed)
                .padding(8),
            pick_list(Category::ALL, Some(draft.category), |category| {
                Message::DraftChanged(DraftField::Category(category))
            })
            .padding(8),
            row![
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(Message::CancelPressed),
                button(text("Add Project"))
                    .style(button::primary)
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12)
        .width(400);

        container(form).padding(24).style(rounded_box).into()
    }
}
