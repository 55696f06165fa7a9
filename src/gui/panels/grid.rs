use iced::{
    Element, Fill, Length,
    widget::{Column, Row, column, container, mouse_area, scrollable, text},
};

use crate::{
    core::{Project, ViewState},
    gui::{
        Message,
        panels::Panel,
        widgets::{BOLD, card_style, category_badge},
    },
};

const COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectGrid;

impl Panel for ProjectGrid {
    fn view<'a>(&self, state: &'a ViewState) -> Element<'a, Message> {
        let projects: Vec<&Project> = state.filtered_projects().collect();
        let rows = projects.chunks(COLUMNS).map(|chunk| -> Element<'a, Message> {
            let mut cells: Vec<Element<'a, Message>> = chunk
                .iter()
                .map(|&project| project_card(project, state.is_selected(project.id)))
                .collect();
            // keep a lone last card at half width
            while cells.len() < COLUMNS {
                cells.push(container(column![]).width(Length::FillPortion(1)).into());
            }
            Row::with_children(cells).spacing(16).into()
        });

        column![
            text("Personal Project Manager").size(30).font(BOLD),
            scrollable(Column::with_children(rows).spacing(16)).height(Fill),
        ]
        .spacing(32)
        .into()
    }
}

fn project_card<'a>(project: &'a Project, selected: bool) -> Element<'a, Message> {
    let content = column![
        text(project.title.as_str()).size(18).font(BOLD),
        category_badge(project.category),
        text(project.description.as_str()).size(14),
    ]
    .spacing(8);

    mouse_area(
        container(content)
            .padding(16)
            .width(Fill)
            .style(card_style(selected)),
    )
    .on_press(Message::ProjectClicked(project.id))
    .into()
}
