use iced::{
    Background, Color, Element, Fill, Font, Length, Theme, border, font,
    widget::{center, column, container, container::Style, opaque, row, stack, text},
};
use iced_widget::container::{bordered_box, rounded_box};

use crate::core::Category;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Card frame; the selected card gets a thick primary-coloured border.
pub fn card_style(selected: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let mut style = bordered_box(theme);
        style.border.radius = 8.0.into();
        if selected {
            style.border.width = 3.0;
            style.border.color = theme.palette().primary;
        }
        style
    }
}

fn badge_style(theme: &Theme) -> Style {
    let mut background = theme.palette().text;
    background.a = 0.15;
    rounded_box(theme)
        .background(background)
        .border(border::rounded(12.0))
}

pub fn category_badge<'a, Message>(category: Category) -> Element<'a, Message>
where
    Message: 'a,
{
    container(text(category.label()).size(12).font(BOLD))
        .padding([4, 12])
        .style(badge_style)
        .into()
}

/// Header, then three columns: sidebar, main content and details.
pub fn layout<'a, Message>(
    header: impl Into<Element<'a, Message>>,
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    details: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            header.into(),
            row![
                container(sidebar.into())
                    .width(Length::FillPortion(1))
                    .height(Fill),
                container(main_content.into()).width(Length::FillPortion(2)),
                container(details.into()).width(Length::FillPortion(1)),
            ]
            .spacing(16),
        ]
        .spacing(32),
    )
    .padding(16)
    .width(Fill)
    .height(Fill)
    .into()
}

/// Shows `content` centered over `base` behind a dimmed backdrop that
/// swallows all input to the base.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    stack![
        base.into(),
        opaque(center(opaque(content)).style(|_theme| Style {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..Color::BLACK
            })),
            ..Style::default()
        })),
    ]
    .into()
}
