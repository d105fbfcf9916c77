use crate::dexbase::render;
use crate::dexbase::status::{Status, Tone};
use crate::sprite::{self, Cache};

use iced::border;
use iced::widget::{button, canvas, center, column, container, image, row, text};
use iced::{Color, ContentFit, Element, Fill, Length, Pixels, Theme};

pub fn logo<'a, Message>(size: impl Into<Pixels>) -> Element<'a, Message> {
    const PKG_NAME: &str = env!("CARGO_PKG_NAME");

    let mut name = String::with_capacity(PKG_NAME.len());
    name.extend(PKG_NAME.chars().take(1).map(|c| c.to_ascii_uppercase()));
    name.push_str(&PKG_NAME[1..]);

    text(name).size(size).into()
}

/// A remote image, or a pokéball while it is on its way.
pub fn sprite<'a, Message: 'a>(
    url: &str,
    cache: &'a Cache,
    size: impl Into<Length>,
) -> Element<'a, Message> {
    let size = size.into();

    match cache.get(url) {
        Some(sprite::Image::Loaded(handle)) => image(handle)
            .width(size)
            .height(size)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(sprite::Image::Errored) => container(text("?").size(24))
            .center(size)
            .style(container::dark)
            .into(),
        _ => center(pokeball(24)).width(size).height(size).into(),
    }
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size};

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let palette = theme.palette();

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                frame.scale((bounds.width - 0.5) / (2.0 * RADIUS));

                frame.fill(&outer_circle, palette.danger);
                frame.fill(&inner_circle, palette.background);
                frame.fill_rectangle(line.position(), line.size(), palette.background);
                frame.fill(&button, palette.text);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}

/// One inline chip per item.
pub fn tags<'a, Message: 'a>(items: &'a [String]) -> Element<'a, Message> {
    row(items.iter().map(|item| {
        container(text(item).size(12))
            .padding([4, 10])
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();

                container::Style::default()
                    .background(palette.primary.weak.color)
                    .color(palette.primary.weak.text)
                    .border(border::rounded(12))
            })
            .into()
    }))
    .spacing(5)
    .wrap()
    .into()
}

pub fn rows<'a, Message: 'a>(items: &'a [String]) -> Element<'a, Message> {
    column(items.iter().map(|item| text(item).size(14).into()))
        .spacing(2)
        .into()
}

pub fn status<'a, Message: 'a>(status: Option<&'a Status>) -> Element<'a, Message> {
    let Some(status) = status else {
        return text("").size(14).into();
    };

    let tone = status.tone;

    text(&status.text)
        .size(14)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();

            text::Style {
                color: Some(match tone {
                    Tone::Info => palette.background.strong.text,
                    Tone::Error => palette.danger.base.color,
                }),
            }
        })
        .into()
}

/// A list of creatures that can be looked up.
pub fn entries<'a, Message: Clone + 'a>(
    entries: &'a [render::Entry],
    on_press: impl Fn(crate::dexbase::creature::Id) -> Message + 'a,
) -> Element<'a, Message> {
    column(entries.iter().map(|entry| {
        button(text(&entry.label).size(14))
            .on_press(on_press(entry.id))
            .width(Fill)
            .style(button::secondary)
            .into()
    }))
    .spacing(5)
    .into()
}

/// Text shown in place of a list.
pub fn placeholder<'a, Message: 'a>(content: &'a str, is_error: bool) -> Element<'a, Message> {
    container(text(content).size(14).style(move |theme: &Theme| {
        let palette = theme.extended_palette();

        text::Style {
            color: Some(if is_error {
                palette.danger.base.color
            } else {
                palette.background.strong.color
            }),
        }
    }))
    .padding(10)
    .width(Fill)
    .style(|_theme| {
        container::Style::default()
            .background(Color::BLACK.scale_alpha(0.2))
            .border(border::rounded(8))
    })
    .into()
}
