use crate::dexbase::creature;
use crate::dexbase::explorer::{Request, Ticket};
use crate::dexbase::generation::Generation;
use crate::dexbase::region::{self, Choice};
use crate::dexbase::render::{self, Gradient, Rgba};
use crate::dexbase::{Error, Explorer, Session};
use crate::sprite;
use crate::widget;

use function::Binary;
use iced::gradient;
use iced::widget::{
    button, column, container, image, pick_list, row, scrollable, stack, text,
};
use iced::{Background, Center, Color, ContentFit, Degrees, Element, Fill, Task, Theme};
use tokio::time;

/// The region explorer: a selector, a travel button, and the region on display.
pub struct Regions {
    explorer: Explorer,
}

#[derive(Debug, Clone)]
pub enum Message {
    CatalogueLoaded(Result<region::Catalogue, Error>),
    Selected(Choice),
    Travel,
    Loaded(Ticket, Result<region::Detail, Error>),
    Expired(Generation),
    Chosen(creature::Id),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Lookup(creature::Id),
}

impl Regions {
    pub fn new() -> Self {
        Self {
            explorer: Explorer::new(),
        }
    }

    /// Loads the catalogue the first time the panel is opened.
    pub fn init(&mut self, session: &Session) -> Action {
        run(self.explorer.init(), session)
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::CatalogueLoaded(result) => run(self.explorer.catalogue_loaded(result), session),
            Message::Selected(choice) => run(self.explorer.load(choice.key.as_str(), None), session),
            Message::Travel => {
                let request = self.explorer.travel(&mut rand::thread_rng());

                run(request, session)
            }
            Message::Loaded(ticket, result) => {
                run(self.explorer.region_loaded(ticket, result), session)
            }
            Message::Expired(generation) => {
                self.explorer.expire(generation);

                Action::None
            }
            Message::Chosen(id) => Action::Lookup(id),
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = &str> {
        self.explorer.panel().into_iter().flat_map(|panel| {
            panel
                .backdrop
                .iter()
                .map(|backdrop| backdrop.map_image.as_str())
                .chain(panel.portraits.iter().map(|portrait| portrait.url.as_str()))
        })
    }

    pub fn view<'a>(&'a self, sprites: &'a sprite::Cache) -> Element<'a, Message> {
        let controls = row![
            pick_list(
                self.explorer.choices(),
                self.explorer.selected().cloned(),
                Message::Selected,
            )
            .placeholder("Elige una región")
            .padding(10),
            button("¡Viajar!").on_press(Message::Travel).padding([10, 20]),
        ]
        .spacing(10)
        .align_y(Center);

        let content = column![controls, widget::status(self.explorer.status())]
            .push(
                self.explorer
                    .panel()
                    .map(|panel| region_view(panel, sprites)),
            )
            .spacing(20);

        scrollable(content).height(Fill).into()
    }
}

fn run(request: Option<Request>, session: &Session) -> Action {
    let Some(request) = request else {
        return Action::None;
    };

    let session = session.clone();

    let task = match request {
        Request::Catalogue => Task::perform(
            async move { session.regions().await },
            Message::CatalogueLoaded,
        ),
        Request::Region { key, limit, ticket } => Task::perform(
            async move { session.region(&key, limit).await },
            Message::Loaded.with(ticket),
        ),
        Request::Expire { generation, after } => {
            Task::perform(time::sleep(after), move |()| Message::Expired(generation))
        }
    };

    Action::Run(task)
}

fn region_view<'a>(panel: &'a render::Region, sprites: &'a sprite::Cache) -> Element<'a, Message> {
    let header = container(
        column![text(&panel.name).size(32), text(&panel.description)]
            .spacing(10)
            .padding(20),
    )
    .width(Fill);

    let header: Element<'_, Message> = match &panel.backdrop {
        Some(backdrop) => {
            let overlay = overlay(backdrop.overlay);

            let map: Element<'_, Message> = match sprites.get(&backdrop.map_image) {
                Some(sprite::Image::Loaded(handle)) => image(handle)
                    .width(Fill)
                    .height(220)
                    .content_fit(ContentFit::Cover)
                    .into(),
                _ => container(text("")).width(Fill).height(220).into(),
            };

            stack![
                map,
                header
                    .height(220)
                    .style(move |_theme: &Theme| container::Style::default().background(overlay)),
            ]
            .into()
        }
        None => header.into(),
    };

    let portraits = row(panel.portraits.iter().map(|portrait| {
        button(widget::sprite(&portrait.url, sprites, 72))
            .on_press(Message::Chosen(portrait.id))
            .padding(5)
            .style(button::text)
            .into()
    }))
    .spacing(10)
    .wrap();

    column![
        header,
        text("DESTACADOS").size(12),
        portraits,
        text("HABITANTES").size(12),
        widget::entries(&panel.inhabitants, Message::Chosen),
    ]
    .spacing(15)
    .into()
}

fn overlay(overlay: Gradient) -> Background {
    let color = |Rgba { r, g, b, a }: Rgba| Color::from_rgba8(r, g, b, a);

    Background::Gradient(
        gradient::Linear::new(Degrees(overlay.degrees))
            .add_stop(0.0, color(overlay.from))
            .add_stop(1.0, color(overlay.to))
            .into(),
    )
}
