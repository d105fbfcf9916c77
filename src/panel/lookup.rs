use crate::dexbase::creature::{self, Query};
use crate::dexbase::generation::{Generation, Tracker};
use crate::dexbase::{Creature, Error, Session, Status, render};
use crate::sprite;
use crate::widget;

use function::Binary;
use iced::widget::{button, column, container, row, text, text_input, tooltip};
use iced::{Center, Element, Fill, Task};

/// Search by name or number, random picks, and the creature card.
pub struct Lookup {
    search: String,
    status: Option<Status>,
    card: Option<render::Card>,
    requests: Tracker,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    Search,
    Random,
    Loaded(Generation, Result<Creature, Error>),
}

pub enum Action {
    None,
    Run(Task<Message>),
}

const LOADING: &str = "Cargando tu Pokémon...";

impl Lookup {
    /// Starts with a random creature to invite exploring.
    pub fn new(session: &Session) -> (Self, Task<Message>) {
        let mut lookup = Self {
            search: String::new(),
            status: None,
            card: None,
            requests: Tracker::new(),
        };

        let task = lookup.random(session);

        (lookup, task)
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::SearchChanged(search) => {
                self.search = search;

                Action::None
            }
            Message::Search => match Query::parse(&self.search) {
                Ok(query) => Action::Run(self.search_for(query, session)),
                Err(error) => {
                    self.status = Some(Status::error(&error));

                    Action::None
                }
            },
            Message::Random => Action::Run(self.random(session)),
            Message::Loaded(generation, result) => {
                if !self.requests.is_current(generation) {
                    log::debug!("Discarding stale creature: {generation:?}");
                    return Action::None;
                }

                match result {
                    Ok(creature) => {
                        log::info!("Showing {} ({})", creature.name, creature.id.label());

                        self.card = Some(render::card(&creature));
                        self.status = None;
                    }
                    Err(error) => {
                        log::error!("{error}");

                        self.card = None;
                        self.status = Some(Status::error(&error));
                    }
                }

                Action::None
            }
        }
    }

    /// Looks up a creature picked from another panel.
    pub fn lookup(&mut self, id: creature::Id, session: &Session) -> Task<Message> {
        self.search_for(Query::from(id), session)
    }

    fn search_for(&mut self, query: Query, session: &Session) -> Task<Message> {
        let generation = self.begin();
        let session = session.clone();

        Task::perform(
            async move { session.search(&query).await },
            Message::Loaded.with(generation),
        )
    }

    fn random(&mut self, session: &Session) -> Task<Message> {
        let generation = self.begin();
        let session = session.clone();

        Task::perform(
            async move { session.random().await },
            Message::Loaded.with(generation),
        )
    }

    fn begin(&mut self) -> Generation {
        self.status = Some(Status::info(LOADING));
        self.requests.next()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &str> {
        self.card.iter().map(|card| card.image.as_str())
    }

    pub fn view<'a>(&'a self, sprites: &'a sprite::Cache) -> Element<'a, Message> {
        let search = row![
            text_input("Nombre o número del Pokémon", &self.search)
                .on_input(Message::SearchChanged)
                .on_submit(Message::Search)
                .padding(10),
            button("Buscar").on_press(Message::Search).padding([10, 20]),
            button("¡Sorpréndeme!")
                .on_press(Message::Random)
                .padding([10, 20])
                .style(button::secondary),
        ]
        .spacing(10)
        .align_y(Center);

        let content = column![search, widget::status(self.status.as_ref())].spacing(10);

        column![content]
            .push(self.card.as_ref().map(|card| card_view(card, sprites)))
            .spacing(20)
            .into()
    }
}

fn card_view<'a>(card: &'a render::Card, sprites: &'a sprite::Cache) -> Element<'a, Message> {
    let section = |title| text(title).size(12);

    let portrait = tooltip(
        widget::sprite(&card.image, sprites, 240),
        container(text(&card.alt).size(12))
            .padding(5)
            .style(container::dark),
        tooltip::Position::Bottom,
    );

    let details = column![
        row![text(&card.name).size(32), text(&card.label).size(20)]
            .spacing(15)
            .align_y(Center),
        text(&card.description),
        row![
            text!("Altura: {}", card.height).size(14),
            text!("Peso: {}", card.weight).size(14),
        ]
        .spacing(20),
        section("TIPOS"),
        widget::tags(&card.types),
        section("HABILIDADES"),
        widget::tags(&card.abilities),
        section("ESTADÍSTICAS"),
        widget::rows(&card.stats),
    ]
    .spacing(10)
    .width(Fill);

    container(row![portrait, details].spacing(30))
        .padding(20)
        .width(Fill)
        .style(container::bordered_box)
        .into()
}
