use crate::dexbase::creature;
use crate::dexbase::generation::{Generation, Tracker};
use crate::dexbase::render::{self, Listing};
use crate::dexbase::typing::{self, Type};
use crate::dexbase::{Error, Session};
use crate::widget;

use function::Binary;
use iced::widget::{button, column, pick_list, row, scrollable};
use iced::{Center, Element, Task};

/// Browses the creatures of one elemental type.
pub struct Types {
    selected: Option<Type>,
    listing: Listing,
    requests: Tracker,
}

#[derive(Debug, Clone)]
pub enum Message {
    Selected(Type),
    Cleared,
    Loaded(Generation, Result<typing::Listing, Error>),
    Chosen(creature::Id),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Lookup(creature::Id),
}

impl Types {
    pub fn new() -> Self {
        Self {
            selected: None,
            listing: Listing::Idle,
            requests: Tracker::new(),
        }
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::Selected(kind) => {
                log::info!("Browsing type: {}", kind.slug());

                self.selected = Some(kind);
                self.listing = Listing::Loading;

                let generation = self.requests.next();
                let session = session.clone();

                Action::Run(Task::perform(
                    async move { session.by_type(kind).await },
                    Message::Loaded.with(generation),
                ))
            }
            Message::Cleared => {
                self.selected = None;
                self.listing = Listing::Idle;

                // Drop whatever is still in flight
                let _ = self.requests.next();

                Action::None
            }
            Message::Loaded(generation, result) => {
                if !self.requests.is_current(generation) {
                    log::debug!("Discarding stale type listing: {generation:?}");
                    return Action::None;
                }

                self.listing = match result {
                    Ok(listing) => render::listing(listing.pokemon.as_deref()),
                    Err(error) => {
                        log::error!("{error}");

                        Listing::failed(&error)
                    }
                };

                Action::None
            }
            Message::Chosen(id) => {
                // Reset, so the same type can be picked again
                self.selected = None;

                Action::Lookup(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let selector = row![
            pick_list(Type::ALL, self.selected, Message::Selected)
                .placeholder("Elige un tipo")
                .padding(10),
        ]
        .push(self.selected.is_some().then(|| {
            button("Limpiar")
                .on_press(Message::Cleared)
                .padding(10)
                .style(button::secondary)
        }))
        .spacing(10)
        .align_y(Center);

        let results: Element<_> = match &self.listing {
            Listing::Idle => column![].into(),
            Listing::Loading => widget::placeholder(Listing::LOADING, false),
            Listing::Empty => widget::placeholder(Listing::EMPTY, false),
            Listing::Failed(message) => widget::placeholder(message, true),
            Listing::Entries(entries) => {
                scrollable(widget::entries(entries, Message::Chosen)).into()
            }
        };

        column![selector, results].spacing(20).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dexbase::creature::Summary;
    use pretty_assertions::assert_eq;

    fn loaded(types: &mut Types, session: &Session, result: Result<typing::Listing, Error>) {
        let generation = types.requests.latest();

        let _ = types.update(Message::Loaded(generation, result), session);
    }

    #[test]
    fn selecting_a_type_shows_loading() {
        let session = Session::new("http://127.0.0.1:5000");
        let mut types = Types::new();

        let action = types.update(Message::Selected(Type::Fire), &session);

        assert!(matches!(action, Action::Run(_)));
        assert_eq!(types.selected, Some(Type::Fire));
        assert_eq!(types.listing, Listing::Loading);
    }

    #[test]
    fn empty_listing_shows_placeholder() {
        let session = Session::new("http://127.0.0.1:5000");
        let mut types = Types::new();
        let _ = types.update(Message::Selected(Type::Ice), &session);

        loaded(
            &mut types,
            &session,
            Ok(typing::Listing {
                name: "Ice".to_owned(),
                pokemon: Some(Vec::new()),
            }),
        );

        assert_eq!(types.listing, Listing::Empty);
    }

    #[test]
    fn failure_shows_error_placeholder() {
        let session = Session::new("http://127.0.0.1:5000");
        let mut types = Types::new();
        let _ = types.update(Message::Selected(Type::Ghost), &session);

        loaded(
            &mut types,
            &session,
            Err(Error::api(404, None, "Ocurrió un problema al cargar el tipo.")),
        );

        assert_eq!(
            types.listing,
            Listing::Failed("Ocurrió un problema al cargar el tipo.".to_owned())
        );
    }

    #[test]
    fn choosing_an_entry_resets_the_selector() {
        let session = Session::new("http://127.0.0.1:5000");
        let mut types = Types::new();
        let _ = types.update(Message::Selected(Type::Electric), &session);

        loaded(
            &mut types,
            &session,
            Ok(typing::Listing {
                name: "Electric".to_owned(),
                pokemon: Some(vec![Summary {
                    id: creature::Id(25),
                    name: "Pikachu".to_owned(),
                }]),
            }),
        );

        let action = types.update(Message::Chosen(creature::Id(25)), &session);

        assert!(matches!(action, Action::Lookup(creature::Id(25))));
        assert_eq!(types.selected, None);
        assert!(matches!(types.listing, Listing::Entries(ref entries) if entries.len() == 1));
    }

    #[test]
    fn clearing_ignores_the_listing_in_flight() {
        let session = Session::new("http://127.0.0.1:5000");
        let mut types = Types::new();
        let _ = types.update(Message::Selected(Type::Water), &session);
        let in_flight = types.requests.latest();

        let _ = types.update(Message::Cleared, &session);
        let _ = types.update(
            Message::Loaded(in_flight, Ok(typing::Listing::default())),
            &session,
        );

        assert_eq!(types.listing, Listing::Idle);
    }
}
