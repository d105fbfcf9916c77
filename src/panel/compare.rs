use crate::dexbase::comparison::Matchup;
use crate::dexbase::generation::{Generation, Tracker};
use crate::dexbase::{Comparison, Error, Session, Status, render};
use crate::sprite;
use crate::widget;

use function::Binary;
use iced::border;
use iced::widget::{button, column, container, operation, row, scrollable, text, text_input, tooltip};
use iced::{Center, Element, Fill, Task, Theme};

/// Puts two creatures' stats against each other.
pub struct Compare {
    first: String,
    second: String,
    status: Option<Status>,
    versus: Option<render::Versus>,
    requests: Tracker,
}

#[derive(Debug, Clone)]
pub enum Message {
    FirstChanged(String),
    SecondChanged(String),
    Submit,
    Compared(Generation, Result<Comparison, Error>),
}

pub enum Action {
    None,
    Run(Task<Message>),
}

/// The scrollable holding the results.
pub const RESULTS: &str = "compare";

const PREPARING: &str = "Preparando el combate...";

impl Compare {
    pub fn new() -> Self {
        Self {
            first: String::new(),
            second: String::new(),
            status: None,
            versus: None,
            requests: Tracker::new(),
        }
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::FirstChanged(first) => {
                self.first = first;

                Action::None
            }
            Message::SecondChanged(second) => {
                self.second = second;

                Action::None
            }
            Message::Submit => {
                let matchup = match Matchup::parse(&self.first, &self.second) {
                    Ok(matchup) => matchup,
                    Err(error) => {
                        self.status = Some(Status::error(&error));

                        return Action::None;
                    }
                };

                log::info!(
                    "Comparing {} against {}",
                    matchup.first.as_str(),
                    matchup.second.as_str()
                );

                self.status = Some(Status::info(PREPARING));

                let generation = self.requests.next();
                let session = session.clone();

                Action::Run(Task::perform(
                    async move { session.compare(&matchup).await },
                    Message::Compared.with(generation),
                ))
            }
            Message::Compared(generation, result) => {
                if !self.requests.is_current(generation) {
                    log::debug!("Discarding stale comparison: {generation:?}");
                    return Action::None;
                }

                match result.and_then(|comparison| render::versus(&comparison)) {
                    Ok(versus) => {
                        self.versus = Some(versus);
                        self.status = None;

                        Action::Run(operation::snap_to(
                            RESULTS,
                            operation::RelativeOffset::END,
                        ))
                    }
                    Err(error) => {
                        log::error!("{error}");

                        self.versus = None;
                        self.status = Some(Status::error(&error));

                        Action::None
                    }
                }
            }
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = &str> {
        self.versus
            .iter()
            .flat_map(|versus| versus.cards.iter().map(|card| card.image.as_str()))
    }

    pub fn view<'a>(&'a self, sprites: &'a sprite::Cache) -> Element<'a, Message> {
        let form = row![
            text_input("Primer Pokémon", &self.first)
                .on_input(Message::FirstChanged)
                .on_submit(Message::Submit)
                .padding(10),
            text("vs").size(20),
            text_input("Segundo Pokémon", &self.second)
                .on_input(Message::SecondChanged)
                .on_submit(Message::Submit)
                .padding(10),
            button("¡Combatir!")
                .on_press(Message::Submit)
                .padding([10, 20]),
        ]
        .spacing(10)
        .align_y(Center);

        let content = column![form, widget::status(self.status.as_ref())]
            .spacing(20)
            .push(self.versus.as_ref().map(|versus| results(versus, sprites)));

        scrollable(content).id(RESULTS).height(Fill).into()
    }
}

fn results<'a>(versus: &'a render::Versus, sprites: &'a sprite::Cache) -> Element<'a, Message> {
    let [first, second] = &versus.cards;

    let verdict = column![text(&versus.verdict).size(24), text(&versus.summary)]
        .push(
            versus
                .difference
                .as_deref()
                .map(|difference| text(difference).size(14)),
        )
        .spacing(10)
        .align_x(Center)
        .width(Fill);

    column![
        row![mini_card(first, sprites), mini_card(second, sprites)].spacing(20),
        verdict,
    ]
    .spacing(20)
    .into()
}

fn mini_card<'a>(card: &'a render::MiniCard, sprites: &'a sprite::Cache) -> Element<'a, Message> {
    let is_winner = card.is_winner;

    let portrait = tooltip(
        widget::sprite(&card.image, sprites, 120),
        container(text(&card.alt).size(12))
            .padding(5)
            .style(container::dark),
        tooltip::Position::Bottom,
    );

    container(
        column![
            portrait,
            text(&card.name).size(20),
            text!("Total: {}", card.total).size(14),
            widget::rows(&card.stats),
        ]
        .push(is_winner.then(|| text("🏆 Ganador").size(14)))
        .spacing(10)
        .align_x(Center),
    )
    .padding(20)
    .width(Fill)
    .style(move |theme: &Theme| {
        let style = container::bordered_box(theme);

        if is_winner {
            let palette = theme.extended_palette();

            style.border(border::width(2).color(palette.success.base.color).rounded(8))
        } else {
            style
        }
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn comparison(winner: Option<&str>, is_tie: bool) -> Comparison {
        serde_json::from_value(serde_json::json!({
            "pokemon": [
                {"id": 25, "name": "Pikachu", "total_stats": 320},
                {"id": 26, "name": "Raichu", "total_stats": 485},
            ],
            "winner": winner,
            "is_tie": is_tie,
            "message": "",
        }))
        .expect("Decode comparison")
    }

    fn submitted(first: &str, second: &str) -> (Compare, Session) {
        let session = Session::new("http://127.0.0.1:5000");
        let mut compare = Compare::new();

        let _ = compare.update(Message::FirstChanged(first.to_owned()), &session);
        let _ = compare.update(Message::SecondChanged(second.to_owned()), &session);
        let _ = compare.update(Message::Submit, &session);

        (compare, session)
    }

    #[test]
    fn blank_side_never_issues_a_request() {
        for (first, second) in [("", "raichu"), ("pikachu", "   "), ("", "")] {
            let session = Session::new("http://127.0.0.1:5000");
            let mut compare = Compare::new();

            let _ = compare.update(Message::FirstChanged(first.to_owned()), &session);
            let _ = compare.update(Message::SecondChanged(second.to_owned()), &session);
            let action = compare.update(Message::Submit, &session);

            assert!(matches!(action, Action::None));
            assert_eq!(compare.requests.latest(), Generation::default());
            assert_eq!(
                compare.status.as_ref().map(|status| status.text.as_str()),
                Some(Matchup::INCOMPLETE)
            );
        }
    }

    #[test]
    fn submit_shows_preparing_message() {
        let (compare, _session) = submitted("pikachu", "raichu");

        assert_eq!(
            compare.status.as_ref().map(|status| status.text.as_str()),
            Some(PREPARING)
        );
    }

    #[test]
    fn only_the_winner_card_is_marked() {
        let (mut compare, session) = submitted("pikachu", "raichu");
        let generation = compare.requests.latest();

        let action = compare.update(
            Message::Compared(generation, Ok(comparison(Some("Raichu"), false))),
            &session,
        );

        assert!(matches!(action, Action::Run(_)));

        let versus = compare.versus.as_ref().expect("Results are shown");
        assert!(!versus.cards[0].is_winner);
        assert!(versus.cards[1].is_winner);
        assert_eq!(compare.status, None);
    }

    #[test]
    fn tie_marks_neither_card() {
        let (mut compare, session) = submitted("pikachu", "raichu");
        let generation = compare.requests.latest();

        let _ = compare.update(
            Message::Compared(generation, Ok(comparison(Some("Pikachu"), true))),
            &session,
        );

        let versus = compare.versus.as_ref().expect("Results are shown");
        assert!(versus.cards.iter().all(|card| !card.is_winner));
    }

    #[test]
    fn malformed_result_hides_the_panel() {
        let (mut compare, session) = submitted("pikachu", "raichu");
        let generation = compare.requests.latest();
        let _ = compare.update(
            Message::Compared(generation, Ok(comparison(None, true))),
            &session,
        );

        let _ = compare.update(Message::Submit, &session);
        let generation = compare.requests.latest();
        let _ = compare.update(
            Message::Compared(generation, Ok(Comparison::default())),
            &session,
        );

        assert_eq!(compare.versus, None);
        assert_eq!(
            compare.status.as_ref().map(|status| status.text.as_str()),
            Some(Comparison::MALFORMED)
        );
    }

    #[test]
    fn failure_hides_the_panel() {
        let (mut compare, session) = submitted("pikachu", "raichu");
        let generation = compare.requests.latest();

        let _ = compare.update(
            Message::Compared(
                generation,
                Err(Error::api(
                    400,
                    Some("Debes elegir dos Pokémon distintos.".to_owned()),
                    "",
                )),
            ),
            &session,
        );

        assert_eq!(compare.versus, None);
        assert_eq!(
            compare.status.as_ref().map(|status| status.text.as_str()),
            Some("Debes elegir dos Pokémon distintos.")
        );
    }
}
