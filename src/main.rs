use dexbase;

mod panel;
mod sprite;
mod widget;

use crate::dexbase::Session;
use crate::panel::{Tab, compare, lookup, regions, types};
use crate::sprite::Sprite;
use crate::widget::logo;

use function::Binary;
use iced::widget::{button, column, container, row, space, text};
use iced::{Center, Element, Fill, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .window_size((1100.0, 850.0))
        .run()
}

struct Pokedex {
    session: Session,
    tab: Tab,
    lookup: panel::Lookup,
    types: panel::Types,
    compare: panel::Compare,
    regions: panel::Regions,
    sprites: sprite::Cache,
}

#[derive(Debug, Clone)]
enum Message {
    TabSelected(Tab),
    Lookup(lookup::Message),
    Types(types::Message),
    Compare(compare::Message),
    Regions(regions::Message),
    SpriteFetched(String, Result<Sprite, anywho::Error>),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let session = Session::from_env();
        let (lookup, task) = panel::Lookup::new(&session);

        let mut pokedex = Self {
            session,
            tab: Tab::Pokedex,
            lookup,
            types: panel::Types::new(),
            compare: panel::Compare::new(),
            regions: panel::Regions::new(),
            sprites: sprite::Cache::new(),
        };

        let sprites = pokedex.fetch_sprites();

        (pokedex, Task::batch([task.map(Message::Lookup), sprites]))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::TabSelected(tab) => {
                self.tab = tab;

                if tab == Tab::Regions {
                    let action = self.regions.init(&self.session);

                    self.regions_action(action)
                } else {
                    Task::none()
                }
            }
            Message::Lookup(message) => match self.lookup.update(message, &self.session) {
                lookup::Action::None => Task::none(),
                lookup::Action::Run(task) => task.map(Message::Lookup),
            },
            Message::Types(message) => match self.types.update(message, &self.session) {
                types::Action::None => Task::none(),
                types::Action::Run(task) => task.map(Message::Types),
                types::Action::Lookup(id) => self.show(id),
            },
            Message::Compare(message) => match self.compare.update(message, &self.session) {
                compare::Action::None => Task::none(),
                compare::Action::Run(task) => task.map(Message::Compare),
            },
            Message::Regions(message) => {
                let action = self.regions.update(message, &self.session);

                self.regions_action(action)
            }
            Message::SpriteFetched(url, result) => {
                self.sprites.insert(url, result);

                return Task::none();
            }
        };

        Task::batch([task, self.fetch_sprites()])
    }

    fn regions_action(&mut self, action: regions::Action) -> Task<Message> {
        match action {
            regions::Action::None => Task::none(),
            regions::Action::Run(task) => task.map(Message::Regions),
            regions::Action::Lookup(id) => self.show(id),
        }
    }

    /// Opens the Pokédex on the given creature.
    fn show(&mut self, id: dexbase::creature::Id) -> Task<Message> {
        self.tab = Tab::Pokedex;

        self.lookup.lookup(id, &self.session).map(Message::Lookup)
    }

    fn fetch_sprites(&mut self) -> Task<Message> {
        let urls = self.sprites.request(
            self.lookup
                .sprites()
                .chain(self.compare.sprites())
                .chain(self.regions.sprites()),
        );

        Task::batch(urls.into_iter().map(|url| {
            Task::perform(
                Sprite::fetch(&url, &self.session),
                Message::SpriteFetched.with(url),
            )
        }))
    }

    fn view(&self) -> Element<'_, Message> {
        let tabs = Tab::ALL.iter().map(|&tab| {
            let is_active = self.tab == tab;

            button(text(tab.label()).size(14))
                .style(move |theme: &Theme, status| {
                    if is_active {
                        let palette = theme.extended_palette();

                        button::Style {
                            background: Some(palette.background.base.color.into()),
                            text_color: palette.background.base.text,
                            ..button::text(theme, status)
                        }
                    } else {
                        button::text(theme, status)
                    }
                })
                .padding([8, 15])
                .on_press(Message::TabSelected(tab))
                .into()
        });

        let navbar = container(
            row![logo(18), space::horizontal(), row(tabs)]
                .spacing(10)
                .width(Fill)
                .align_y(Center),
        )
        .padding([5, 15])
        .style(container::dark);

        let panel = match self.tab {
            Tab::Pokedex => self.lookup.view(&self.sprites).map(Message::Lookup),
            Tab::Types => self.types.view().map(Message::Types),
            Tab::Compare => self.compare.view(&self.sprites).map(Message::Compare),
            Tab::Regions => self.regions.view(&self.sprites).map(Message::Regions),
        };

        column![navbar, container(panel).padding(20).height(Fill)].into()
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}
