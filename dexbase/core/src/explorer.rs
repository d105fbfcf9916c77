//! The region explorer: a loaded catalogue of regions and the one on display.
//!
//! [`Explorer`] performs no I/O. Each transition hands back the [`Request`] the
//! caller must run, and the caller feeds the outcome back in. Region loads and
//! announcements are stamped with a [`Generation`], so completions that were
//! superseded while in flight are dropped instead of overwriting newer state.
use crate::Error;
use crate::generation::{Generation, Tracker};
use crate::region::{self, Choice, Key, Region};
use crate::render;
use crate::status::Status;

use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;

/// How many inhabitants are requested per region.
pub const INHABITANTS: usize = 12;

/// How long an announcement stays on display.
pub const ANNOUNCEMENT: Duration = Duration::from_millis(2000);

pub const WELCOME: &str = "¡Bienvenido al explorador de regiones!";
pub const TRAVELLED: &str = "¡Has viajado a una nueva región!";

const LOADING_CATALOGUE: &str = "Cargando regiones...";
const TRAVELLING: &str = "Preparando el viaje...";
const MALFORMED_CATALOGUE: &str = "Respuesta inesperada al cargar las regiones.";
pub const NO_REGIONS: &str = "No hay regiones para explorar.";

#[derive(Debug, Default)]
pub struct Explorer {
    catalogue: Vec<Region>,
    choices: Vec<Choice>,
    state: State,
    current: Option<Key>,
    panel: Option<render::Region>,
    status: Option<Status>,
    loads: Tracker,
    announcements: Tracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Uninitialized,
    CatalogueLoading,
    CatalogueReady,
}

/// Work the caller must perform on behalf of the [`Explorer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Catalogue,
    Region {
        key: Key,
        limit: usize,
        ticket: Ticket,
    },
    Expire {
        generation: Generation,
        after: Duration,
    },
}

/// Identifies an in-flight region load.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    generation: Generation,
    key: Key,
    announce: Option<String>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the catalogue, unless it is already loaded or loading.
    pub fn init(&mut self) -> Option<Request> {
        if !self.catalogue.is_empty() || self.state == State::CatalogueLoading {
            return None;
        }

        log::info!("Loading region catalogue");

        self.state = State::CatalogueLoading;
        self.status = Some(Status::info(LOADING_CATALOGUE));

        Some(Request::Catalogue)
    }

    pub fn catalogue_loaded(
        &mut self,
        result: Result<region::Catalogue, Error>,
    ) -> Option<Request> {
        let regions = result.and_then(|catalogue| {
            catalogue
                .regions
                .ok_or_else(|| Error::malformed(MALFORMED_CATALOGUE))
        });

        match regions {
            Ok(regions) => {
                log::info!("Region catalogue loaded ({} regions)", regions.len());

                self.choices = regions.iter().map(Choice::from).collect();
                self.catalogue = regions;
                self.state = State::CatalogueReady;
                self.status = None;

                let Some(first) = self.catalogue.first() else {
                    self.status = Some(Status::info(NO_REGIONS));
                    return None;
                };

                let first = first.key.clone();

                self.load(first.as_str(), Some(WELCOME))
            }
            Err(error) => {
                log::error!("{error}");

                self.state = State::Uninitialized;
                self.status = Some(Status::error(&error));

                None
            }
        }
    }

    /// Starts loading a region. Does nothing for an empty key.
    pub fn load(&mut self, key: &str, announce: Option<&str>) -> Option<Request> {
        let key = Key::parse(key)?;

        log::info!("Loading region: {key}");

        self.status = Some(Status::info(TRAVELLING));

        Some(Request::Region {
            key: key.clone(),
            limit: INHABITANTS,
            ticket: Ticket {
                generation: self.loads.next(),
                key,
                announce: announce.map(str::to_owned),
            },
        })
    }

    pub fn region_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<region::Detail, Error>,
    ) -> Option<Request> {
        if !self.loads.is_current(ticket.generation) {
            log::debug!("Discarding stale region load: {:?}", ticket.generation);
            return None;
        }

        match result.and_then(|detail| render::region(&detail)) {
            Ok(mut panel) => {
                log::info!("Region loaded: {}", ticket.key);

                // The requested key is the one in the catalogue
                panel.key = ticket.key.clone();

                self.current = Some(ticket.key);
                self.panel = Some(panel);

                let Some(announce) = ticket.announce else {
                    self.status = None;
                    return None;
                };

                let generation = self.announcements.next();
                self.status = Some(Status::announcement(announce, generation));

                Some(Request::Expire {
                    generation,
                    after: ANNOUNCEMENT,
                })
            }
            Err(error) => {
                log::error!("{error}");

                self.status = Some(Status::error(&error));

                None
            }
        }
    }

    /// Clears the announcement stamped with `generation`, if still shown.
    pub fn expire(&mut self, generation: Generation) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.is_announcement(generation))
        {
            self.status = None;
        }
    }

    /// Travels to a random region other than the current one.
    ///
    /// Without a catalogue, this retries loading it instead.
    pub fn travel(&mut self, rng: &mut (impl Rng + ?Sized)) -> Option<Request> {
        let Some(key) = self.choose_random_key(rng).cloned() else {
            return self.init();
        };

        self.load(key.as_str(), Some(TRAVELLED))
    }

    /// Picks a region uniformly at random, excluding the current one unless it
    /// is the only region available.
    pub fn choose_random_key<R>(&self, rng: &mut R) -> Option<&Key>
    where
        R: Rng + ?Sized,
    {
        let others: Vec<&Region> = self
            .catalogue
            .iter()
            .filter(|region| Some(&region.key) != self.current.as_ref())
            .collect();

        let pool: Vec<&Region> = if others.is_empty() {
            self.catalogue.iter().collect()
        } else {
            others
        };

        pool.choose(rng).map(|&region| &region.key)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn catalogue(&self) -> &[Region] {
        &self.catalogue
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The selector entry of the region on display.
    pub fn selected(&self) -> Option<&Choice> {
        let current = self.current.as_ref()?;

        self.choices.iter().find(|choice| &choice.key == current)
    }

    pub fn current_key(&self) -> Option<&Key> {
        self.current.as_ref()
    }

    pub fn panel(&self) -> Option<&render::Region> {
        self.panel.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

impl Ticket {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}
