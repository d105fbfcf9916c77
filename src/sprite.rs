use crate::dexbase::Session;

use bytes::Bytes;
use iced::widget::image;
use std::collections::HashMap;
use std::fmt;
use std::io;
use tokio::task;

/// A decoded remote image.
#[derive(Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Sprite {
    pub fn fetch(
        url: &str,
        session: &Session,
    ) -> impl Future<Output = Result<Self, anywho::Error>> + use<> {
        let url = url.to_owned();
        let session = session.clone();

        async move {
            let bytes = session.download(&url).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || {
                let image = ::image::ImageReader::new(io::Cursor::new(bytes))
                    .with_guessed_format()?
                    .decode()?
                    .to_rgba8();

                Ok(Sprite {
                    width: image.width(),
                    height: image.height(),
                    rgba: Bytes::from(image.into_raw()),
                })
            })
            .await?
        }
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}

/// Every image requested so far, keyed by URL.
///
/// Entries live for the whole session; failed downloads are not retried.
#[derive(Default)]
pub struct Cache {
    images: HashMap<String, Image>,
}

pub enum Image {
    Loading,
    Loaded(image::Handle),
    Errored,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the URLs that have never been requested as loading, and returns them.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter_map(|url| {
                if self.images.contains_key(url) {
                    return None;
                }

                let _ = self.images.insert(url.to_owned(), Image::Loading);

                Some(url.to_owned())
            })
            .collect()
    }

    pub fn insert(&mut self, url: String, result: Result<Sprite, anywho::Error>) {
        let image = match result {
            Ok(sprite) => {
                Image::Loaded(image::Handle::from_rgba(sprite.width, sprite.height, sprite.rgba))
            }
            Err(error) => {
                log::warn!("Image unavailable ({url}): {error}");

                Image::Errored
            }
        };

        let _ = self.images.insert(url, image);
    }

    pub fn get(&self, url: &str) -> Option<&Image> {
        self.images.get(url)
    }
}
