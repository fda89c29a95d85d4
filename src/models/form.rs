use thiserror::Error;

use crate::models::album::NewAlbum;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Album ID is empty.")]
    EmptyId,
    #[error("Album title is empty.")]
    EmptyTitle,
    #[error("Album artist is empty.")]
    EmptyArtist,
    #[error("Price is not a number: {0:?}")]
    InvalidPrice(String),
}

/// Raw contents of the add-album form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumForm {
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl AlbumForm {
    pub fn new(title: &str, artist: &str, price: &str) -> Self {
        AlbumForm {
            title: title.to_string(),
            artist: artist.to_string(),
            price: price.to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.artist.clear();
        self.price.clear();
    }

    pub fn validate(&self) -> Result<NewAlbum, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let artist = self.artist.trim();
        if artist.is_empty() {
            return Err(ValidationError::EmptyArtist);
        }
        let price = parse_price(&self.price)?;
        Ok(NewAlbum {
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::InvalidPrice(raw.to_string())),
    }
}

/// Trims the search input; an empty identifier never reaches the API.
pub fn search_id(raw: &str) -> Result<&str, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        Err(ValidationError::EmptyId)
    } else {
        Ok(id)
    }
}
