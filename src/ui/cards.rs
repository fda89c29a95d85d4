use rocket::http::RawStr;

use crate::models::album::Album;

/// Display form of one album: what every front-end shows for it.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumCard {
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl From<&Album> for AlbumCard {
    fn from(album: &Album) -> Self {
        AlbumCard {
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: format_price(album.price),
        }
    }
}

impl AlbumCard {
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"album-card\"><h3>{}</h3><p><strong>Artist:</strong> {}</p><p><strong>Price:</strong> {}</p></div>",
            RawStr::new(&self.title).html_escape(),
            RawStr::new(&self.artist).html_escape(),
            RawStr::new(&self.price).html_escape(),
        )
    }
}

/// One card per album, in input order.
pub fn album_cards(albums: &[Album]) -> Vec<AlbumCard> {
    albums.iter().map(AlbumCard::from).collect()
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
