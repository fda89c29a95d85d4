use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned album identifier. Usually a string or an integer, but any
/// JSON value is kept so one odd id never fails a whole listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AlbumId {
    Text(String),
    Number(i64),
    Other(Value),
}

impl Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumId::Text(id) => write!(f, "{}", id),
            AlbumId::Number(id) => write!(f, "{}", id),
            AlbumId::Other(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AlbumId>,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}
