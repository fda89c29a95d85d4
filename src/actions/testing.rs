//! In-memory stand-in for the album API, recording every call it receives.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::subscriber::DefaultGuard;

use crate::actions::album_actions::{AlbumApi, ApiError};
use crate::models::album::{Album, AlbumId, NewAlbum};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(String),
    Create(NewAlbum),
}

#[derive(Debug, Default)]
pub struct FakeAlbumApi {
    albums: Mutex<Vec<Album>>,
    calls: Mutex<Vec<Call>>,
    fail_list: bool,
    fail_get: bool,
    fail_create: bool,
}

impl FakeAlbumApi {
    pub fn with_albums(albums: Vec<Album>) -> Self {
        FakeAlbumApi {
            albums: Mutex::new(albums),
            ..Default::default()
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error() -> ApiError {
    ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl AlbumApi for FakeAlbumApi {
    async fn list_albums(&self) -> Result<Vec<Album>, ApiError> {
        self.record(Call::List);
        if self.fail_list {
            return Err(server_error());
        }
        Ok(self.albums.lock().unwrap().clone())
    }

    async fn get_album(&self, id: &str) -> Result<Album, ApiError> {
        self.record(Call::Get(id.to_string()));
        if self.fail_get {
            return Err(server_error());
        }
        self.albums
            .lock()
            .unwrap()
            .iter()
            .find(|album| album.id.as_ref().is_some_and(|album_id| album_id.to_string() == id))
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_album(&self, album: &NewAlbum) -> Result<Value, ApiError> {
        self.record(Call::Create(album.clone()));
        if self.fail_create {
            return Err(server_error());
        }
        let mut albums = self.albums.lock().unwrap();
        let created = Album {
            id: Some(AlbumId::Text((albums.len() + 1).to_string())),
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: album.price,
        };
        let body = serde_json::to_value(&created).unwrap();
        albums.push(created);
        Ok(body)
    }
}

pub fn album(id: &str, title: &str, artist: &str, price: f64) -> Album {
    Album {
        id: Some(AlbumId::Text(id.to_string())),
        title: title.to_string(),
        artist: artist.to_string(),
        price,
    }
}

pub fn sample_albums() -> Vec<Album> {
    vec![
        album("1", "Blue Train", "John Coltrane", 56.99),
        album("2", "Jeru", "Gerry Mulligan", 17.99),
        album("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}

/// Log lines written while the returned guard is alive on this thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
