use crate::actions::album_actions::{AlbumApi, ApiError, FetchOutcome};
use crate::models::form::search_id;
use crate::ui::{
    AlbumView, ADD_FAILED, ALBUM_ADDED, EMPTY_SEARCH, INVALID_FORM, LOAD_FAILED, NOT_FOUND,
};

/// Which branch a flow ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    /// Input was invalid; no request was sent.
    Rejected,
    NotFound,
    Failed,
}

/// Owns the API handle and the page elements, and runs the three user flows
/// against them. Each flow sends at most one request (create: one more for
/// the refresh) and never lets an error escape.
pub struct AlbumController<A, V> {
    api: A,
    view: V,
}

impl<A: AlbumApi, V: AlbumView> AlbumController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        AlbumController { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub async fn list_all(&mut self) -> FlowOutcome {
        match self.api.list_albums().await {
            Ok(albums) => {
                tracing::debug!(count = albums.len(), "Loaded albums");
                self.view.render_albums(&albums);
                FlowOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error fetching albums: {}", err);
                self.view.render_message(LOAD_FAILED);
                FlowOutcome::Failed
            }
        }
    }

    pub async fn search(&mut self) -> FlowOutcome {
        let input = self.view.search_input();
        let Ok(id) = search_id(&input) else {
            self.view.alert(EMPTY_SEARCH);
            return FlowOutcome::Rejected;
        };

        match FetchOutcome::from(self.api.get_album(id).await) {
            FetchOutcome::Success(album) => {
                self.view.render_albums(std::slice::from_ref(&album));
                FlowOutcome::Completed
            }
            FetchOutcome::NotFound => {
                tracing::error!(id, "Album not found");
                self.view.render_message(NOT_FOUND);
                FlowOutcome::NotFound
            }
            FetchOutcome::Failure(err) => {
                tracing::error!(id, "Failed to fetch album: {}", err);
                self.view.render_message(NOT_FOUND);
                FlowOutcome::Failed
            }
        }
    }

    pub async fn create(&mut self) -> FlowOutcome {
        let new_album = match self.view.album_form().validate() {
            Ok(new_album) => new_album,
            Err(err) => {
                tracing::debug!("Rejected album form: {}", err);
                self.view.alert(INVALID_FORM);
                return FlowOutcome::Rejected;
            }
        };

        let created = self.api.create_album(&new_album).await;
        if let Err(err) = created {
            return self.add_failed(err);
        }
        tracing::info!(title = %new_album.title, artist = %new_album.artist, "Album added");
        self.view.alert(ALBUM_ADDED);
        self.view.reset_form();

        // The refresh belongs to the same flow: its failure is an add failure
        // and leaves the rendering target as it was.
        let refreshed = self.api.list_albums().await;
        match refreshed {
            Ok(albums) => {
                self.view.render_albums(&albums);
                FlowOutcome::Completed
            }
            Err(err) => self.add_failed(err),
        }
    }

    fn add_failed(&mut self, err: ApiError) -> FlowOutcome {
        tracing::error!("Error adding album: {}", err);
        self.view.alert(ADD_FAILED);
        FlowOutcome::Failed
    }
}
