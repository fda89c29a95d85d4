pub mod cards;
pub mod controller;
pub mod html;
pub mod terminal;
pub mod web;

use crate::models::album::Album;
use crate::models::form::AlbumForm;

pub const LOAD_FAILED: &str = "Failed to load albums. Please try again later.";
pub const NOT_FOUND: &str = "Album not found. Please try another ID.";
pub const EMPTY_SEARCH: &str = "Please enter a valid album ID.";
pub const INVALID_FORM: &str = "Please fill all fields correctly.";
pub const ALBUM_ADDED: &str = "Album added successfully!";
pub const ADD_FAILED: &str = "Failed to add album. Please try again.";

/// The page elements a controller reads from and renders into.
pub trait AlbumView {
    /// Current contents of the search field.
    fn search_input(&self) -> String;

    /// Current contents of the add-album form.
    fn album_form(&self) -> AlbumForm;

    fn reset_form(&mut self);

    /// Replaces the rendering target with one card per album, in order.
    fn render_albums(&mut self, albums: &[Album]);

    /// Replaces the rendering target with a single message.
    fn render_message(&mut self, message: &str);

    /// Shows a prompt the user has to acknowledge before anything else runs.
    fn alert(&mut self, message: &str);
}
