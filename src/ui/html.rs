use rocket::http::RawStr;

use crate::models::album::Album;
use crate::models::form::AlbumForm;
use crate::ui::cards::album_cards;
use crate::ui::AlbumView;

/// Server-side copy of the album page. Flows render into it, and the result
/// is sent to the browser as a whole document.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    search_input: String,
    form: AlbumForm,
    album_list: String,
    prompts: Vec<String>,
}

impl HtmlPage {
    pub fn new() -> Self {
        HtmlPage::default()
    }

    pub fn with_search_input(mut self, id: &str) -> Self {
        self.search_input = id.to_string();
        self
    }

    pub fn with_form(mut self, form: AlbumForm) -> Self {
        self.form = form;
        self
    }

    pub fn to_document(&self) -> String {
        let prompts: String = self
            .prompts
            .iter()
            .map(|prompt| {
                format!(
                    "<dialog class=\"prompt\" open><p>{}</p><form method=\"dialog\"><button>OK</button></form></dialog>",
                    RawStr::new(prompt).html_escape()
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Albums</title>
</head>
<body>
<h1>Albums</h1>
{prompts}
<section>
<form method="get" action="/search">
<input type="text" id="search-input" name="id" placeholder="Album ID" value="{search}">
<button type="submit" id="search-button">Search</button>
</form>
</section>
<section>
<h2>Add album</h2>
<form id="add-album-form" method="post" action="/add">
<input type="text" id="album-title" name="title" placeholder="Title" value="{title}">
<input type="text" id="album-artist" name="artist" placeholder="Artist" value="{artist}">
<input type="text" id="album-price" name="price" placeholder="Price" value="{price}">
<button type="submit">Add album</button>
</form>
</section>
<div id="album-list">{list}</div>
</body>
</html>
"#,
            prompts = prompts,
            search = RawStr::new(&self.search_input).html_escape(),
            title = RawStr::new(&self.form.title).html_escape(),
            artist = RawStr::new(&self.form.artist).html_escape(),
            price = RawStr::new(&self.form.price).html_escape(),
            list = self.album_list,
        )
    }
}

impl AlbumView for HtmlPage {
    fn search_input(&self) -> String {
        self.search_input.clone()
    }

    fn album_form(&self) -> AlbumForm {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form.clear();
    }

    fn render_albums(&mut self, albums: &[Album]) {
        self.album_list.clear();
        for card in album_cards(albums) {
            self.album_list.push_str(&card.to_html());
        }
    }

    fn render_message(&mut self, message: &str) {
        self.album_list = format!("<p>{}</p>", RawStr::new(message).html_escape());
    }

    fn alert(&mut self, message: &str) {
        self.prompts.push(message.to_string());
    }
}
