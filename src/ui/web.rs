use std::net::IpAddr;
use std::sync::Arc;

use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::{get, post, routes, Build, FromForm, Rocket, State};

use crate::actions::album_actions::AlbumApi;
use crate::models::form::AlbumForm;
use crate::ui::controller::AlbumController;
use crate::ui::html::HtmlPage;

pub type SharedApi = Arc<dyn AlbumApi>;

#[derive(Debug, FromForm)]
pub struct AddAlbumForm {
    title: Option<String>,
    artist: Option<String>,
    price: Option<String>,
}

impl From<AddAlbumForm> for AlbumForm {
    fn from(form: AddAlbumForm) -> Self {
        AlbumForm {
            title: form.title.unwrap_or_default(),
            artist: form.artist.unwrap_or_default(),
            price: form.price.unwrap_or_default(),
        }
    }
}

/// Every request is a fresh page load: the album list is fetched before the
/// requested action runs on top of it.
async fn load_page(api: &State<SharedApi>, page: HtmlPage) -> AlbumController<SharedApi, HtmlPage> {
    let mut controller = AlbumController::new(Arc::clone(api.inner()), page);
    controller.list_all().await;
    controller
}

#[get("/")]
pub async fn index(api: &State<SharedApi>) -> RawHtml<String> {
    let controller = load_page(api, HtmlPage::new()).await;
    RawHtml(controller.into_view().to_document())
}

#[get("/search?<id>")]
pub async fn search(api: &State<SharedApi>, id: Option<String>) -> RawHtml<String> {
    let page = HtmlPage::new().with_search_input(id.as_deref().unwrap_or_default());
    let mut controller = load_page(api, page).await;
    controller.search().await;
    RawHtml(controller.into_view().to_document())
}

#[post("/add", data = "<form>")]
pub async fn add(api: &State<SharedApi>, form: Form<AddAlbumForm>) -> RawHtml<String> {
    let page = HtmlPage::new().with_form(form.into_inner().into());
    let mut controller = load_page(api, page).await;
    controller.create().await;
    RawHtml(controller.into_view().to_document())
}

pub fn build(api: SharedApi, address: IpAddr, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port));
    rocket::custom(figment)
        .manage(api)
        .mount("/", routes![index, search, add])
}

pub async fn serve(api: SharedApi, address: IpAddr, port: u16) -> Result<(), rocket::Error> {
    tracing::info!(%address, port, "Serving album page");
    build(api, address, port).launch().await?;
    Ok(())
}
