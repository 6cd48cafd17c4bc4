use maud::Markup;
use rand::Rng;
use rocket::{
    self,
    form::Form,
    get, post,
    response::{content::RawCss, status},
    routes, FromForm, Route, State,
};

use super::Subreddits;

mod comments;
pub(crate) mod view;


const MAIN_CSS: &str = include_str!("app.css");

const RANDOM_MIN: u8 = 1;
const RANDOM_MAX: u8 = 10;

#[get("/")]
pub fn get_index() -> Markup {
    view::index()
}

#[get("/app.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/cats")]
pub fn get_cats() -> &'static str {
    "MEOW"
}

#[get("/dogs")]
pub fn get_dogs() -> &'static str {
    "WOOF"
}

#[get("/random")]
pub fn get_random() -> Markup {
    let num = rand::thread_rng().gen_range(RANDOM_MIN..=RANDOM_MAX);
    view::random(num)
}

// Exactly one body is sent, also if the search term is missing.
#[get("/search?<q>")]
pub fn get_search(q: Option<&str>) -> Markup {
    match q.filter(|q| !q.is_empty()) {
        Some(q) => view::search_results(q),
        None => view::nothing_searched(),
    }
}

#[get("/r/<subreddit>")]
pub fn get_subreddit(
    subreddits: &State<Subreddits>,
    subreddit: &str,
) -> Result<Markup, status::NotFound<Markup>> {
    match subreddits.get(subreddit) {
        Some(data) => Ok(view::subreddit(data)),
        None => {
            debug!("Unknown subreddit '{subreddit}'");
            Err(status::NotFound(view::subreddit_not_found(subreddit)))
        }
    }
}

#[get("/tacos")]
pub fn get_tacos() -> &'static str {
    "GET /tacos response"
}

#[derive(FromForm)]
pub struct TacoOrder<'r> {
    meat: &'r str,
    qty: &'r str,
}

#[post("/tacos", data = "<order>")]
pub fn post_tacos(order: Form<TacoOrder<'_>>) -> String {
    let TacoOrder { meat, qty } = order.into_inner();
    format!("OK, here are you {qty} {meat} tacos")
}

#[get("/<_..>", rank = 100)]
pub fn get_route_not_found() -> &'static str {
    "Route not found"
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        get_cats,
        get_dogs,
        get_random,
        get_search,
        get_subreddit,
        get_tacos,
        post_tacos,
        comments::get_comments,
        comments::get_new_comment,
        comments::post_comment,
        comments::get_comment,
        comments::get_edit_comment,
        comments::patch_comment,
        comments::delete_comment,
        get_route_not_found,
    ]
}
