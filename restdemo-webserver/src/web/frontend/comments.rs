use maud::Markup;
use rocket::{delete, form::Form, get, patch, post, response::Redirect, uri, FromForm};
use restdemo_core::usecases;

use super::view;
use crate::web::{error::Error, memory::Connections};

type Result<T> = std::result::Result<T, Error>;

#[derive(FromForm)]
pub struct NewComment<'r> {
    username: &'r str,
    comment: &'r str,
}

#[derive(FromForm)]
pub struct EditComment<'r> {
    comment: &'r str,
}

#[get("/comments")]
pub fn get_comments(db: Connections) -> Result<Markup> {
    let comments = usecases::list_comments(&db.shared())?;
    Ok(view::comments(&comments))
}

#[get("/comments/new")]
pub fn get_new_comment() -> Markup {
    view::new_comment()
}

#[post("/comments", data = "<data>")]
pub fn post_comment(db: Connections, data: Form<NewComment<'_>>) -> Result<Redirect> {
    let NewComment { username, comment } = data.into_inner();
    let new_comment = usecases::NewComment {
        username: username.to_owned(),
        comment: comment.to_owned(),
    };
    let created = usecases::create_comment(&db.exclusive(), new_comment)?;
    info!("Created comment {} by '{}'", created.id, created.username);
    Ok(Redirect::to(uri!(get_comments)))
}

#[get("/comments/<id>")]
pub fn get_comment(db: Connections, id: &str) -> Result<Markup> {
    let comment = usecases::get_comment(&db.shared(), id)?;
    Ok(view::comment(&comment))
}

#[get("/comments/<id>/edit")]
pub fn get_edit_comment(db: Connections, id: &str) -> Result<Markup> {
    let comment = usecases::get_comment(&db.shared(), id)?;
    Ok(view::edit_comment(&comment))
}

#[patch("/comments/<id>", data = "<data>")]
pub fn patch_comment(db: Connections, id: &str, data: Form<EditComment<'_>>) -> Result<Redirect> {
    let text = data.into_inner().comment.to_owned();
    usecases::update_comment(&db.exclusive(), id, text)?;
    Ok(Redirect::to(uri!(get_comments)))
}

#[delete("/comments/<id>")]
pub fn delete_comment(db: Connections, id: &str) -> Result<Redirect> {
    usecases::delete_comment(&db.exclusive(), id)?;
    Ok(Redirect::to(uri!(get_comments)))
}
