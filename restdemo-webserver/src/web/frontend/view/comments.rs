use maud::{html, Markup};

use super::page::*;
use crate::web::method_override::METHOD_OVERRIDE_PARAM;
use restdemo_core::entities::*;

fn comment_url(id: &Id) -> String {
    format!("/comments/{id}")
}

fn comment_url_with_method(id: &Id, method: &str) -> String {
    format!("/comments/{id}?{METHOD_OVERRIDE_PARAM}={method}")
}

pub fn comments(comments: &[Comment]) -> Markup {
    page(
        "Comments",
        html! {
            h1 { "Comments" }
            @if comments.is_empty() {
                p { "No comments yet." }
            } @else {
                ul class="comments" {
                    @for c in comments {
                        li {
                            (c.comment) " - " b { (c.username) }
                            " "
                            a href=(comment_url(&c.id)) { "details" }
                        }
                    }
                }
            }
            a href="/comments/new" { "New comment" }
        },
    )
}

pub fn new_comment() -> Markup {
    page(
        "New comment",
        html! {
            h1 { "Make a new comment" }
            form action="/comments" method="POST" {
                section {
                    label for="username" { "Enter username:" }
                    input type="text" id="username" placeholder="username" name="username" required;
                }
                section {
                    label for="comment" { "Comment text" }
                    br;
                    textarea id="comment" name="comment" cols="30" rows="5" required {}
                }
                button { "Submit" }
            }
            a href="/comments" { "Back to index" }
        },
    )
}

pub fn comment(c: &Comment) -> Markup {
    page(
        "Comment details",
        html! {
            h1 { "Comment id: " (c.id) }
            h2 { (c.comment) " - " (c.username) }
            a href="/comments" { "Back to index" }
            " "
            a href=(format!("{}/edit", comment_url(&c.id))) { "Edit comment" }
            form method="POST" action=(comment_url_with_method(&c.id, "DELETE")) {
                button { "Delete" }
            }
        },
    )
}

pub fn edit_comment(c: &Comment) -> Markup {
    page(
        "Edit comment",
        html! {
            h1 { "Edit" }
            form method="POST" action=(comment_url_with_method(&c.id, "PATCH")) {
                textarea name="comment" cols="30" rows="10" { (c.comment) }
                button { "Save" }
            }
            a href=(comment_url(&c.id)) { "Cancel" }
        },
    )
}
