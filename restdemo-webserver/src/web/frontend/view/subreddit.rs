use maud::{html, Markup};

use super::page::*;
use restdemo_core::entities::*;

pub fn subreddit(sub: &Subreddit) -> Markup {
    page(
        &sub.name,
        html! {
            h1 { "Browsing The " (sub.name) " subreddit" }
            h2 { (sub.description) }
            p { (sub.subscribers) " Total Subscribers" }
            hr;
            @for post in &sub.posts {
                article {
                    p { (post.title) " - " b { (post.author) } }
                    @if let Some(ref img) = post.img {
                        img src=(img) alt=(post.title);
                    }
                }
            }
        },
    )
}

pub fn subreddit_not_found(name: &str) -> Markup {
    page(
        "Not found",
        html! {
            h1 { "I'm sorry, but we could not find the " (name) " subreddit" }
        },
    )
}
