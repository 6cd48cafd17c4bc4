use maud::{html, Markup};

mod comments;
mod page;
mod subreddit;

pub use comments::*;
use page::*;
pub use subreddit::*;

pub fn index() -> Markup {
    page(
        "Home",
        html! {
            h1 { "Home" }
            p { "Welcome! Try " a href="/random" { "a random number" } " or "
                a href="/comments" { "the comments" } "." }
        },
    )
}

pub fn random(num: u8) -> Markup {
    page(
        "Random",
        html! {
            h1 { "Your random number is " span class="random" { (num) } }
            @if num % 2 == 0 {
                p { "That is an even number!" }
            } @else {
                p { "That is an odd number!" }
            }
        },
    )
}

pub fn search_results(search_term: &str) -> Markup {
    html! {
        h1 { "Search results for: " (search_term) }
    }
}

pub fn nothing_searched() -> Markup {
    html! { "NOTHING FOUND IF NOTHING SEARCHED" }
}

pub fn not_found(msg: &str) -> Markup {
    page(
        "Not found",
        html! {
            h1 { "Not found" }
            p class="error" { (msg) }
            a href="/comments" { "Back to all comments" }
        },
    )
}

pub fn bad_request(msg: &str) -> Markup {
    page(
        "Bad request",
        html! {
            h1 { "Bad request" }
            p class="error" { (msg) }
        },
    )
}
