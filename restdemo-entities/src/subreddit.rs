#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subreddit {
    pub name        : String,
    pub subscribers : u64,
    pub description : String,
    pub posts       : Vec<Post>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title  : String,
    pub author : String,
    pub img    : Option<String>,
}
