use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub username : String,
    pub comment  : String,
}

pub fn create_comment<R>(repo: &R, c: NewComment) -> Result<Comment>
where
    R: CommentRepository,
{
    let NewComment { username, comment } = c;
    let new_comment = Comment {
        id: Id::new(),
        username,
        comment,
    };
    log::debug!("Creating comment {}", new_comment.id);
    repo.create_comment(new_comment.clone())?;
    Ok(new_comment)
}
