use super::prelude::*;

/// Deleting an unknown id is not an error, it just returns `false`.
pub fn delete_comment<R>(repo: &R, id: &str) -> Result<bool>
where
    R: CommentRepository,
{
    let deleted = repo.delete_comment(id)?;
    if deleted {
        log::info!("Deleted comment {id}");
    } else {
        log::debug!("Comment {id} does not exist (anymore)");
    }
    Ok(deleted)
}
