use super::prelude::*;

/// Replaces the text of an existing comment, leaving id and username alone.
pub fn update_comment<R>(repo: &R, id: &str, text: String) -> Result<Comment>
where
    R: CommentRepository,
{
    log::debug!("Updating comment {id}");
    let updated = repo.update_comment_text(id, text).inspect_err(|err| {
        log::info!("Unable to update comment {id}: {err}");
    })?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::super::{create_comment, get_comment, list_comments, tests::MockDb, NewComment};
    use super::*;

    #[test]
    fn update_only_changes_the_text() {
        let db = MockDb::default();
        let c = create_comment(
            &db,
            NewComment {
                username: "amy".into(),
                comment: "hi".into(),
            },
        )
        .unwrap();
        let updated = update_comment(&db, c.id.as_str(), "hello".into()).unwrap();
        assert_eq!(c.id, updated.id);
        assert_eq!("amy", updated.username);
        assert_eq!("hello", updated.comment);
        assert_eq!(updated, get_comment(&db, c.id.as_str()).unwrap());
    }

    #[test]
    fn update_unknown_comment_is_not_found() {
        let db = MockDb::default();
        let c = create_comment(
            &db,
            NewComment {
                username: "amy".into(),
                comment: "hi".into(),
            },
        )
        .unwrap();
        let err = update_comment(&db, "does-not-exist", "hello".into()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(vec![c], list_comments(&db).unwrap());
    }
}
