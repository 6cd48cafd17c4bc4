use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.store.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        get(&self.store.borrow().comments, id)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.store.borrow().comments.clone())
    }
    fn update_comment_text(&self, id: &str, text: String) -> Result<Comment> {
        update_comment_text(&mut self.store.borrow_mut(), id, text)
    }
    fn delete_comment(&self, id: &str) -> Result<bool> {
        Ok(delete_comment(&mut self.store.borrow_mut(), id))
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        Err(RepoError::ReadOnly)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        get(&self.store.comments, id)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.store.comments.clone())
    }
    fn update_comment_text(&self, _id: &str, _text: String) -> Result<Comment> {
        Err(RepoError::ReadOnly)
    }
    fn delete_comment(&self, _id: &str) -> Result<bool> {
        Err(RepoError::ReadOnly)
    }
}

fn create_comment(store: &mut Store, comment: Comment) -> Result<()> {
    if store.comments.iter().any(|c| c.id == comment.id) {
        return Err(RepoError::AlreadyExists);
    }
    store.comments.push(comment);
    Ok(())
}

fn update_comment_text(store: &mut Store, id: &str, text: String) -> Result<Comment> {
    let comment = store
        .comments
        .iter_mut()
        .find(|c| c.key() == id)
        .ok_or(RepoError::NotFound)?;
    comment.comment = text;
    Ok(comment.clone())
}

fn delete_comment(store: &mut Store, id: &str) -> bool {
    let len_before = store.comments.len();
    store.comments.retain(|c| c.key() != id);
    debug_assert!(len_before - store.comments.len() <= 1);
    store.comments.len() < len_before
}

#[cfg(test)]
mod tests {
    use crate::Connections;
    use restdemo_core::{entities::*, repositories::*, RepoError};
    use restdemo_entities::builders::*;
    use std::thread;

    #[test]
    fn list_in_insertion_order() {
        let connections = Connections::init();
        let db = connections.exclusive();
        for name in ["c", "a", "b"] {
            db.create_comment(Comment::build().username(name).finish())
                .unwrap();
        }
        let names: Vec<_> = db
            .all_comments()
            .unwrap()
            .into_iter()
            .map(|c| c.username)
            .collect();
        assert_eq!(vec!["c", "a", "b"], names);
    }

    #[test]
    fn reject_duplicate_ids() {
        let connections = Connections::init();
        let db = connections.exclusive();
        let c = Comment::build().id("foo").finish();
        db.create_comment(c.clone()).unwrap();
        assert!(matches!(
            db.create_comment(c),
            Err(RepoError::AlreadyExists)
        ));
    }

    #[test]
    fn update_and_delete_unknown_ids() {
        let connections = Connections::init();
        let db = connections.exclusive();
        assert!(matches!(
            db.update_comment_text("foo", "bar".into()),
            Err(RepoError::NotFound)
        ));
        assert!(!db.delete_comment("foo").unwrap());
    }

    #[test]
    fn read_only_handle_rejects_writes() {
        let connections = Connections::init();
        {
            let db = connections.exclusive();
            db.create_comment(Comment::build().id("foo").text("hi").finish())
                .unwrap();
        }
        let db = connections.shared();
        assert_eq!("hi", db.load_comment("foo").unwrap().comment);
        assert!(matches!(
            db.create_comment(Comment::build().finish()),
            Err(RepoError::ReadOnly)
        ));
        assert!(matches!(
            db.update_comment_text("foo", "bar".into()),
            Err(RepoError::ReadOnly)
        ));
        assert!(matches!(db.delete_comment("foo"), Err(RepoError::ReadOnly)));
        assert_eq!(1, db.all_comments().unwrap().len());
    }

    #[test]
    fn concurrent_writers_do_not_lose_updates() {
        let connections = Connections::init();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let connections = connections.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        connections
                            .exclusive()
                            .create_comment(Comment::build().finish())
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(800, connections.shared().all_comments().unwrap().len());
    }
}
