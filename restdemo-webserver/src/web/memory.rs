use std::ops::Deref;

use restdemo_db_memory::Connections as Store;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Connections(Store);

impl From<Store> for Connections {
    fn from(store: Store) -> Self {
        Self(store)
    }
}

impl Deref for Connections {
    type Target = Store;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
