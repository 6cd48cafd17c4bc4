use restdemo_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use rocket::{
    self,
    http::Status,
    response::{self, status, Responder},
};
use thiserror::Error;

use super::frontend::view;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        UsecaseError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::Usecase(err) if err.is_not_found() => {
                debug!("Not found: {}", req.uri());
                status::NotFound(view::not_found(&err.to_string())).respond_to(req)
            }
            Error::Usecase(UsecaseError::Repo(err)) => {
                error!("Repository error: {err}");
                Err(Status::InternalServerError)
            }
            Error::Usecase(err) => {
                status::BadRequest(view::bad_request(&err.to_string())).respond_to(req)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::local::blocking::Client;

    fn respond(err: Error) -> Status {
        let client = Client::untracked(rocket::build()).unwrap();
        let req = client.get("/");
        match err.respond_to(req.inner()) {
            Ok(res) => res.status(),
            Err(status) => status,
        }
    }

    #[test]
    fn map_errors_to_status() {
        assert_eq!(Status::NotFound, respond(RepoError::NotFound.into()));
        assert_eq!(
            Status::InternalServerError,
            respond(RepoError::ReadOnly.into())
        );
        assert_eq!(Status::BadRequest, respond(UsecaseError::Price.into()));
    }
}
