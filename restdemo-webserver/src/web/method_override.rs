use rocket::{
    fairing::{Fairing, Info, Kind},
    http::Method,
    Data, Request,
};

/// Name of the query parameter that carries the intended method.
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// Lets HTML forms, which can only `POST`, reach `PATCH`, `PUT` and
/// `DELETE` routes by appending `?_method=PATCH` (etc.) to the action.
#[derive(Debug, Default)]
pub struct MethodOverride;

fn overridden_method(value: &str) -> Option<Method> {
    [Method::Patch, Method::Put, Method::Delete]
        .into_iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(value))
}

#[rocket::async_trait]
impl Fairing for MethodOverride {
    fn info(&self) -> Info {
        Info {
            name: "Method override",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _: &mut Data<'_>) {
        if req.method() != Method::Post {
            return;
        }
        let method = req
            .query_value::<&str>(METHOD_OVERRIDE_PARAM)
            .and_then(Result::ok)
            .and_then(overridden_method);
        if let Some(method) = method {
            debug!("Overriding POST {} with {method}", req.uri());
            req.set_method(method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overridden_methods() {
        assert_eq!(Some(Method::Patch), overridden_method("PATCH"));
        assert_eq!(Some(Method::Patch), overridden_method("patch"));
        assert_eq!(Some(Method::Delete), overridden_method("Delete"));
        assert_eq!(Some(Method::Put), overridden_method("PUT"));
        assert_eq!(None, overridden_method("GET"));
        assert_eq!(None, overridden_method("POST"));
        assert_eq!(None, overridden_method(""));
    }
}
