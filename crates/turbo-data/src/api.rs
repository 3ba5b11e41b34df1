//! The `Api` collaborator: a path in, an `{ ok, json }` reply out.

use async_trait::async_trait;
use serde_json::Value;

use crate::{FetchError, Response};

/// Reply from a JSON API call.
///
/// `ok` mirrors the transport's success flag; callers treat `ok == false` as
/// failure without inspecting `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub ok: bool,
    pub status: u16,
    pub json: Value,
}

impl ApiReply {
    /// A successful reply carrying `json`.
    pub fn ok(json: Value) -> Self {
        Self {
            ok: true,
            status: 200,
            json,
        }
    }

    /// A failed reply with the given status and body.
    pub fn failed(status: u16, json: Value) -> Self {
        Self {
            ok: false,
            status,
            json,
        }
    }

    /// Convert a raw response into a reply.
    ///
    /// A blank body becomes `null`. An unparseable body is an error for
    /// successful responses and `null` for failed ones, so that error pages
    /// served as HTML still surface as application failures.
    pub fn from_response(response: &Response) -> Result<Self, FetchError> {
        let ok = response.is_success();
        let json = if response.is_body_blank() {
            Value::Null
        } else {
            match response.json::<Value>() {
                Ok(value) => value,
                Err(e) if ok => return Err(e),
                Err(_) => Value::Null,
            }
        };

        Ok(Self {
            ok,
            status: response.status,
            json,
        })
    }

    /// The `message` field of the body, if it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.json
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}

/// A JSON API reachable by path.
#[async_trait(?Send)]
pub trait Api {
    /// Issue a GET for `path` and return the decoded reply.
    async fn request_json(&self, path: &str) -> Result<ApiReply, FetchError>;
}

#[async_trait(?Send)]
impl<T: Api + ?Sized> Api for std::sync::Arc<T> {
    async fn request_json(&self, path: &str) -> Result<ApiReply, FetchError> {
        (**self).request_json(path).await
    }
}
