//! Method override for HTML forms.
//!
//! Browsers can only submit forms as `GET` or `POST`. A form that needs to
//! update or delete posts its data to `/posts/{id}?_method=DELETE` and the
//! router dispatches it as `DELETE /posts/{id}`.
//!
//! Only `POST` requests are rewritten, and only into methods that carry
//! side effects a form can express: `PUT`, `PATCH`, `DELETE`.

use tracing::{debug, warn};

use crate::method::Method;
use crate::request::Request;

/// Query-string key used when none is configured.
pub const DEFAULT_KEY: &str = "_method";

/// Rewrites `req`'s method in place when it is a `POST` carrying `key`.
///
/// The override value is matched case-insensitively. Unknown or disallowed
/// values leave the request untouched.
pub fn apply(req: &mut Request, key: &str) {
    if req.method() != Method::Post {
        return;
    }
    let Some(value) = req.query_param(key) else {
        return;
    };

    match value.to_ascii_uppercase().parse::<Method>() {
        Ok(method @ (Method::Put | Method::Patch | Method::Delete)) => {
            debug!(from = %req.method(), to = %method, path = req.path(), "method override");
            req.set_method(method);
        }
        _ => warn!(value = %value, path = req.path(), "ignoring method override"),
    }
}
