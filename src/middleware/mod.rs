//! HTTP middleware layered around the router.

pub mod security_headers;
