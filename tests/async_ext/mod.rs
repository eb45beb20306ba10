pub mod future_ext;
pub mod request_scope;
