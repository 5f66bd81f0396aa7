pub mod credentials;
pub mod http;

pub use credentials::*;
pub use http::*;
