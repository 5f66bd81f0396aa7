pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::config::{Config, ConfigError};

pub use crate::domain::{
    AttendanceRecord, Department, FetchError, PageResult, Pagination, Result,
};

pub use crate::repositories::{ApiClient, CredentialProvider, NoToken, StaticToken};

pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::domain::{
        AttendanceRecord, Department, FetchError, PageResult, Pagination, Result,
    };
    pub use crate::repositories::{ApiClient, CredentialProvider, NoToken, StaticToken};
    pub use crate::services::{attendance, departments};
}
