//! Client-side data layer of the Portfolio admissions portal.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod stores;
pub mod theme;

pub use api::ApiClient;
pub use error::ApiError;
pub use models::candidate::CandidateData;
pub use stores::candidate::CandidateStore;
