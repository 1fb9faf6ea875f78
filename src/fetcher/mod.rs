pub mod api;
pub mod traits;

pub use api::ApiFetcher;
pub use traits::Fetcher;
