//! Http client implementations.
pub use self::reqwest::ReqwestClient;

mod reqwest;
