pub mod store;

pub use store::{AuthStore, StoredAuth};
