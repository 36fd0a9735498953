pub mod backup;
pub mod generator;
pub mod paths;
pub mod reset;

pub use backup::{backup_file, GuardedWrite};
pub use generator::generate_identity;
pub use paths::{resolve_paths, CursorPaths, PathContext, Platform};
pub use reset::IdentityResetter;
