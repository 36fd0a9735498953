pub mod generator;
pub mod session;
pub mod verification;

pub use generator::AccountGenerator;
pub use session::{token_from_cookie, SESSION_COOKIE_NAME};
pub use verification::extract_verification_code;
