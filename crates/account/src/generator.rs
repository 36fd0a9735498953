use chrono::Utc;
use cursor_keepalive_core::AccountInfo;
use rand::seq::SliceRandom;
use rand::Rng;

const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Generates disposable account credentials for registration attempts.
pub struct AccountGenerator {
    domain: String,
    first_name: String,
    last_name: String,
    password_length: usize,
}

impl AccountGenerator {
    pub fn new(domain: String, first_name: String, last_name: String) -> Self {
        Self {
            domain,
            first_name,
            last_name,
            password_length: 12,
        }
    }

    pub fn password_length(mut self, length: usize) -> Self {
        self.password_length = length;
        self
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> AccountInfo {
        AccountInfo {
            email: self.generate_email(rng),
            password: generate_password(rng, self.password_length),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Random mailbox name plus the tail of the current unix timestamp, so
    /// addresses stay unique across rapid repeated runs.
    fn generate_email<R: Rng>(&self, rng: &mut R) -> String {
        let letters: String = (0..8).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
        let timestamp = Utc::now().timestamp().to_string();
        let suffix = &timestamp[timestamp.len().saturating_sub(6)..];
        format!("{}{}@{}", letters, suffix, self.domain)
    }
}

/// Sample a password from the mixed letters/digits/symbols charset.
pub fn generate_password<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| *PASSWORD_CHARSET.choose(rng).unwrap() as char)
        .collect()
}
