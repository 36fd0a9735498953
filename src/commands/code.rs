use std::io::Read;

use anyhow::{bail, Context, Result};
use cursor_keepalive_account::extract_verification_code;

pub fn run(file: Option<String>) -> Result<()> {
    let body = match file {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading email body from stdin")?;
            buf
        }
    };

    match extract_verification_code(&body) {
        Some(code) => {
            println!("{code}");
            Ok(())
        }
        None => bail!("no verification code found in the email body"),
    }
}
