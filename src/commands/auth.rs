use anyhow::{bail, Result};
use cursor_keepalive_account::token_from_cookie;
use cursor_keepalive_auth::AuthStore;
use cursor_keepalive_core::config::AppConfig;

fn open_store(config: &AppConfig) -> Result<AuthStore> {
    let path = match &config.auth.store_path {
        Some(path) => path.into(),
        None => match AuthStore::default_path() {
            Some(path) => path,
            None => bail!("no config directory available; set [auth] store_path"),
        },
    };
    Ok(AuthStore::new(path))
}

pub fn run(
    config: AppConfig,
    email: Option<String>,
    cookie: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    show: bool,
) -> Result<()> {
    let store = open_store(&config)?;

    if show {
        let auth = store.load()?;
        println!("Email:         {}", auth.email.as_deref().unwrap_or("-"));
        println!("Access token:  {}", auth.access_token.as_deref().unwrap_or("-"));
        println!("Refresh token: {}", auth.refresh_token.as_deref().unwrap_or("-"));
        if let Some(updated) = auth.updated_at {
            println!("Updated at:    {}", updated);
        }
        return Ok(());
    }

    let access = access_token.or_else(|| {
        cookie.as_deref().and_then(|value| {
            let token = token_from_cookie(value);
            if token.is_none() {
                eprintln!("could not extract a token from the cookie value");
            }
            token
        })
    });
    // The sign-up flow stores the session token as both tokens
    let refresh = refresh_token.or_else(|| access.clone());

    if email.is_none() && access.is_none() && refresh.is_none() {
        bail!("nothing to update; pass --email, --cookie or --access-token");
    }

    store.update(email.as_deref(), access.as_deref(), refresh.as_deref())?;
    println!("Auth store updated: {}", store.path().display());

    Ok(())
}
