use anyhow::Result;
use cursor_keepalive_account::AccountGenerator;
use cursor_keepalive_core::config::AppConfig;

pub fn run(config: AppConfig) -> Result<()> {
    let generator = AccountGenerator::new(
        config.account.email_domain,
        config.account.first_name,
        config.account.last_name,
    )
    .password_length(config.account.password_length);

    let account = generator.generate(&mut rand::thread_rng());

    println!("Email:      {}", account.email);
    println!("Password:   {}", account.password);
    println!("First name: {}", account.first_name);
    println!("Last name:  {}", account.last_name);

    Ok(())
}
