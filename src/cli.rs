use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cursor-keepalive",
    about = "Cursor registration helper: credentials, tokens & device identity reset"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reset the device identity in storage.json and machineid
    Reset,
    /// Generate fresh account credentials
    Account,
    /// Update the locally stored email/token credentials
    Auth {
        /// Account email address
        #[arg(long)]
        email: Option<String>,

        /// Raw WorkosCursorSessionToken cookie value; the token is
        /// extracted and stored as both access and refresh token
        #[arg(long)]
        cookie: Option<String>,

        /// Access token (takes precedence over --cookie)
        #[arg(long)]
        access_token: Option<String>,

        /// Refresh token (defaults to the access token)
        #[arg(long)]
        refresh_token: Option<String>,

        /// Print the stored credentials and exit
        #[arg(long)]
        show: bool,
    },
    /// Extract a 6-digit verification code from an email body
    Code {
        /// File containing the email body (stdin when omitted)
        #[arg(short, long)]
        file: Option<String>,
    },
}
