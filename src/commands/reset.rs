use anyhow::Result;
use cursor_keepalive_core::config::AppConfig;
use cursor_keepalive_identity::IdentityResetter;
use tracing::error;

pub fn run(config: AppConfig) -> Result<()> {
    let outcome = IdentityResetter::for_host().map(|resetter| {
        resetter
            .create_missing_machine_id(config.reset.create_missing_machine_id)
            .try_reset()
    });

    match outcome {
        Ok(Ok(identity)) => {
            println!("Device identity reset.");
            println!("  machine ID:      {}", identity.machine_id);
            println!("  MAC machine ID:  {}", identity.mac_machine_id);
            println!("  device ID:       {}", identity.dev_device_id);
            Ok(())
        }
        Ok(Err(e)) | Err(e) => {
            error!("identity reset failed: {e}");
            std::process::exit(1);
        }
    }
}
