use cursor_keepalive_core::DeviceIdentity;
use rand::{CryptoRng, RngCore};

/// Generate a fresh identity triple from the given random source.
///
/// `machine_id` and `mac_machine_id` are independent 256-bit values rendered
/// as lowercase hex; `dev_device_id` is a v4 UUID built from the same source.
/// The generator is a parameter so callers can seed a deterministic one.
pub fn generate_identity<R: RngCore + CryptoRng>(rng: &mut R) -> DeviceIdentity {
    DeviceIdentity {
        machine_id: random_hex_id(rng),
        mac_machine_id: random_hex_id(rng),
        dev_device_id: random_device_id(rng),
    }
}

fn random_hex_id<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn random_device_id<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}
