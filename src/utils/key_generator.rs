//! Random short-key generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of a generated short key in characters.
pub const KEY_LENGTH: usize = 10;

/// Generates a random short key.
///
/// Draws [`KEY_LENGTH`] characters uniformly from the 62-symbol alphanumeric
/// alphabet (mixed-case letters and digits). The generator is stateless and
/// makes no uniqueness guarantee; uniqueness is enforced by the store's
/// constraint on `short_url` and resolved by retrying in
/// [`crate::application::services::LinkService`].
///
/// Safe to call from any thread without synchronization.
pub fn generate_key() -> String {
    let mut rng = rand::rng();
    (0..KEY_LENGTH).map(|_| rng.sample(Alphanumeric) as char).collect()
}
