use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

pub fn generate_random_bytes(len: usize) -> Zeroizing<Vec<u8>> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    OsRng.fill_bytes(bytes.as_mut_slice());
    bytes
}
