//! Identifier generation for new entities.
//!
//! Ids are six random bytes rendered as hex (12 characters), matching the
//! ids written by the original planner. No uniqueness check is made against
//! existing entries; the entropy makes collisions implausible in practice.

use rand::RngCore;

/// Generate a random 12-character hex token.
fn new_token() -> String {
    let mut bytes = [0u8; 6];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Id for a new event: the raw token.
pub fn new_event_id() -> String {
    new_token()
}

/// Id for a new map block: the token with a `block-` prefix.
pub fn new_block_id() -> String {
    format!("block-{}", new_token())
}
