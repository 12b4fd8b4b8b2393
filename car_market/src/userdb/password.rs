//! Salted password records.
//!
//! A record has the form `pbkdf2-sha256$<iterations>$<salt>$<hash>` with
//! salt and hash in unpadded base64url. The iteration count travels with
//! the record so it can be raised without invalidating stored passwords.

use ring::pbkdf2;
use std::num::NonZeroU32;

use crate::config::PASSWORD_HASH_ITERATIONS;
use crate::utils::{base64url_decode, base64url_encode, gen_random_bytes};

use super::errors::UserError;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Hash a password with a fresh salt and the configured iteration count
pub(crate) fn hash_password(password: &str) -> Result<String, UserError> {
    hash_password_with_iterations(password, *PASSWORD_HASH_ITERATIONS)
}

pub(crate) fn hash_password_with_iterations(
    password: &str,
    iterations: u32,
) -> Result<String, UserError> {
    let iterations = NonZeroU32::new(iterations)
        .ok_or_else(|| UserError::Hashing("iteration count must be positive".to_string()))?;
    let salt = gen_random_bytes(SALT_LEN)?;

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    Ok(format!(
        "{SCHEME}${iterations}${}${}",
        base64url_encode(&salt),
        base64url_encode(&hash)
    ))
}

/// Check `password` against a stored record. Malformed records never match.
pub(crate) fn verify_password(password: &str, record: &str) -> bool {
    let Some((iterations, salt, hash)) = parse_record(record) else {
        tracing::warn!("Stored password record is not in a recognised format");
        return false;
    };
    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &hash,
    )
    .is_ok()
}

fn parse_record(record: &str) -> Option<(NonZeroU32, Vec<u8>, Vec<u8>)> {
    let mut parts = record.split('$');
    if parts.next()? != SCHEME {
        return None;
    }
    let iterations = parts.next()?.parse::<u32>().ok().and_then(NonZeroU32::new)?;
    let salt = base64url_decode(parts.next()?).ok()?;
    let hash = base64url_decode(parts.next()?).ok()?;
    if parts.next().is_some() || salt.is_empty() || hash.len() != HASH_LEN {
        return None;
    }
    Some((iterations, salt, hash))
}
