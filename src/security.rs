use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Identifier prefix for the hash scheme, stored alongside each hash so the
/// scheme can be rotated later without invalidating existing accounts.
const SCHEME: &str = "hmac-sha256";

/// Number of random salt bytes per password
const SALT_BYTES: usize = 16;

/// Hash a password with a fresh random salt
///
/// Output format: `hmac-sha256$<salt hex>$<digest hex>` where
/// `digest = HMAC-SHA256(key = salt, message = password)`.
///
/// The raw password is never persisted anywhere.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt);

    let digest = hmac_digest(&salt, password);
    format!("{}${}${}", SCHEME, hex::encode(salt), hex::encode(digest))
}

/// Compute `HMAC-SHA256(key = salt, message = password)`
fn hmac_digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(salt)
        .expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Verify a candidate password against a stored `scheme$salt$digest` hash
///
/// Comparison goes through `Mac::verify_slice`, which is constant time.
/// Any malformed stored hash fails verification rather than erroring.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (scheme, salt_hex, digest_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(salt), Some(digest)) => (scheme, salt, digest),
        _ => {
            tracing::warn!("Malformed password hash in user store");
            return false;
        }
    };

    if scheme != SCHEME {
        tracing::warn!("Unknown password hash scheme: {}", scheme);
        return false;
    }

    let salt = match hex::decode(salt_hex) {
        Ok(salt) => salt,
        Err(_) => return false,
    };
    let digest = match hex::decode(digest_hex) {
        Ok(digest) => digest,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(&salt) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(password.as_bytes());
    mac.verify_slice(&digest).is_ok()
}

/// Sign arbitrary data with HMAC-SHA256, returning the hex digest
///
/// Used for session cookie signatures.
pub fn sign(data: &str, key: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify an HMAC-SHA256 hex signature produced by [`sign`]
pub fn verify_signature(data: &str, signature: &str, key: &str) -> bool {
    let mut mac = match HmacSha256::new_from_slice(key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(data.as_bytes());

    let sig_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    mac.verify_slice(&sig_bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("secret");
        let parts: Vec<&str> = hash.split('$').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], SCHEME);
        assert_eq!(parts[1].len(), SALT_BYTES * 2);
        assert!(parts[1].chars().all(|c| c.is_ascii_hexdigit()));
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_password_never_plaintext() {
        let hash = hash_password("secret");
        assert!(!hash.contains("secret"));
    }

    #[test]
    fn test_hash_password_salted() {
        // Same password, different salts, different hashes
        assert_ne!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn test_verify_password_roundtrip() {
        let hash = hash_password("correct horse");
        assert!(verify_password(&hash, "correct horse"));
        assert!(!verify_password(&hash, "wrong"));
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(!verify_password("", "secret"));
        assert!(!verify_password("not-a-hash", "secret"));
        assert!(!verify_password("hmac-sha256$zz$zz", "secret"));
        assert!(!verify_password("md5$abcd$1234", "secret"));
    }

    #[test]
    fn test_sign_and_verify() {
        let sig = sign("payload", "key");
        assert!(verify_signature("payload", &sig, "key"));
        assert!(!verify_signature("payload", &sig, "other-key"));
        assert!(!verify_signature("tampered", &sig, "key"));
    }

    #[test]
    fn test_verify_signature_invalid_hex() {
        assert!(!verify_signature("payload", "not hex!", "key"));
    }
}
