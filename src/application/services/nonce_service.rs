//! CSRF tokens ("nonces") for admin forms.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Number of hex characters kept from the MAC.
const NONCE_LENGTH: usize = 10;

/// Issues and verifies per-action, per-caller form tokens.
///
/// Time is cut into ticks of half the lifetime. A nonce is the truncated
/// HMAC-SHA256 of `tick|action|caller_id`, and it verifies during the tick it
/// was issued in and the one after, so it stays valid for between half the
/// lifetime and the full lifetime.
pub struct NonceService {
    secret: String,
    lifetime_seconds: i64,
}

impl NonceService {
    /// Creates a nonce service.
    ///
    /// `lifetime_seconds` below 2 is raised to 2 so a tick lasts at least one second.
    pub fn new(secret: String, lifetime_seconds: u64) -> Self {
        let lifetime_seconds = i64::try_from(lifetime_seconds).unwrap_or(i64::MAX).max(2);
        Self {
            secret,
            lifetime_seconds,
        }
    }

    /// Issues a nonce for `action` bound to `caller_id`.
    pub fn create(&self, action: &str, caller_id: i64) -> String {
        self.create_at(action, caller_id, Utc::now())
    }

    /// Verifies a submitted nonce for `action` and `caller_id`.
    pub fn verify(&self, nonce: &str, action: &str, caller_id: i64) -> bool {
        self.verify_at(nonce, action, caller_id, Utc::now())
    }

    pub fn create_at(&self, action: &str, caller_id: i64, now: DateTime<Utc>) -> String {
        self.compute(self.tick(now), action, caller_id)
    }

    pub fn verify_at(&self, nonce: &str, action: &str, caller_id: i64, now: DateTime<Utc>) -> bool {
        if nonce.len() != NONCE_LENGTH {
            return false;
        }

        let tick = self.tick(now);
        [tick, tick - 1]
            .into_iter()
            .any(|t| constant_time_eq(nonce.as_bytes(), self.compute(t, action, caller_id).as_bytes()))
    }

    fn tick(&self, now: DateTime<Utc>) -> i64 {
        let half = self.lifetime_seconds / 2;
        // ceil(now / half)
        (now.timestamp() + half - 1).div_euclid(half)
    }

    fn compute(&self, tick: i64, action: &str, caller_id: i64) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(format!("nonce|{tick}|{action}|{caller_id}").as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());
        digest[..NONCE_LENGTH].to_string()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
