//! Prompt id generation
//!
//! Ids are base-36 renderings of a millisecond timestamp. The generator
//! never hands out a value at or below one it has already issued or seen,
//! so two creates inside the same clock tick still get distinct ids.
//! Once the counter reaches `u64::MAX` it switches to `<clock>-<n>` tokens,
//! which cannot decode to a base-36 value and never repeat.

use chrono::Utc;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
    overflow: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an existing id so later ids sort after it.
    /// Ids that are not base-36 tokens are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Some(value) = decode(id) {
            self.last = self.last.max(value);
        }
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> String {
        let now = u64::try_from(now_millis).unwrap_or(0);
        if now > self.last {
            self.last = now;
            return encode(now);
        }

        match self.last.checked_add(1) {
            Some(value) => {
                self.last = value;
                encode(value)
            }
            None => {
                self.overflow += 1;
                format!("{}-{}", encode(now), encode(self.overflow))
            }
        }
    }
}

pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

pub fn decode(token: &str) -> Option<u64> {
    if token.is_empty() {
        return None;
    }
    u64::from_str_radix(&token.to_ascii_lowercase(), 36).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_radix_36() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "10");
        // 2024-01-01T00:00:00Z in milliseconds
        assert_eq!(encode(1_704_067_200_000), "lqu5m2o0");
        assert_eq!(decode("lqu5m2o0"), Some(1_704_067_200_000));
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(decode(&b), Some(1_001));
        assert_eq!(decode(&c), Some(1_002));
    }

    #[test]
    fn test_exhausted_counter_keeps_ids_distinct() {
        let max = encode(u64::MAX);
        assert_eq!(max, "3w5e11264sgsf");

        let mut ids = IdGenerator::new();
        ids.observe(&max);
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        assert_ne!(a, max);
        assert_ne!(b, max);
        assert_ne!(a, b);
        assert_eq!(decode(&a), None);

        let mut ids = IdGenerator::new();
        ids.observe("3w5e11264sgse");
        assert_eq!(ids.next_at(1_000), max);
        assert_ne!(ids.next_at(1_000), max);
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe(&encode(5_000));
        ids.observe("not-an-id!");
        assert_eq!(ids.next_at(4_000), encode(5_001));
    }
}
