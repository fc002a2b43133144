/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed resource id, e.g. `ord_3f2a...`.
///
/// Prefix tells the entity apart when ids show up in logs or URLs.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Alphabet for pickup codes: uppercase, without 0/O/1/I
const PICKUP_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of generated pickup codes
pub const PICKUP_CODE_LEN: usize = 6;

/// Generate a pickup code shown to the shopper at the counter
pub fn pickup_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..PICKUP_CODE_LEN)
        .map(|_| PICKUP_ALPHABET[rng.gen_range(0..PICKUP_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_id_shape() {
        let id = prefixed_id("ord");
        assert!(id.starts_with("ord_"));
        assert_eq!(id.len(), "ord_".len() + 32);
        assert_ne!(prefixed_id("ord"), id);
    }

    #[test]
    fn test_pickup_code_alphabet() {
        for _ in 0..50 {
            let code = pickup_code();
            assert_eq!(code.len(), PICKUP_CODE_LEN);
            assert!(code.bytes().all(|b| PICKUP_ALPHABET.contains(&b)));
        }
    }
}
