use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// Random eight-character base-36 prefix, then the current millisecond timestamp in base 36.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let prefix: String = (0..8)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}-{}", prefix, to_base36(millis))
}
