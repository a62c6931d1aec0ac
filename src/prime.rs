/// Trial division by every m in 2..=floor(sqrt(v)).
/// 2 and 3 pass because that range is empty for them.
#[inline]
pub fn is_prime(v: u64) -> bool {
    if v < 2 {
        return false;
    }
    (2..=v.isqrt()).all(|m| v % m != 0)
}
