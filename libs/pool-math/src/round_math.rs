/// Timestamp at which a round started at `start_time` may be closed
pub fn round_ends_at(start_time: u64, round_duration: u64) -> u64 {
    start_time.saturating_add(round_duration)
}

/// True once the minimum round duration has fully elapsed
pub fn is_round_due(now: u64, start_time: u64, round_duration: u64) -> bool {
    now >= round_ends_at(start_time, round_duration)
}
