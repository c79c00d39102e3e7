use crate::storage::{
    append_checkpoint, get_checkpoint, get_checkpoint_count, get_snapshot_id, History,
};
use pool_types::Checkpoint;
use soroban_sdk::{Address, Env};

/// Record `balance` as the value of `id` for the latest snapshot.
///
/// Must run before the first mutation of `id`'s balance after a snapshot;
/// later mutations in the same snapshot period are no-ops here.
pub fn record_balance(env: &Env, id: &Address, balance: i128) {
    record(env, &History::Balance(id.clone()), balance);
}

/// Same as `record_balance`, for the total supply
pub fn record_supply(env: &Env, supply: i128) {
    record(env, &History::Supply, supply);
}

fn record(env: &Env, history: &History, value: i128) {
    let snapshot_id = get_snapshot_id(env);
    let count = get_checkpoint_count(env, history);
    let last_id = match count {
        0 => None,
        n => Some(get_checkpoint(env, history, n - 1).snapshot_id),
    };
    if needs_checkpoint(last_id, snapshot_id) {
        append_checkpoint(env, history, &Checkpoint { snapshot_id, value });
    }
}

/// Only the first change after each snapshot is worth keeping
fn needs_checkpoint(last_id: Option<u32>, snapshot_id: u32) -> bool {
    snapshot_id != 0 && last_id.map_or(true, |last| last < snapshot_id)
}

/// Balance of `id` as of `snapshot_id`
pub fn balance_at(env: &Env, id: &Address, snapshot_id: u32, current: i128) -> i128 {
    value_at(env, &History::Balance(id.clone()), snapshot_id, current)
}

/// Total supply as of `snapshot_id`
pub fn supply_at(env: &Env, snapshot_id: u32, current: i128) -> i128 {
    value_at(env, &History::Supply, snapshot_id, current)
}

/// The first checkpoint at or after `snapshot_id` holds the value the
/// snapshot saw; without one the value has not changed since and `current`
/// is returned.
fn value_at(env: &Env, history: &History, snapshot_id: u32, current: i128) -> i128 {
    let count = get_checkpoint_count(env, history);
    let index = first_at_or_after(count, snapshot_id, |i| {
        get_checkpoint(env, history, i).snapshot_id
    });
    if index == count {
        current
    } else {
        get_checkpoint(env, history, index).value
    }
}

/// Lowest index whose snapshot id is `>= snapshot_id`, or `count` if none.
///
/// Checkpoint ids are strictly increasing by construction.
fn first_at_or_after(count: u32, snapshot_id: u32, id_at: impl Fn(u32) -> u32) -> u32 {
    let (mut low, mut high) = (0, count);
    while low < high {
        let mid = low + (high - low) / 2;
        if id_at(mid) < snapshot_id {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [u32; 5] = [1, 3, 4, 8, 9];

    fn search(snapshot_id: u32) -> u32 {
        first_at_or_after(IDS.len() as u32, snapshot_id, |i| IDS[i as usize])
    }

    #[test]
    fn test_no_snapshot_records_nothing() {
        assert!(!needs_checkpoint(None, 0));
        assert!(needs_checkpoint(None, 1));
    }

    #[test]
    fn test_one_checkpoint_per_snapshot() {
        assert!(!needs_checkpoint(Some(3), 3));
        assert!(needs_checkpoint(Some(3), 4));
    }

    #[test]
    fn test_search_finds_first_at_or_after() {
        assert_eq!(search(1), 0);
        // Unchanged through snapshot 2, so snapshot 3's pre-change value applies
        assert_eq!(search(2), 1);
        assert_eq!(search(4), 2);
        assert_eq!(search(5), 3);
        assert_eq!(search(9), 4);
        assert_eq!(search(10), 5);
    }

    #[test]
    fn test_search_empty_history() {
        assert_eq!(first_at_or_after(0, 7, |_| unreachable!()), 0);
    }

    #[test]
    fn test_value_at_lookup() {
        let env = Env::default();
        let contract_id = env.register(crate::AssetLedger, ());
        env.as_contract(&contract_id, || {
            let history = History::Supply;
            append_checkpoint(&env, &history, &Checkpoint { snapshot_id: 1, value: 10 });
            append_checkpoint(&env, &history, &Checkpoint { snapshot_id: 3, value: 30 });

            assert_eq!(value_at(&env, &history, 1, 99), 10);
            assert_eq!(value_at(&env, &history, 2, 99), 30);
            assert_eq!(value_at(&env, &history, 3, 99), 30);
            assert_eq!(value_at(&env, &history, 4, 99), 99);
            assert_eq!(get_checkpoint_count(&env, &history), 2);
        });
    }
}
