//! Weights for pallet-governed-token.
//!
//! NOT MEASURED. Every value below is a hand estimate derived from the storage accesses
//! of the call. Regenerate this file from `benchmarking.rs` on reference hardware
//! before deploying:
//!
//! ```text
//! frame-omni-bencher v1 benchmark pallet --pallet pallet_governed_token --extrinsic '*' \
//!     --runtime <runtime.wasm> --template <weight-template.hbs> --output weights.rs
//! ```

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn mint() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn set_mint_limits() -> Weight;
    fn update_blocklist() -> Weight;
    fn update_whitelist() -> Weight;
    fn toggle_transfer_restrictions() -> Weight;
    fn trigger_circuit_breaker() -> Weight;
    fn reset_circuit_breaker() -> Weight;
    fn configure_circuit_breaker() -> Weight;
    fn activate_emergency_mode() -> Weight;
    fn deactivate_emergency_mode() -> Weight;
    fn emergency_upgrade() -> Weight;
    fn upgrade_to() -> Weight;
    fn create_snapshot() -> Weight;
    fn recover_native() -> Weight;
    fn migrate_roles() -> Weight;
    fn update_treasury() -> Weight;
    fn enable_trading() -> Weight;
}

/// Hand-estimated weights for pallet-governed-token, pending a benchmark run.
pub struct SubstrateWeight<T>(PhantomData<T>);

// Every gated transfer reads Paused, CircuitBreaker, Emergency, the restriction flag,
// both blocklist entries, both whitelist entries, Treasury and TradingEnabled.
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(13))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn mint() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_mint_limits() -> Weight {
        Weight::from_parts(10_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn update_blocklist() -> Weight {
        Weight::from_parts(10_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn update_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn toggle_transfer_restrictions() -> Weight {
        Weight::from_parts(9_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn trigger_circuit_breaker() -> Weight {
        Weight::from_parts(13_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn reset_circuit_breaker() -> Weight {
        Weight::from_parts(12_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn configure_circuit_breaker() -> Weight {
        Weight::from_parts(10_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn activate_emergency_mode() -> Weight {
        Weight::from_parts(14_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn deactivate_emergency_mode() -> Weight {
        Weight::from_parts(14_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn emergency_upgrade() -> Weight {
        Weight::from_parts(15_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn upgrade_to() -> Weight {
        Weight::from_parts(15_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn create_snapshot() -> Weight {
        Weight::from_parts(13_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn recover_native() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn migrate_roles() -> Weight {
        Weight::from_parts(40_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    fn update_treasury() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn enable_trading() -> Weight {
        Weight::from_parts(9_000_000, 3_509)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(12))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(13))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn mint() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(8))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn set_mint_limits() -> Weight {
        Weight::from_parts(10_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_blocklist() -> Weight {
        Weight::from_parts(10_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn toggle_transfer_restrictions() -> Weight {
        Weight::from_parts(9_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn trigger_circuit_breaker() -> Weight {
        Weight::from_parts(13_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn reset_circuit_breaker() -> Weight {
        Weight::from_parts(12_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn configure_circuit_breaker() -> Weight {
        Weight::from_parts(10_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn activate_emergency_mode() -> Weight {
        Weight::from_parts(14_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn deactivate_emergency_mode() -> Weight {
        Weight::from_parts(14_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn emergency_upgrade() -> Weight {
        Weight::from_parts(15_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn upgrade_to() -> Weight {
        Weight::from_parts(15_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn create_snapshot() -> Weight {
        Weight::from_parts(13_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn recover_native() -> Weight {
        Weight::from_parts(45_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn migrate_roles() -> Weight {
        Weight::from_parts(40_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(3, 9))
    }
    fn update_treasury() -> Weight {
        Weight::from_parts(11_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn enable_trading() -> Weight {
        Weight::from_parts(9_000_000, 3_509).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
