//! Storage migrations for pallet-governed-token.
//!
//! Each migration checks the on-chain storage version first, so running it twice is a
//! no-op. Wire them into the runtime's `Executive`:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_governed_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{
    circuit_breaker::DEFAULT_RESET_INTERVAL, CircuitBreaker, Config, CurrentMintLimits, Decimals,
    MintLimits, Pallet, TradingEnabled, LOG_TARGET,
};

/// Version 1 introduced the mint rate limits, the circuit breaker reset interval and the
/// trading switch.
///
/// Deployments created before that have all three unset, which would reject every mint,
/// leave the breaker interval outside its bounds and close trading. The migration seeds
/// the defaults, opens trading, and leaves values that were already configured alone.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut reads = 3;
            let mut writes = 1;

            if CurrentMintLimits::<T>::get().is_unset() {
                reads += 1;
                writes += 1;
                let limits = MintLimits::default_for_decimals(Decimals::<T>::get());
                CurrentMintLimits::<T>::put(limits);
                log::info!(target: LOG_TARGET, "Seeded default mint limits: {limits:?}");
            }

            CircuitBreaker::<T>::mutate(|breaker| {
                if breaker.reset_interval == 0 {
                    writes += 1;
                    breaker.reset_interval = DEFAULT_RESET_INTERVAL;
                    log::info!(
                        target: LOG_TARGET,
                        "Seeded circuit breaker reset interval: {DEFAULT_RESET_INTERVAL}s"
                    );
                }
            });

            // Unversioned deployments had no switch and traded freely.
            TradingEnabled::<T>::put(true);
            writes += 1;

            StorageVersion::new(1).put::<Pallet<T>>();
            log::info!(target: LOG_TARGET, "Migrated pallet-governed-token storage to v1");

            T::DbWeight::get().reads_writes(reads, writes)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
                ensure!(
                    TradingEnabled::<T>::get(),
                    sp_runtime::TryRuntimeError::Other("Trading closed after v1 migration")
                );
            }
            ensure!(
                CurrentMintLimits::<T>::get().validate().is_ok(),
                sp_runtime::TryRuntimeError::Other("Mint limits invalid after v1 migration")
            );
            ensure!(
                CircuitBreaker::<T>::get().reset_interval != 0,
                sp_runtime::TryRuntimeError::Other("Breaker interval unset after v1 migration")
            );
            Ok(())
        }
    }
}
