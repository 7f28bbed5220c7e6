#![cfg_attr(not(feature = "std"), no_std)]
// `Config::RuntimeEvent` and `#[pallet::getter]` are deprecated upstream.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Capped token with role-gated governance.
//!
//! Every balance-moving call passes the same gate before anything is written:
//!
//! 1. pause flag
//! 2. circuit breaker
//! 3. emergency mode
//! 4. mint argument checks (non-zero recipient and amount)
//! 5. supply cap
//! 6. mint rate limits
//! 7. transfer policy (blocklist, whitelist)
//! 8. trading switch (transfers only; the treasury may always send and receive)
//!
//! The first failing guard decides the error. Administrative calls are gated by the
//! [`Role`] the caller holds; the admin of every role is fixed by [`Role::admin`].

extern crate alloc;

use alloc::vec::Vec;
use codec::Encode;
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::{Fortitude, Preservation},
        UnixTime,
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, SaturatedConversion};

pub use pallet::*;

pub mod circuit_breaker;
pub mod emergency;
pub mod migrations;
pub mod rate_limit;
pub mod restrictions;
pub mod roles;
pub mod snapshot;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub use circuit_breaker::{BreakerError, CircuitBreakerState, Reason};
pub use emergency::{EmergencyError, EmergencyState, EMERGENCY_MODE_DURATION};
pub use rate_limit::{LimitsError, MintLimits, MintStats, MintWindowState, RateLimitError};
pub use restrictions::{RestrictionLists, TransferRejection};
pub use roles::Role;
pub use snapshot::Snapshot;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "pallet-governed-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// Tells the pallet whether an account holds deployable code and can therefore be an
/// upgrade target.
pub trait ImplementationCode<AccountId> {
    fn has_code(who: &AccountId) -> bool;

    /// An account for which `has_code` holds, used as the upgrade target in benchmarks.
    #[cfg(feature = "runtime-benchmarks")]
    fn benchmark_implementation() -> AccountId;
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Wall clock used for the day window, circuit breaker and emergency expiry.
        type UnixTime: UnixTime;

        /// Native currency that can be recovered from the pallet account.
        type Currency: Mutate<Self::AccountId>;

        type ImplementationCode: ImplementationCode<Self::AccountId>;

        /// Hard cap on total supply. Never changes after genesis.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Mints of at least this amount are large mints and subject to the cooldown.
        #[pallet::constant]
        type LargeMintThreshold: Get<u128>;

        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Human-readable token name.
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Ticker symbol.
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Decimal places used when displaying amounts.
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Sum of all balances. Never exceeds `MaxSupply`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Token balance of each account.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// owner -> spender -> remaining allowance
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Exempt from the whitelist. Transfers out of the treasury are always allowed.
    #[pallet::storage]
    #[pallet::getter(fn treasury)]
    pub type Treasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// role -> member. Presence of the key means the account holds the role.
    #[pallet::storage]
    pub type RoleMembers<T: Config> =
        StorageDoubleMap<_, Twox64Concat, Role, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Global pause flag. Forced on for as long as emergency mode is active.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Per-transaction, per-block and per-day mint ceilings plus the large-mint cooldown.
    #[pallet::storage]
    #[pallet::getter(fn mint_limits)]
    pub type CurrentMintLimits<T> = StorageValue<_, MintLimits, ValueQuery>;

    /// Running mint totals for the current block and day.
    #[pallet::storage]
    #[pallet::getter(fn mint_window)]
    pub type MintWindow<T> = StorageValue<_, MintWindowState, ValueQuery>;

    /// When set, both transfer endpoints must be whitelisted or the treasury.
    #[pallet::storage]
    #[pallet::getter(fn transfer_restrictions_enabled)]
    pub type TransferRestrictionsEnabled<T> = StorageValue<_, bool, ValueQuery>;

    /// Accounts that can neither send nor receive.
    #[pallet::storage]
    pub type Blocklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Accounts allowed to transact while restrictions are enabled.
    #[pallet::storage]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Circuit breaker flag, trigger time and reset policy.
    #[pallet::storage]
    #[pallet::getter(fn circuit_breaker)]
    pub type CircuitBreaker<T> = StorageValue<_, CircuitBreakerState, ValueQuery>;

    /// Emergency mode flag and activation time.
    #[pallet::storage]
    #[pallet::getter(fn emergency)]
    pub type Emergency<T> = StorageValue<_, EmergencyState, ValueQuery>;

    /// Immutable supply snapshots keyed by id.
    #[pallet::storage]
    pub type Snapshots<T> = StorageMap<_, Twox64Concat, u64, Snapshot, OptionQuery>;

    /// Zero until the first snapshot is taken.
    #[pallet::storage]
    #[pallet::getter(fn latest_snapshot_id)]
    pub type LatestSnapshotId<T> = StorageValue<_, u64, ValueQuery>;

    /// Account holding the current implementation code.
    #[pallet::storage]
    #[pallet::getter(fn implementation)]
    pub type Implementation<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Set once `migrate_roles` has run.
    #[pallet::storage]
    #[pallet::getter(fn migrated)]
    pub type Migrated<T> = StorageValue<_, bool, ValueQuery>;

    /// One-way switch. Until it is set only transfers touching the treasury go through.
    #[pallet::storage]
    #[pallet::getter(fn trading_enabled)]
    pub type TradingEnabled<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between two accounts.
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// An allowance was set.
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// New tokens were issued.
        Minted { to: T::AccountId, amount: u128 },
        /// Emitted right before `Minted` for mints at or above the large-mint threshold.
        LargeMintDetected { to: T::AccountId, amount: u128, block: u64 },
        /// An account gained a role.
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        /// An account lost a role, by revocation or renouncement.
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
        /// The pause flag was set.
        Paused { account: T::AccountId },
        /// The pause flag was cleared.
        Unpaused { account: T::AccountId },
        /// Mint limits were replaced.
        MintLimitsUpdated {
            max_per_transaction: u128,
            max_per_block: u128,
            max_per_day: u128,
            cooldown_blocks: u64,
        },
        /// An account was added to or removed from the blocklist.
        BlocklistUpdated { account: T::AccountId, blocked: bool },
        /// An account was added to or removed from the whitelist.
        WhitelistUpdated { account: T::AccountId, whitelisted: bool },
        /// Transfer restrictions were switched on or off.
        TransferRestrictionsToggled { enabled: bool },
        /// The circuit breaker tripped.
        CircuitBreakerTriggered { by: T::AccountId, reason: Reason },
        /// The circuit breaker was reset manually.
        CircuitBreakerReset { by: T::AccountId },
        /// Breaker reset interval or auto-reset changed.
        CircuitBreakerConfigured { reset_interval: u64, auto_reset: bool },
        /// Emergency mode started. Guardian powers last seven days.
        EmergencyModeActivated { guardian: T::AccountId, reason: Reason },
        /// Emergency mode ended.
        EmergencyModeDeactivated { by: T::AccountId },
        /// A guardian installed a new implementation during emergency mode.
        EmergencyUpgradeExecuted { implementation: T::AccountId },
        /// The implementation pointer changed.
        Upgraded { implementation: T::AccountId },
        /// A supply snapshot was recorded.
        SnapshotCreated { id: u64, timestamp: u64, total_supply: u128 },
        /// Native currency left the pallet account.
        NativeRecovered { to: T::AccountId, amount: u128 },
        /// Root roles were handed over to the timelocks.
        RolesMigrated { main_timelock: T::AccountId, upgrade_timelock: T::AccountId },
        /// The treasury account changed.
        TreasuryUpdated { old: Option<T::AccountId>, new: T::AccountId },
        /// Trading was opened to every account.
        TradingEnabled { by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        EnforcedPause,
        ExpectedPause,
        CircuitBreakerActive,
        CircuitBreakerAlreadyTriggered,
        CircuitBreakerNotTriggered,
        InvalidResetInterval,
        /// One of the endpoints is blocklisted.
        BlockedAddress,
        /// Restrictions are enabled and an endpoint is neither whitelisted nor the treasury.
        TransferNotAllowed,
        ExceededCap,
        MintExceedsTransactionLimit,
        MintExceedsBlockLimit,
        MintExceedsDayLimit,
        /// A large mint happened less than `cooldown_blocks` ago.
        MintCooldownActive,
        InvalidTransactionLimit,
        BlockLimitBelowTransactionLimit,
        DayLimitBelowBlockLimit,
        SnapshotNotFound,
        EmergencyModeNotActive,
        EmergencyModeExpired,
        AlreadyInEmergencyMode,
        NotInEmergencyMode,
        /// Regular upgrades are disabled while emergency mode is active.
        UseEmergencyUpgrade,
        /// The pause cannot be lifted while emergency mode is active.
        EmergencyModeActive,
        /// Trading is closed and neither endpoint is the treasury.
        TradingNotEnabled,
        TradingAlreadyEnabled,
        InvalidImplementation,
        NotAContract,
        InvalidAddress,
        InvalidAmount,
        AlreadyMigrated,
        InsufficientBalance,
        InsufficientAllowance,
        ReasonTooLong,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_transfers_open()?;
            Self::ensure_transfer_allowed(&sender, &to)?;
            Self::ensure_trading_open(&sender, &to)?;
            Self::move_balance(&sender, &to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_transfers_open()?;
            Self::ensure_transfer_allowed(&from, &to)?;
            Self::ensure_trading_open(&from, &to)?;
            Self::spend_allowance(&from, &spender, amount)?;
            Self::move_balance(&from, &to, amount)
        }

        /// Not gated by pause, breaker or emergency mode.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_zero_account(&spender), Error::<T>::InvalidAddress);

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Minter, &who)?;
            Self::do_mint(&to, amount)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(role.admin(), &who)?;
            Self::do_grant_role(role, &account, &who);
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(role.admin(), &who)?;
            Self::do_revoke_role(role, &account, &who);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_revoke_role(role, &who, &who);
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_any_role(Role::ALL.iter().filter(|r| r.can_pause()), &who)?;
            ensure!(!Paused::<T>::get(), Error::<T>::EnforcedPause);

            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused { account: who });
            Ok(())
        }

        /// Bot pausers cannot unpause. During emergency mode the pause is lifted by
        /// `deactivate_emergency_mode` only.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_any_role(Role::ALL.iter().filter(|r| r.can_unpause()), &who)?;
            ensure!(!Emergency::<T>::get().active, Error::<T>::EmergencyModeActive);
            ensure!(Paused::<T>::get(), Error::<T>::ExpectedPause);

            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused { account: who });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_mint_limits())]
        pub fn set_mint_limits(
            origin: OriginFor<T>,
            max_per_transaction: u128,
            max_per_block: u128,
            max_per_day: u128,
            cooldown_blocks: u64,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;

            let limits =
                MintLimits { max_per_transaction, max_per_block, max_per_day, cooldown_blocks };
            limits.validate().map_err(Error::<T>::from)?;

            CurrentMintLimits::<T>::put(limits);
            Self::deposit_event(Event::MintLimitsUpdated {
                max_per_transaction,
                max_per_block,
                max_per_day,
                cooldown_blocks,
            });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::update_blocklist())]
        pub fn update_blocklist(
            origin: OriginFor<T>,
            account: T::AccountId,
            blocked: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::BlocklistManager, &who)?;

            if blocked {
                Blocklist::<T>::insert(&account, ());
            } else {
                Blocklist::<T>::remove(&account);
            }
            Self::deposit_event(Event::BlocklistUpdated { account, blocked });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::update_whitelist())]
        pub fn update_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            whitelisted: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::WhitelistManager, &who)?;

            if whitelisted {
                Whitelist::<T>::insert(&account, ());
            } else {
                Whitelist::<T>::remove(&account);
            }
            Self::deposit_event(Event::WhitelistUpdated { account, whitelisted });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::toggle_transfer_restrictions())]
        pub fn toggle_transfer_restrictions(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;

            let enabled = !TransferRestrictionsEnabled::<T>::get();
            TransferRestrictionsEnabled::<T>::put(enabled);
            Self::deposit_event(Event::TransferRestrictionsToggled { enabled });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::trigger_circuit_breaker())]
        pub fn trigger_circuit_breaker(origin: OriginFor<T>, reason: Vec<u8>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::CircuitBreaker, &who)?;
            let reason: Reason = reason.try_into().map_err(|_| Error::<T>::ReasonTooLong)?;

            CircuitBreaker::<T>::try_mutate(|state| {
                state.trigger(reason.clone(), Self::now()).map_err(Error::<T>::from)
            })?;

            log::warn!(target: LOG_TARGET, "circuit breaker triggered by {:?}", who);
            Self::deposit_event(Event::CircuitBreakerTriggered { by: who, reason });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::reset_circuit_breaker())]
        pub fn reset_circuit_breaker(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_any_role([Role::CircuitBreaker, Role::DefaultAdmin].iter(), &who)?;

            CircuitBreaker::<T>::try_mutate(|state| state.reset().map_err(Error::<T>::from))?;

            log::info!(target: LOG_TARGET, "circuit breaker reset by {:?}", who);
            Self::deposit_event(Event::CircuitBreakerReset { by: who });
            Ok(())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::configure_circuit_breaker())]
        pub fn configure_circuit_breaker(
            origin: OriginFor<T>,
            reset_interval: u64,
            auto_reset: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::ParamManager, &who)?;

            CircuitBreaker::<T>::try_mutate(|state| {
                state.configure(reset_interval, auto_reset).map_err(Error::<T>::from)
            })?;

            Self::deposit_event(Event::CircuitBreakerConfigured { reset_interval, auto_reset });
            Ok(())
        }

        /// Forces the pause flag on and opens the seven day emergency window.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::activate_emergency_mode())]
        pub fn activate_emergency_mode(origin: OriginFor<T>, reason: Vec<u8>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::EmergencyGuardian, &who)?;
            let reason: Reason = reason.try_into().map_err(|_| Error::<T>::ReasonTooLong)?;

            let now = Self::now();
            Emergency::<T>::try_mutate(|state| state.activate(now).map_err(Error::<T>::from))?;

            if !Paused::<T>::get() {
                Paused::<T>::put(true);
                Self::deposit_event(Event::Paused { account: who.clone() });
            }

            log::warn!(
                target: LOG_TARGET,
                "emergency mode activated by {:?} at {}, powers lapse at {}",
                who,
                now,
                now.saturating_add(EMERGENCY_MODE_DURATION),
            );
            Self::deposit_event(Event::EmergencyModeActivated { guardian: who, reason });
            Ok(())
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::deactivate_emergency_mode())]
        pub fn deactivate_emergency_mode(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_any_role([Role::EmergencyGuardian, Role::DefaultAdmin].iter(), &who)?;

            Emergency::<T>::try_mutate(|state| state.deactivate().map_err(Error::<T>::from))?;

            if Paused::<T>::get() {
                Paused::<T>::put(false);
                Self::deposit_event(Event::Unpaused { account: who.clone() });
            }

            log::info!(target: LOG_TARGET, "emergency mode deactivated by {:?}", who);
            Self::deposit_event(Event::EmergencyModeDeactivated { by: who });
            Ok(())
        }

        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::emergency_upgrade())]
        pub fn emergency_upgrade(
            origin: OriginFor<T>,
            new_implementation: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::EmergencyGuardian, &who)?;
            Emergency::<T>::get().ensure_powers(Self::now()).map_err(|err| match err {
                EmergencyError::NotActive => Error::<T>::EmergencyModeNotActive,
                other => other.into(),
            })?;
            Self::ensure_valid_implementation(&new_implementation)?;

            Self::set_implementation(&new_implementation);
            Self::deposit_event(Event::EmergencyUpgradeExecuted {
                implementation: new_implementation,
            });
            Ok(())
        }

        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::upgrade_to())]
        pub fn upgrade_to(origin: OriginFor<T>, new_implementation: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!Emergency::<T>::get().active, Error::<T>::UseEmergencyUpgrade);
            Self::ensure_role(Role::Upgrader, &who)?;
            Self::ensure_valid_implementation(&new_implementation)?;

            Self::set_implementation(&new_implementation);
            Ok(())
        }

        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::create_snapshot())]
        pub fn create_snapshot(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Snapshot, &who)?;

            let id = LatestSnapshotId::<T>::get().checked_add(1).ok_or(Error::<T>::Overflow)?;
            let snapshot = Snapshot {
                id,
                timestamp: Self::now(),
                total_supply: TotalSupply::<T>::get(),
                active: true,
            };

            Snapshots::<T>::insert(id, snapshot);
            LatestSnapshotId::<T>::put(id);
            Self::deposit_event(Event::SnapshotCreated {
                id,
                timestamp: snapshot.timestamp,
                total_supply: snapshot.total_supply,
            });
            Ok(())
        }

        /// Moves native currency that ended up in the pallet account to `to`.
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::recover_native())]
        pub fn recover_native(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Recovery, &who)?;
            ensure!(!Self::is_zero_account(&to), Error::<T>::InvalidAddress);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let value: BalanceOf<T> = amount.try_into().map_err(|_| Error::<T>::InvalidAmount)?;
            let source = Self::account_id();
            let available =
                T::Currency::reducible_balance(&source, Preservation::Expendable, Fortitude::Polite);
            ensure!(value <= available, Error::<T>::InvalidAmount);

            T::Currency::transfer(&source, &to, value, Preservation::Expendable)?;
            Self::deposit_event(Event::NativeRecovered { to, amount });
            Ok(())
        }

        /// One-shot hand-over of the root roles to timelock accounts.
        ///
        /// Grants `DefaultAdmin` and `Recovery` to `main_timelock`, `UpgraderAdmin` and
        /// `Upgrader` to `upgrade_timelock`, and strips those four roles from
        /// `revoke_from`.
        #[pallet::call_index(22)]
        #[pallet::weight(T::WeightInfo::migrate_roles())]
        pub fn migrate_roles(
            origin: OriginFor<T>,
            main_timelock: T::AccountId,
            upgrade_timelock: T::AccountId,
            revoke_from: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::ensure_role(Role::UpgraderAdmin, &who)?;
            ensure!(!Migrated::<T>::get(), Error::<T>::AlreadyMigrated);
            ensure!(
                ![&main_timelock, &upgrade_timelock, &revoke_from]
                    .into_iter()
                    .any(Self::is_zero_account),
                Error::<T>::InvalidAddress
            );

            Self::do_grant_role(Role::DefaultAdmin, &main_timelock, &who);
            Self::do_grant_role(Role::Recovery, &main_timelock, &who);
            Self::do_grant_role(Role::UpgraderAdmin, &upgrade_timelock, &who);
            Self::do_grant_role(Role::Upgrader, &upgrade_timelock, &who);

            for role in [Role::DefaultAdmin, Role::Recovery, Role::UpgraderAdmin, Role::Upgrader] {
                let granted_here = match role {
                    Role::DefaultAdmin | Role::Recovery => &main_timelock,
                    _ => &upgrade_timelock,
                };
                if granted_here != &revoke_from {
                    Self::do_revoke_role(role, &revoke_from, &who);
                }
            }

            Migrated::<T>::put(true);
            log::info!(
                target: LOG_TARGET,
                "root roles migrated to {:?} / {:?}, revoked from {:?}",
                main_timelock,
                upgrade_timelock,
                revoke_from,
            );
            Self::deposit_event(Event::RolesMigrated { main_timelock, upgrade_timelock });
            Ok(())
        }

        /// Moves the treasury exemption to `new_treasury`.
        #[pallet::call_index(23)]
        #[pallet::weight(T::WeightInfo::update_treasury())]
        pub fn update_treasury(origin: OriginFor<T>, new_treasury: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            ensure!(!Self::is_zero_account(&new_treasury), Error::<T>::InvalidAddress);
            ensure!(new_treasury != Self::account_id(), Error::<T>::InvalidAddress);

            let old = Treasury::<T>::get();
            ensure!(old.as_ref() != Some(&new_treasury), Error::<T>::InvalidAddress);

            Treasury::<T>::put(&new_treasury);
            log::info!(target: LOG_TARGET, "treasury moved from {:?} to {:?}", old, new_treasury);
            Self::deposit_event(Event::TreasuryUpdated { old, new: new_treasury });
            Ok(())
        }

        /// Opens transfers between arbitrary accounts. Cannot be undone.
        #[pallet::call_index(24)]
        #[pallet::weight(T::WeightInfo::enable_trading())]
        pub fn enable_trading(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            ensure!(!TradingEnabled::<T>::get(), Error::<T>::TradingAlreadyEnabled);

            TradingEnabled::<T>::put(true);
            Self::deposit_event(Event::TradingEnabled { by: who });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub token_name: Vec<u8>,
        pub token_symbol: Vec<u8>,
        pub decimals: u8,
        pub treasury: Option<T::AccountId>,
        /// Initial token mints (account, amount). Their sum must not exceed `MaxSupply`.
        pub initial_balances: Vec<(T::AccountId, u128)>,
        pub roles: Vec<(Role, T::AccountId)>,
        /// Defaults to [`MintLimits::default_for_decimals`].
        pub mint_limits: Option<MintLimits>,
        /// Seconds. Zero selects the default of one day.
        pub circuit_breaker_reset_interval: u64,
        pub transfer_restrictions_enabled: bool,
        /// Open trading from the first block instead of waiting for `enable_trading`.
        pub trading_enabled: bool,
        pub implementation: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref treasury) = self.treasury {
                Treasury::<T>::put(treasury);
            }
            if let Some(ref implementation) = self.implementation {
                Implementation::<T>::put(implementation);
            }

            for (role, account) in &self.roles {
                RoleMembers::<T>::insert(role, account, ());
            }

            let limits =
                self.mint_limits.unwrap_or_else(|| MintLimits::default_for_decimals(self.decimals));
            assert!(limits.validate().is_ok(), "Invalid genesis mint limits: {limits:?}");
            CurrentMintLimits::<T>::put(limits);

            let mut breaker = CircuitBreakerState::default();
            let interval = match self.circuit_breaker_reset_interval {
                0 => circuit_breaker::DEFAULT_RESET_INTERVAL,
                interval => interval,
            };
            breaker.configure(interval, false).expect("Invalid circuit breaker reset interval");
            CircuitBreaker::<T>::put(breaker);

            TransferRestrictionsEnabled::<T>::put(self.transfer_restrictions_enabled);
            TradingEnabled::<T>::put(self.trading_enabled);

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| *balance = balance.saturating_add(*amount));
                total = total.checked_add(*amount).expect("Initial balances overflow");
            }
            assert!(total <= T::MaxSupply::get(), "Initial balances exceed the supply cap");
            TotalSupply::<T>::put(total);
        }
    }
}

/// Storage-backed view of the restriction lists.
pub struct StoredRestrictions<T>(PhantomData<T>);

impl<T: Config> RestrictionLists<T::AccountId> for StoredRestrictions<T> {
    fn restrictions_enabled(&self) -> bool {
        TransferRestrictionsEnabled::<T>::get()
    }

    fn is_blocked(&self, who: &T::AccountId) -> bool {
        Blocklist::<T>::contains_key(who)
    }

    fn is_whitelisted(&self, who: &T::AccountId) -> bool {
        Whitelist::<T>::contains_key(who)
    }

    fn is_exempt(&self, who: &T::AccountId) -> bool {
        Treasury::<T>::get().as_ref() == Some(who)
    }
}

impl<T: Config> Pallet<T> {
    /// Account that holds recoverable native currency.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn cap() -> u128 {
        T::MaxSupply::get()
    }

    /// The cap is a runtime constant; no call can change it.
    pub fn is_cap_immutable() -> bool {
        true
    }

    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        RoleMembers::<T>::contains_key(role, who)
    }

    pub fn role_admin(role: Role) -> Role {
        role.admin()
    }

    pub fn is_blocked(who: &T::AccountId) -> bool {
        Blocklist::<T>::contains_key(who)
    }

    pub fn is_whitelisted(who: &T::AccountId) -> bool {
        Whitelist::<T>::contains_key(who)
    }

    pub fn is_transfer_allowed(from: &T::AccountId, to: &T::AccountId) -> bool {
        restrictions::check_transfer(&StoredRestrictions::<T>(PhantomData), from, to).is_ok()
    }

    pub fn circuit_breaker_active() -> bool {
        CircuitBreaker::<T>::get().is_active(Self::now())
    }

    pub fn can_use_emergency_powers() -> bool {
        Emergency::<T>::get().can_use_powers(Self::now())
    }

    pub fn snapshot(id: u64) -> Result<Snapshot, Error<T>> {
        Snapshots::<T>::get(id).ok_or(Error::<T>::SnapshotNotFound)
    }

    pub fn snapshot_exists(id: u64) -> bool {
        Snapshots::<T>::contains_key(id)
    }

    pub fn mint_stats() -> MintStats {
        MintWindow::<T>::get().stats(
            &CurrentMintLimits::<T>::get(),
            Self::current_block(),
            Self::now(),
        )
    }

    pub(crate) fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    pub(crate) fn current_block() -> u64 {
        frame_system::Pallet::<T>::block_number().saturated_into::<u64>()
    }

    /// The zero account is the one whose encoding is all zero bytes.
    pub fn is_zero_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        if !Self::has_role(role, who) {
            log::debug!(target: LOG_TARGET, "{:?} is missing role {:?}", who, role);
            return Err(Error::<T>::Unauthorized.into());
        }
        Ok(())
    }

    fn ensure_any_role<'a>(
        mut roles: impl Iterator<Item = &'a Role>,
        who: &T::AccountId,
    ) -> DispatchResult {
        if roles.any(|role| Self::has_role(*role, who)) {
            Ok(())
        } else {
            log::debug!(target: LOG_TARGET, "{:?} holds none of the required roles", who);
            Err(Error::<T>::Unauthorized.into())
        }
    }

    pub(crate) fn do_grant_role(role: Role, account: &T::AccountId, sender: &T::AccountId) {
        if Self::has_role(role, account) {
            return;
        }
        RoleMembers::<T>::insert(role, account, ());
        Self::deposit_event(Event::RoleGranted {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
    }

    pub(crate) fn do_revoke_role(role: Role, account: &T::AccountId, sender: &T::AccountId) {
        if !Self::has_role(role, account) {
            return;
        }
        RoleMembers::<T>::remove(role, account);
        Self::deposit_event(Event::RoleRevoked {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
    }

    /// Guards shared by every balance-moving call: pause, breaker, emergency mode.
    pub fn ensure_transfers_open() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::EnforcedPause);
        ensure!(!Self::circuit_breaker_active(), Error::<T>::CircuitBreakerActive);
        // Emergency mode implies a pause even if someone lifted the flag.
        ensure!(!Emergency::<T>::get().active, Error::<T>::EnforcedPause);
        Ok(())
    }

    fn ensure_transfer_allowed(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
        restrictions::check_transfer(&StoredRestrictions::<T>(PhantomData), from, to).map_err(
            |rejection| {
                log::debug!(
                    target: LOG_TARGET,
                    "transfer {:?} -> {:?} rejected: {:?}",
                    from,
                    to,
                    rejection
                );
                Error::<T>::from(rejection).into()
            },
        )
    }

    /// Before trading opens only transfers with the treasury on one side pass.
    fn ensure_trading_open(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
        if TradingEnabled::<T>::get() {
            return Ok(());
        }
        let treasury = Treasury::<T>::get();
        ensure!(
            treasury.as_ref() == Some(from) || treasury.as_ref() == Some(to),
            Error::<T>::TradingNotEnabled
        );
        Ok(())
    }

    /// Runs the mint half of the gate and commits. The caller's role is checked by the
    /// dispatchable.
    pub fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_transfers_open()?;
        ensure!(!Self::is_zero_account(to), Error::<T>::InvalidAddress);
        ensure!(amount > 0, Error::<T>::InvalidAmount);

        let new_supply = TotalSupply::<T>::get()
            .checked_add(amount)
            .filter(|supply| *supply <= T::MaxSupply::get())
            .ok_or(Error::<T>::ExceededCap)?;

        let block = Self::current_block();
        let mut window = MintWindow::<T>::get();
        let record = window
            .check_and_record(
                amount,
                &CurrentMintLimits::<T>::get(),
                T::LargeMintThreshold::get(),
                block,
                Self::now(),
            )
            .map_err(Error::<T>::from)?;

        TotalSupply::<T>::put(new_supply);
        Balances::<T>::mutate(to, |balance| *balance = balance.saturating_add(amount));
        MintWindow::<T>::put(window);

        if record.large_mint {
            log::info!(target: LOG_TARGET, "large mint of {} to {:?} at #{}", amount, to, block);
            Self::deposit_event(Event::LargeMintDetected { to: to.clone(), amount, block });
        }
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    fn spend_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        let current = Allowances::<T>::get(owner, spender);
        if current == u128::MAX {
            return Ok(());
        }
        let remaining = current.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
        Allowances::<T>::insert(owner, spender, remaining);
        Ok(())
    }

    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_zero_account(to), Error::<T>::InvalidAddress);

        let from_balance = Balances::<T>::get(from);
        let remaining = from_balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        Balances::<T>::insert(from, remaining);
        Balances::<T>::try_mutate(to, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn ensure_valid_implementation(implementation: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_zero_account(implementation), Error::<T>::InvalidImplementation);
        ensure!(T::ImplementationCode::has_code(implementation), Error::<T>::NotAContract);
        Ok(())
    }

    fn set_implementation(implementation: &T::AccountId) {
        Implementation::<T>::put(implementation);
        log::info!(target: LOG_TARGET, "implementation upgraded to {:?}", implementation);
        Self::deposit_event(Event::Upgraded { implementation: implementation.clone() });
    }
}

impl<T> From<RateLimitError> for Error<T> {
    fn from(err: RateLimitError) -> Self {
        log::debug!(target: LOG_TARGET, "mint rejected: {:?}", err);
        match err {
            RateLimitError::ExceedsTransactionLimit { .. } => Error::<T>::MintExceedsTransactionLimit,
            RateLimitError::ExceedsBlockLimit { .. } => Error::<T>::MintExceedsBlockLimit,
            RateLimitError::ExceedsDayLimit { .. } => Error::<T>::MintExceedsDayLimit,
            RateLimitError::CooldownActive { .. } => Error::<T>::MintCooldownActive,
        }
    }
}

impl<T> From<LimitsError> for Error<T> {
    fn from(err: LimitsError) -> Self {
        match err {
            LimitsError::InvalidTransactionLimit => Error::<T>::InvalidTransactionLimit,
            LimitsError::BlockLimitBelowTransactionLimit => {
                Error::<T>::BlockLimitBelowTransactionLimit
            },
            LimitsError::DayLimitBelowBlockLimit => Error::<T>::DayLimitBelowBlockLimit,
        }
    }
}

impl<T> From<TransferRejection> for Error<T> {
    fn from(rejection: TransferRejection) -> Self {
        match rejection {
            TransferRejection::BlockedAddress => Error::<T>::BlockedAddress,
            TransferRejection::NotWhitelisted => Error::<T>::TransferNotAllowed,
        }
    }
}

impl<T> From<BreakerError> for Error<T> {
    fn from(err: BreakerError) -> Self {
        match err {
            BreakerError::AlreadyTriggered => Error::<T>::CircuitBreakerAlreadyTriggered,
            BreakerError::NotTriggered => Error::<T>::CircuitBreakerNotTriggered,
            BreakerError::InvalidInterval(interval) => {
                log::debug!(target: LOG_TARGET, "reset interval {} out of bounds", interval);
                Error::<T>::InvalidResetInterval
            },
        }
    }
}

impl<T> From<EmergencyError> for Error<T> {
    fn from(err: EmergencyError) -> Self {
        match err {
            EmergencyError::AlreadyActive => Error::<T>::AlreadyInEmergencyMode,
            EmergencyError::NotActive => Error::<T>::NotInEmergencyMode,
            EmergencyError::Expired(at) => {
                log::debug!(target: LOG_TARGET, "emergency window closed at {}", at);
                Error::<T>::EmergencyModeExpired
            },
        }
    }
}
