//! Runtime composing the governed token with multisig-controlled governance accounts.
//!
//! Roles are held by `pallet_multisig` accounts rather than individual keys, so every
//! privileged call goes through an N-of-M approval flow before it reaches the token.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
mod tests;

use frame_support::{
    construct_runtime, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use sp_runtime::{
    generic,
    traits::{AccountIdConversion, BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

pub use frame_support::weights::Weight;

/// Alias to 512-bit hash when used in the context of a transaction signature on the chain.
pub type Signature = MultiSignature;

/// Some way of identifying an account on the chain.
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

/// Balance of the native currency, used for multisig deposits.
pub type Balance = u128;

pub type BlockNumber = u32;

pub type Nonce = u32;

pub type Hash = sp_core::H256;

pub type Address = MultiAddress<AccountId, ()>;

pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

/// The extensions checked on every extrinsic.
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;

pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Storage migrations applied on the next runtime upgrade.
pub type Migrations = (pallet_governed_token::migrations::v1::MigrateToV1<Runtime>,);

pub type Executive = frame_executive::Executive<
    Runtime,
    Block,
    frame_system::ChainContext<Runtime>,
    Runtime,
    AllPalletsWithSystem,
    Migrations,
>;

/// One native token, twelve decimals.
pub const UNIT: Balance = 1_000_000_000_000;

/// One governed token, eighteen decimals.
pub const TOKEN: u128 = 1_000_000_000_000_000_000;

pub const MILLISECS_PER_BLOCK: u64 = 6_000;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Multisig: pallet_multisig,
        GovernedToken: pallet_governed_token,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type Hash = Hash;
    type AccountData = pallet_balances::AccountData<Balance>;
}

impl pallet_timestamp::Config for Runtime {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<{ MILLISECS_PER_BLOCK / 2 }>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type Balance = Balance;
    type ExistentialDeposit = ConstU128<{ UNIT / 1_000 }>;
    type AccountStore = System;
}

parameter_types! {
    // One storage item; key size is 32; value is size 4+4+16+32 bytes = 56 bytes.
    pub const DepositBase: Balance = UNIT;
    // Additional storage item size of 32 bytes.
    pub const DepositFactor: Balance = UNIT / 10;
}

impl pallet_multisig::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type Currency = Balances;
    type DepositBase = DepositBase;
    type DepositFactor = DepositFactor;
    type MaxSignatories = ConstU32<16>;
    type WeightInfo = ();
    type BlockNumberProvider = System;
}

parameter_types! {
    pub const GovernedTokenPalletId: PalletId = PalletId(*b"gov/tokn");
    pub const ImplementationPalletId: PalletId = PalletId(*b"gov/impl");
}

/// Number of implementation slots the runtime recognises.
pub const IMPLEMENTATION_SLOTS: u32 = 16;

/// Upgrade targets are the deterministic sub-accounts of [`ImplementationPalletId`].
///
/// Nobody holds a key for these accounts, which is what makes them stand in for deployed
/// code: an ordinary user account can never be installed as the implementation.
pub struct ImplementationSlots;

impl ImplementationSlots {
    pub fn slot(index: u32) -> AccountId {
        ImplementationPalletId::get().into_sub_account_truncating(index)
    }
}

impl pallet_governed_token::ImplementationCode<AccountId> for ImplementationSlots {
    fn has_code(who: &AccountId) -> bool {
        (0..IMPLEMENTATION_SLOTS).any(|index| Self::slot(index) == *who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn benchmark_implementation() -> AccountId {
        Self::slot(1)
    }
}

impl pallet_governed_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type Currency = Balances;
    type ImplementationCode = ImplementationSlots;
    type MaxSupply = ConstU128<{ 1_000_000_000 * TOKEN }>;
    type LargeMintThreshold = ConstU128<{ 1_000_000 * TOKEN }>;
    type PalletId = GovernedTokenPalletId;
    type WeightInfo = pallet_governed_token::weights::SubstrateWeight<Runtime>;
}
