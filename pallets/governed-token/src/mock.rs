use crate as pallet_governed_token;
use crate::{ImplementationCode, Role};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const UNIT: u128 = 1_000_000_000_000_000_000;
pub const MAX_SUPPLY: u128 = 1_000_000_000 * UNIT;
pub const LARGE_MINT: u128 = 1_000_000 * UNIT;

pub const ADMIN: u64 = 1;
pub const MINTER: u64 = 2;
pub const BOT: u64 = 3;
pub const GUARDIAN: u64 = 4;
pub const GOVERNANCE: u64 = 5;
pub const TREASURY: u64 = 10;
pub const ALICE: u64 = 20;
pub const BOB: u64 = 21;
pub const CHARLIE: u64 = 22;
pub const ZERO: u64 = 0;

/// Accounts in `100..200` are treated as holding code.
pub const INITIAL_IMPL: u64 = 100;
pub const NEW_IMPL: u64 = 101;

pub const TREASURY_BALANCE: u128 = 100_000_000 * UNIT;
pub const ALICE_BALANCE: u128 = 1_000 * UNIT;
pub const BOB_BALANCE: u128 = 1_000 * UNIT;

/// Native balance parked in the pallet account at genesis.
pub const PALLET_NATIVE: u64 = 1_000;

/// 2024-01-01T00:00:00Z, in seconds.
pub const START_TIME: u64 = 1_704_067_200;
pub const DAY: u64 = 86_400;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        GovernedToken: pallet_governed_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

parameter_types! {
    pub const GovernedTokenPalletId: PalletId = PalletId(*b"gov/tokn");
}

pub struct ContractAccounts;
impl ImplementationCode<u64> for ContractAccounts {
    fn has_code(who: &u64) -> bool {
        (100..200).contains(who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn benchmark_implementation() -> u64 {
        NEW_IMPL
    }
}

impl pallet_governed_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type Currency = Balances;
    type ImplementationCode = ContractAccounts;
    type MaxSupply = ConstU128<MAX_SUPPLY>;
    type LargeMintThreshold = ConstU128<LARGE_MINT>;
    type PalletId = GovernedTokenPalletId;
    type WeightInfo = ();
}

pub fn genesis_roles() -> Vec<(Role, u64)> {
    let mut roles: Vec<(Role, u64)> = [
        Role::DefaultAdmin,
        Role::UpgraderAdmin,
        Role::Upgrader,
        Role::AdminPauser,
        Role::Recovery,
        Role::BlocklistManager,
        Role::WhitelistManager,
        Role::CircuitBreaker,
        Role::ParamManager,
        Role::Snapshot,
    ]
    .into_iter()
    .map(|role| (role, ADMIN))
    .collect();
    roles.extend([
        (Role::Minter, MINTER),
        (Role::BotPauser, BOT),
        (Role::EmergencyGuardian, GUARDIAN),
        (Role::GovernanceUnpauser, GOVERNANCE),
    ]);
    roles
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(GovernedToken::account_id(), PALLET_NATIVE)],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_governed_token::GenesisConfig::<Test> {
        token_name: b"Governed Token".to_vec(),
        token_symbol: b"GOV".to_vec(),
        decimals: 18,
        treasury: Some(TREASURY),
        initial_balances: vec![
            (TREASURY, TREASURY_BALANCE),
            (ALICE, ALICE_BALANCE),
            (BOB, BOB_BALANCE),
        ],
        roles: genesis_roles(),
        mint_limits: None,
        circuit_breaker_reset_interval: 0,
        transfer_restrictions_enabled: false,
        trading_enabled: true,
        implementation: Some(INITIAL_IMPL),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(START_TIME * 1_000);
    });
    ext
}

/// Moves to block `n`, advancing the clock six seconds per block.
pub fn run_to_block(n: u64) {
    let current = System::block_number();
    if n <= current {
        return;
    }
    System::set_block_number(n);
    Timestamp::set_timestamp(Timestamp::get() + (n - current) * 6_000);
}

pub fn advance_time(seconds: u64) {
    Timestamp::set_timestamp(Timestamp::get() + seconds * 1_000);
}

pub fn now() -> u64 {
    Timestamp::get() / 1_000
}
