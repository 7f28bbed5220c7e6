//! Integration tests for multisig-held roles on pallet-governed-token.
//!
//! Every privileged role in the genesis below belongs to a `pallet_multisig` account, so
//! these tests drive the governance surface through N-of-M approval flows and check that
//! the token only reacts once the threshold is met.
//!
//! # Test Categories
//!
//! 1. **Basic Multi-Sig Flow**: account derivation, deposit reservation, role placement
//! 2. **Governance via Multi-Sig**: role grants, minting, pause, breaker, emergency powers
//! 3. **Edge Cases**: duplicate approvals, wrong timepoints, failing inner calls
//! 4. **Runtime Upgrade**: storage migrations wired into `Executive`

use crate::*;
use frame_support::{
    assert_noop, assert_ok,
    traits::{GetStorageVersion, StorageVersion},
};
use pallet_governed_token::{MintLimits, Role};
use sp_keyring::sr25519::Keyring as AccountKeyring;
use sp_runtime::{traits::Hash, BuildStorage};

/// Type alias for call hash used by pallet-multisig
type CallHash = [u8; 32];

const ADMIN_THRESHOLD: u16 = 2;
const GUARDIAN_THRESHOLD: u16 = 2;

/// 2024-01-01T00:00:00Z, in milliseconds.
const GENESIS_MOMENT: u64 = 1_704_067_200_000;

const TREASURY_SUPPLY: u128 = 1_000_000 * TOKEN;
const HOLDER_SUPPLY: u128 = 1_000 * TOKEN;

fn alice() -> AccountId {
    AccountKeyring::Alice.to_account_id()
}

fn bob() -> AccountId {
    AccountKeyring::Bob.to_account_id()
}

fn charlie() -> AccountId {
    AccountKeyring::Charlie.to_account_id()
}

fn dave() -> AccountId {
    AccountKeyring::Dave.to_account_id()
}

fn eve() -> AccountId {
    AccountKeyring::Eve.to_account_id()
}

fn ferdie() -> AccountId {
    AccountKeyring::Ferdie.to_account_id()
}

/// Signers of the admin council (2-of-3).
fn admin_signatories() -> Vec<AccountId> {
    vec![alice(), bob(), charlie()]
}

/// Signers of the guardian council (2-of-3).
fn guardian_signatories() -> Vec<AccountId> {
    vec![alice(), dave(), eve()]
}

/// Signers of the pause bot (1-of-2).
fn bot_signatories() -> Vec<AccountId> {
    vec![bob(), ferdie()]
}

fn multisig_of(signatories: &[AccountId], threshold: u16) -> AccountId {
    let mut sorted = signatories.to_vec();
    sorted.sort();
    Multisig::multi_account_id(&sorted, threshold)
}

fn admin_council() -> AccountId {
    multisig_of(&admin_signatories(), ADMIN_THRESHOLD)
}

fn guardian_council() -> AccountId {
    multisig_of(&guardian_signatories(), GUARDIAN_THRESHOLD)
}

fn pause_bot() -> AccountId {
    multisig_of(&bot_signatories(), 1)
}

fn treasury() -> AccountId {
    ferdie()
}

fn holder() -> AccountId {
    eve()
}

/// Get other signatories (excluding caller) in sorted order.
/// pallet-multisig requires other_signatories to be sorted.
fn sorted_other_signatories(all_signatories: &[AccountId], caller: &AccountId) -> Vec<AccountId> {
    let mut others: Vec<_> = all_signatories.iter().filter(|s| *s != caller).cloned().collect();
    others.sort();
    others
}

fn max_weight() -> Weight {
    Weight::from_parts(10_000_000_000, 1_000_000)
}

/// Build test externalities with every governance role held by a multisig account.
///
/// Sets up:
/// - Well-funded signatory accounts (Alice through Ferdie) for multisig deposits
/// - Admin council holding every administrative role
/// - Guardian council holding `EmergencyGuardian`, pause bot holding `BotPauser`
/// - No minter; the admin council has to appoint one
fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Runtime> {
        balances: [alice(), bob(), charlie(), dave(), eve(), ferdie()]
            .into_iter()
            .map(|account| (account, 100 * UNIT))
            .collect(),
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut roles: Vec<(Role, AccountId)> = [
        Role::DefaultAdmin,
        Role::UpgraderAdmin,
        Role::Upgrader,
        Role::AdminPauser,
        Role::GovernanceUnpauser,
        Role::Recovery,
        Role::BlocklistManager,
        Role::WhitelistManager,
        Role::CircuitBreaker,
        Role::ParamManager,
        Role::Snapshot,
    ]
    .into_iter()
    .map(|role| (role, admin_council()))
    .collect();
    roles.push((Role::EmergencyGuardian, guardian_council()));
    roles.push((Role::BotPauser, pause_bot()));

    pallet_governed_token::GenesisConfig::<Runtime> {
        token_name: b"Governed Token".to_vec(),
        token_symbol: b"GOV".to_vec(),
        decimals: 18,
        treasury: Some(treasury()),
        initial_balances: vec![(treasury(), TREASURY_SUPPLY), (holder(), HOLDER_SUPPLY)],
        roles,
        mint_limits: None,
        circuit_breaker_reset_interval: 0,
        transfer_restrictions_enabled: false,
        trading_enabled: true,
        implementation: Some(ImplementationSlots::slot(0)),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(GENESIS_MOMENT);
    });
    ext
}

/// Walks `call` through the approvals of the first `threshold` signatories.
///
/// Only the last approval carries a weight budget, so it is the one that executes.
fn execute_via_multisig(signatories: &[AccountId], threshold: u16, call: RuntimeCall) {
    let multisig_account = multisig_of(signatories, threshold);
    let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();
    let approvers = &signatories[..threshold as usize];

    for (index, signer) in approvers.iter().enumerate() {
        let executes = index + 1 == approvers.len();
        let timepoint = pallet_multisig::Multisigs::<Runtime>::get(&multisig_account, call_hash)
            .map(|multisig| multisig.when);

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(signer.clone()),
            threshold,
            sorted_other_signatories(signatories, signer),
            timepoint,
            Box::new(call.clone()),
            if executes { max_weight() } else { Weight::zero() },
        ));
    }
}

fn admin_council_executes(call: impl Into<RuntimeCall>) {
    execute_via_multisig(&admin_signatories(), ADMIN_THRESHOLD, call.into());
}

fn guardian_council_executes(call: impl Into<RuntimeCall>) {
    execute_via_multisig(&guardian_signatories(), GUARDIAN_THRESHOLD, call.into());
}

fn inner_call_failed() -> bool {
    System::events().iter().any(|record| {
        matches!(
            record.event,
            RuntimeEvent::Multisig(pallet_multisig::Event::MultisigExecuted {
                result: Err(_),
                ..
            })
        )
    })
}

// ============================================================================
// Basic Multi-Sig Flow Tests
// ============================================================================

/// Tests that multisig account derivation ignores signer order but not the threshold.
#[test]
fn multisig_account_depends_on_threshold_only() {
    new_test_ext().execute_with(|| {
        let reordered = vec![charlie(), alice(), bob()];

        assert_eq!(multisig_of(&reordered, ADMIN_THRESHOLD), admin_council());
        assert_ne!(multisig_of(&reordered, 3), admin_council());
    });
}

/// Tests that genesis places roles on the multisig accounts and not on their signers.
#[test]
fn genesis_assigns_roles_to_multisig_accounts() {
    new_test_ext().execute_with(|| {
        assert!(GovernedToken::has_role(Role::DefaultAdmin, &admin_council()));
        assert!(GovernedToken::has_role(Role::EmergencyGuardian, &guardian_council()));
        assert!(GovernedToken::has_role(Role::BotPauser, &pause_bot()));

        for signer in admin_signatories() {
            assert!(!GovernedToken::has_role(Role::DefaultAdmin, &signer));
        }
        for signer in guardian_signatories() {
            assert!(!GovernedToken::has_role(Role::EmergencyGuardian, &signer));
        }

        assert_eq!(GovernedToken::total_supply(), TREASURY_SUPPLY + HOLDER_SUPPLY);
        assert_eq!(GovernedToken::implementation(), Some(ImplementationSlots::slot(0)));
        assert_eq!(GovernedToken::mint_limits(), MintLimits::default_for_decimals(18));
    });
}

/// Tests that deposit is reserved when creating a multi-sig proposal.
#[test]
fn multisig_proposal_reserves_deposit() {
    new_test_ext().execute_with(|| {
        let signatories = admin_signatories();
        let initial_balance = Balances::free_balance(&alice());

        let call: RuntimeCall = pallet_governed_token::Call::pause {}.into();

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(alice()),
            ADMIN_THRESHOLD,
            sorted_other_signatories(&signatories, &alice()),
            None,
            Box::new(call),
            Weight::zero(),
        ));

        let reserved = Balances::reserved_balance(&alice());
        let expected_deposit =
            DepositBase::get() + DepositFactor::get() * Balance::from(ADMIN_THRESHOLD);

        assert_eq!(reserved, expected_deposit);
        assert_eq!(Balances::free_balance(&alice()), initial_balance - expected_deposit);
        // Nothing executes on the first approval.
        assert!(!GovernedToken::paused());
    });
}

/// Tests that a signer cannot use a role held by its council on their own.
#[test]
fn individual_signer_cannot_use_council_role() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            GovernedToken::pause(RuntimeOrigin::signed(alice())),
            pallet_governed_token::Error::<Runtime>::Unauthorized
        );
        assert_noop!(
            GovernedToken::grant_role(RuntimeOrigin::signed(bob()), Role::Minter, bob()),
            pallet_governed_token::Error::<Runtime>::Unauthorized
        );
        assert_noop!(
            GovernedToken::activate_emergency_mode(RuntimeOrigin::signed(dave()), b"x".to_vec()),
            pallet_governed_token::Error::<Runtime>::Unauthorized
        );
    });
}

// ============================================================================
// Governance via Multi-Sig Tests
// ============================================================================

/// Tests that the admin council appoints a minter who can then mint directly.
///
/// Flow: Alice proposes grant -> Bob approves -> Charlie mints
#[test]
fn admin_council_grants_minter() {
    new_test_ext().execute_with(|| {
        let minter = charlie();

        admin_council_executes(pallet_governed_token::Call::grant_role {
            role: Role::Minter,
            account: minter.clone(),
        });

        assert!(GovernedToken::has_role(Role::Minter, &minter));
        System::assert_has_event(
            pallet_governed_token::Event::<Runtime>::RoleGranted {
                role: Role::Minter,
                account: minter.clone(),
                sender: admin_council(),
            }
            .into(),
        );

        let amount = 5_000 * TOKEN;
        assert_ok!(GovernedToken::mint(RuntimeOrigin::signed(minter), holder(), amount));

        assert_eq!(GovernedToken::balance_of(&holder()), HOLDER_SUPPLY + amount);
        assert_eq!(GovernedToken::total_supply(), TREASURY_SUPPLY + HOLDER_SUPPLY + amount);
    });
}

/// Tests that the pause bot's 1-of-2 multisig pauses without a second approval and
/// that only the admin council can lift the pause.
#[test]
fn pause_bot_pauses_immediately() {
    new_test_ext().execute_with(|| {
        let signatories = bot_signatories();

        assert_ok!(Multisig::as_multi_threshold_1(
            RuntimeOrigin::signed(ferdie()),
            sorted_other_signatories(&signatories, &ferdie()),
            Box::new(pallet_governed_token::Call::pause {}.into()),
        ));

        assert!(GovernedToken::paused());
        assert_noop!(
            GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN),
            pallet_governed_token::Error::<Runtime>::EnforcedPause
        );

        // BotPauser cannot unpause. Threshold-1 calls surface the inner error.
        assert!(Multisig::as_multi_threshold_1(
            RuntimeOrigin::signed(bob()),
            sorted_other_signatories(&signatories, &bob()),
            Box::new(pallet_governed_token::Call::unpause {}.into()),
        )
        .is_err());
        assert!(GovernedToken::paused());

        admin_council_executes(pallet_governed_token::Call::unpause {});

        assert!(!GovernedToken::paused());
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN));
    });
}

/// Tests circuit breaker trigger and reset through the admin council.
#[test]
fn admin_council_operates_circuit_breaker() {
    new_test_ext().execute_with(|| {
        admin_council_executes(pallet_governed_token::Call::trigger_circuit_breaker {
            reason: b"oracle deviation".to_vec(),
        });

        assert!(GovernedToken::circuit_breaker_active());
        assert_noop!(
            GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN),
            pallet_governed_token::Error::<Runtime>::CircuitBreakerActive
        );

        admin_council_executes(pallet_governed_token::Call::reset_circuit_breaker {});

        assert!(!GovernedToken::circuit_breaker_active());
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN));
    });
}

/// Tests that emergency mode only activates once the guardian threshold is met.
#[test]
fn guardian_council_activates_emergency_mode() {
    new_test_ext().execute_with(|| {
        let signatories = guardian_signatories();
        let call: RuntimeCall = pallet_governed_token::Call::activate_emergency_mode {
            reason: b"key compromise".to_vec(),
        }
        .into();
        let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(alice()),
            GUARDIAN_THRESHOLD,
            sorted_other_signatories(&signatories, &alice()),
            None,
            Box::new(call.clone()),
            Weight::zero(),
        ));
        assert!(!GovernedToken::emergency().active);

        let timepoint = pallet_multisig::Multisigs::<Runtime>::get(&guardian_council(), call_hash)
            .expect("Multisig should exist")
            .when;

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(dave()),
            GUARDIAN_THRESHOLD,
            sorted_other_signatories(&signatories, &dave()),
            Some(timepoint),
            Box::new(call),
            max_weight(),
        ));

        assert!(GovernedToken::emergency().active);
        assert!(GovernedToken::paused());
        assert!(GovernedToken::can_use_emergency_powers());
        assert!(pallet_multisig::Multisigs::<Runtime>::get(&guardian_council(), call_hash).is_none());
    });
}

/// Tests the full emergency lifecycle: activation, emergency upgrade, deactivation.
#[test]
fn guardian_council_emergency_upgrade() {
    new_test_ext().execute_with(|| {
        let patched = ImplementationSlots::slot(1);

        guardian_council_executes(pallet_governed_token::Call::activate_emergency_mode {
            reason: b"exploit in transfer path".to_vec(),
        });

        // The regular path is closed while emergency mode is on.
        admin_council_executes(pallet_governed_token::Call::upgrade_to {
            new_implementation: patched.clone(),
        });
        assert!(inner_call_failed());
        assert_eq!(GovernedToken::implementation(), Some(ImplementationSlots::slot(0)));

        guardian_council_executes(pallet_governed_token::Call::emergency_upgrade {
            new_implementation: patched.clone(),
        });

        assert_eq!(GovernedToken::implementation(), Some(patched.clone()));
        System::assert_has_event(
            pallet_governed_token::Event::<Runtime>::EmergencyUpgradeExecuted {
                implementation: patched,
            }
            .into(),
        );

        guardian_council_executes(pallet_governed_token::Call::deactivate_emergency_mode {});

        assert!(!GovernedToken::emergency().active);
        assert!(!GovernedToken::paused());
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN));
    });
}

/// Tests that the admin council cannot lift the pause while emergency mode is on.
#[test]
fn emergency_pause_outlives_council_unpause() {
    new_test_ext().execute_with(|| {
        guardian_council_executes(pallet_governed_token::Call::activate_emergency_mode {
            reason: b"key compromise".to_vec(),
        });

        admin_council_executes(pallet_governed_token::Call::unpause {});

        assert!(inner_call_failed());
        assert!(GovernedToken::paused());
        assert!(GovernedToken::emergency().active);
    });
}

/// Tests that the admin council moves the treasury and trading opens once.
#[test]
fn admin_council_moves_treasury_and_opens_trading() {
    new_test_ext().execute_with(|| {
        pallet_governed_token::TradingEnabled::<Runtime>::put(false);
        let new_treasury = multisig_of(&admin_signatories(), 3);

        assert_noop!(
            GovernedToken::transfer(RuntimeOrigin::signed(holder()), charlie(), TOKEN),
            pallet_governed_token::Error::<Runtime>::TradingNotEnabled
        );

        admin_council_executes(pallet_governed_token::Call::update_treasury {
            new_treasury: new_treasury.clone(),
        });
        assert_eq!(GovernedToken::treasury(), Some(new_treasury.clone()));
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), new_treasury, TOKEN));

        admin_council_executes(pallet_governed_token::Call::enable_trading {});
        assert!(GovernedToken::trading_enabled());
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), charlie(), TOKEN));
    });
}

/// Tests that only recognised implementation slots can be installed.
#[test]
fn upgrade_requires_implementation_slot() {
    new_test_ext().execute_with(|| {
        admin_council_executes(pallet_governed_token::Call::upgrade_to {
            new_implementation: dave(),
        });
        assert!(inner_call_failed());
        assert_eq!(GovernedToken::implementation(), Some(ImplementationSlots::slot(0)));

        System::reset_events();
        let next = ImplementationSlots::slot(IMPLEMENTATION_SLOTS - 1);
        admin_council_executes(pallet_governed_token::Call::upgrade_to {
            new_implementation: next.clone(),
        });

        assert!(!inner_call_failed());
        assert_eq!(GovernedToken::implementation(), Some(next));
    });
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Tests that a failing inner call still consumes the approvals but changes nothing.
#[test]
fn failed_inner_call_leaves_token_untouched() {
    new_test_ext().execute_with(|| {
        let call: RuntimeCall =
            pallet_governed_token::Call::mint { to: holder(), amount: TOKEN }.into();
        let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();

        // The admin council is not a minter.
        execute_via_multisig(&admin_signatories(), ADMIN_THRESHOLD, call);

        assert!(inner_call_failed());
        assert_eq!(GovernedToken::total_supply(), TREASURY_SUPPLY + HOLDER_SUPPLY);
        assert!(pallet_multisig::Multisigs::<Runtime>::get(&admin_council(), call_hash).is_none());
        assert_eq!(Balances::reserved_balance(&alice()), 0);
    });
}

/// Tests that duplicate approval from the same signer is rejected.
#[test]
fn duplicate_approval_rejected() {
    new_test_ext().execute_with(|| {
        let signatories = admin_signatories();
        let call: RuntimeCall = pallet_governed_token::Call::create_snapshot {}.into();
        let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(alice()),
            ADMIN_THRESHOLD,
            sorted_other_signatories(&signatories, &alice()),
            None,
            Box::new(call.clone()),
            Weight::zero(),
        ));

        let timepoint = pallet_multisig::Multisigs::<Runtime>::get(&admin_council(), call_hash)
            .expect("Multisig should exist")
            .when;

        assert_noop!(
            Multisig::as_multi(
                RuntimeOrigin::signed(alice()),
                ADMIN_THRESHOLD,
                sorted_other_signatories(&signatories, &alice()),
                Some(timepoint),
                Box::new(call),
                Weight::zero(),
            ),
            pallet_multisig::Error::<Runtime>::AlreadyApproved
        );
        assert_eq!(GovernedToken::latest_snapshot_id(), 0);
    });
}

/// Tests that timepoint must match for subsequent approvals.
#[test]
fn wrong_timepoint_rejected() {
    new_test_ext().execute_with(|| {
        let signatories = admin_signatories();
        let call: RuntimeCall = pallet_governed_token::Call::create_snapshot {}.into();
        let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();

        assert_ok!(Multisig::as_multi(
            RuntimeOrigin::signed(alice()),
            ADMIN_THRESHOLD,
            sorted_other_signatories(&signatories, &alice()),
            None,
            Box::new(call.clone()),
            Weight::zero(),
        ));

        let actual_timepoint =
            pallet_multisig::Multisigs::<Runtime>::get(&admin_council(), call_hash)
                .expect("Multisig should exist")
                .when;
        let wrong_timepoint = pallet_multisig::Timepoint {
            height: actual_timepoint.height + 100,
            index: actual_timepoint.index,
        };

        assert_noop!(
            Multisig::as_multi(
                RuntimeOrigin::signed(bob()),
                ADMIN_THRESHOLD,
                sorted_other_signatories(&signatories, &bob()),
                Some(wrong_timepoint),
                Box::new(call),
                max_weight(),
            ),
            pallet_multisig::Error::<Runtime>::WrongTimepoint
        );
    });
}

/// Tests that snapshots created by the council record supply at approval time.
#[test]
fn admin_council_creates_snapshot() {
    new_test_ext().execute_with(|| {
        admin_council_executes(pallet_governed_token::Call::create_snapshot {});

        let snapshot = GovernedToken::snapshot(1).expect("snapshot 1 exists");
        assert_eq!(snapshot.total_supply, TREASURY_SUPPLY + HOLDER_SUPPLY);
        assert_eq!(snapshot.timestamp, GENESIS_MOMENT / 1_000);
        assert!(!GovernedToken::snapshot_exists(2));
    });
}

// ============================================================================
// Runtime Upgrade Tests
// ============================================================================

/// Tests that `Executive` runs the governed token migrations on upgrade.
#[test]
fn runtime_upgrade_migrates_governed_token() {
    new_test_ext().execute_with(|| {
        StorageVersion::new(0).put::<GovernedToken>();
        pallet_governed_token::CurrentMintLimits::<Runtime>::kill();
        assert!(GovernedToken::mint_limits().is_unset());

        Executive::execute_on_runtime_upgrade();

        assert_eq!(GovernedToken::on_chain_storage_version(), 1);
        assert_eq!(GovernedToken::mint_limits(), MintLimits::default_for_decimals(18));
    });
}

/// End-to-end: appoint a minter, mint, lock down under a breaker, recover.
#[test]
fn complete_governance_workflow() {
    new_test_ext().execute_with(|| {
        let minter = bob();

        // Step 1: Admin council appoints a minter
        admin_council_executes(pallet_governed_token::Call::grant_role {
            role: Role::Minter,
            account: minter.clone(),
        });

        // Step 2: Minter issues to the holder
        assert_ok!(GovernedToken::mint(RuntimeOrigin::signed(minter.clone()), holder(), TOKEN));

        // Step 3: Admin council blocklists a compromised account
        admin_council_executes(pallet_governed_token::Call::update_blocklist {
            account: holder(),
            blocked: true,
        });
        assert_noop!(
            GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN),
            pallet_governed_token::Error::<Runtime>::BlockedAddress
        );

        // Step 4: Council revokes the minter again
        admin_council_executes(pallet_governed_token::Call::revoke_role {
            role: Role::Minter,
            account: minter.clone(),
        });
        assert_noop!(
            GovernedToken::mint(RuntimeOrigin::signed(minter), treasury(), TOKEN),
            pallet_governed_token::Error::<Runtime>::Unauthorized
        );

        // Step 5: Issue resolved, holder unblocked and free to transfer
        admin_council_executes(pallet_governed_token::Call::update_blocklist {
            account: holder(),
            blocked: false,
        });
        assert_ok!(GovernedToken::transfer(RuntimeOrigin::signed(holder()), treasury(), TOKEN));

        assert_eq!(GovernedToken::total_supply(), TREASURY_SUPPLY + HOLDER_SUPPLY + TOKEN);
    });
}
