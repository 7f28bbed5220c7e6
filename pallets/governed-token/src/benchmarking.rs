//! Benchmarking setup for pallet-governed-token

use super::*;

#[allow(unused)]
use crate::Pallet as GovernedToken;
use alloc::vec;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn holder<T: Config>(role: Role) -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    RoleMembers::<T>::insert(role, &caller, ());
    caller
}

fn open_limits<T: Config>() {
    CurrentMintLimits::<T>::put(MintLimits {
        max_per_transaction: u128::MAX,
        max_per_block: u128::MAX,
        max_per_day: u128::MAX,
        cooldown_blocks: 0,
    });
}

fn max_reason() -> Vec<u8> {
    vec![b'x'; circuit_breaker::MAX_REASON_LEN as usize]
}

// Restrictions on and both endpoints whitelisted: every list is read.
fn restricted_endpoints<T: Config>(from: &T::AccountId, to: &T::AccountId) {
    TransferRestrictionsEnabled::<T>::put(true);
    TradingEnabled::<T>::put(true);
    Whitelist::<T>::insert(from, ());
    Whitelist::<T>::insert(to, ());
}

#[benchmarks]
mod benchmarks {
    use super::*;

    // Worst case: restrictions enabled, both endpoints checked against both lists.
    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        restricted_endpoints::<T>(&caller, &recipient);
        Balances::<T>::insert(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        restricted_endpoints::<T>(&owner, &recipient);
        Balances::<T>::insert(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 9_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    // Worst case: a large mint that rolls both windows over and records the cooldown.
    #[benchmark]
    fn mint() {
        let caller = holder::<T>(Role::Minter);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = T::LargeMintThreshold::get().min(T::MaxSupply::get());
        open_limits::<T>();
        TotalSupply::<T>::put(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn grant_role() {
        let caller = holder::<T>(Role::DefaultAdmin);
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, target.clone());

        assert!(RoleMembers::<T>::contains_key(Role::Minter, &target));
    }

    #[benchmark]
    fn revoke_role() {
        let caller = holder::<T>(Role::DefaultAdmin);
        let target: T::AccountId = account("target", 0, 0);
        RoleMembers::<T>::insert(Role::Minter, &target, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, target.clone());

        assert!(!RoleMembers::<T>::contains_key(Role::Minter, &target));
    }

    #[benchmark]
    fn renounce_role() {
        let caller = holder::<T>(Role::Minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Minter);

        assert!(!RoleMembers::<T>::contains_key(Role::Minter, &caller));
    }

    #[benchmark]
    fn pause() {
        let caller = holder::<T>(Role::BotPauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller = holder::<T>(Role::GovernanceUnpauser);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn set_mint_limits() {
        let caller = holder::<T>(Role::DefaultAdmin);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 10, 20, 30, 5);

        assert_eq!(CurrentMintLimits::<T>::get().max_per_day, 30);
    }

    #[benchmark]
    fn update_blocklist() {
        let caller = holder::<T>(Role::BlocklistManager);
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone(), true);

        assert!(Blocklist::<T>::contains_key(&target));
    }

    #[benchmark]
    fn update_whitelist() {
        let caller = holder::<T>(Role::WhitelistManager);
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone(), true);

        assert!(Whitelist::<T>::contains_key(&target));
    }

    #[benchmark]
    fn toggle_transfer_restrictions() {
        let caller = holder::<T>(Role::DefaultAdmin);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(TransferRestrictionsEnabled::<T>::get());
    }

    #[benchmark]
    fn trigger_circuit_breaker() {
        let caller = holder::<T>(Role::CircuitBreaker);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), max_reason());

        assert!(CircuitBreaker::<T>::get().triggered);
    }

    #[benchmark]
    fn reset_circuit_breaker() {
        let caller = holder::<T>(Role::CircuitBreaker);
        CircuitBreaker::<T>::mutate(|breaker| breaker.triggered = true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!CircuitBreaker::<T>::get().triggered);
    }

    #[benchmark]
    fn configure_circuit_breaker() {
        let caller = holder::<T>(Role::ParamManager);
        let interval = circuit_breaker::MIN_RESET_INTERVAL;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), interval, true);

        assert_eq!(CircuitBreaker::<T>::get().reset_interval, interval);
    }

    #[benchmark]
    fn activate_emergency_mode() {
        let caller = holder::<T>(Role::EmergencyGuardian);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), max_reason());

        assert!(Emergency::<T>::get().active);
        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn deactivate_emergency_mode() {
        let caller = holder::<T>(Role::EmergencyGuardian);
        Emergency::<T>::put(EmergencyState { active: true, activated_at: GovernedToken::<T>::now() });
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Emergency::<T>::get().active);
        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn emergency_upgrade() {
        let caller = holder::<T>(Role::EmergencyGuardian);
        let target = T::ImplementationCode::benchmark_implementation();
        Emergency::<T>::put(EmergencyState { active: true, activated_at: GovernedToken::<T>::now() });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Implementation::<T>::get(), Some(target));
    }

    #[benchmark]
    fn upgrade_to() {
        let caller = holder::<T>(Role::Upgrader);
        let target = T::ImplementationCode::benchmark_implementation();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Implementation::<T>::get(), Some(target));
    }

    #[benchmark]
    fn create_snapshot() {
        let caller = holder::<T>(Role::Snapshot);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Snapshots::<T>::contains_key(LatestSnapshotId::<T>::get()));
    }

    #[benchmark]
    fn recover_native() {
        let caller = holder::<T>(Role::Recovery);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let unit = T::Currency::minimum_balance().max(1u32.into());
        let _ = T::Currency::set_balance(&GovernedToken::<T>::account_id(), unit * 100u32.into());
        let amount: u128 = (unit * 10u32.into()).saturated_into();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(T::Currency::balance(&recipient).saturated_into::<u128>(), amount);
    }

    // Worst case: every role moves and `revoke_from` held all four.
    #[benchmark]
    fn migrate_roles() {
        let caller = holder::<T>(Role::DefaultAdmin);
        for role in [Role::UpgraderAdmin, Role::Upgrader, Role::Recovery] {
            RoleMembers::<T>::insert(role, &caller, ());
        }
        let main_timelock: T::AccountId = account("main", 0, 0);
        let upgrade_timelock: T::AccountId = account("upgrade", 0, 0);

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            main_timelock.clone(),
            upgrade_timelock.clone(),
            caller.clone(),
        );

        assert!(Migrated::<T>::get());
        assert!(RoleMembers::<T>::contains_key(Role::DefaultAdmin, &main_timelock));
        assert!(!RoleMembers::<T>::contains_key(Role::DefaultAdmin, &caller));
    }

    #[benchmark]
    fn update_treasury() {
        let caller = holder::<T>(Role::DefaultAdmin);
        let new_treasury: T::AccountId = account("treasury", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_treasury.clone());

        assert_eq!(Treasury::<T>::get(), Some(new_treasury));
    }

    #[benchmark]
    fn enable_trading() {
        let caller = holder::<T>(Role::DefaultAdmin);
        TradingEnabled::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(TradingEnabled::<T>::get());
    }

    impl_benchmark_test_suite!(GovernedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
