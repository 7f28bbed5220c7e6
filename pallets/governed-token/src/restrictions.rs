//! Transfer policy: blocklist, whitelist and the treasury exemption.

use sp_runtime::RuntimeDebug;

/// Read access to the lists a transfer is checked against.
pub trait RestrictionLists<AccountId> {
    fn restrictions_enabled(&self) -> bool;
    fn is_blocked(&self, who: &AccountId) -> bool;
    fn is_whitelisted(&self, who: &AccountId) -> bool;
    /// The treasury. Exempt from the whitelist, never from the blocklist.
    fn is_exempt(&self, who: &AccountId) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum TransferRejection {
    BlockedAddress,
    NotWhitelisted,
}

/// Decides whether `from` may send to `to`.
///
/// The blocklist is checked first and applies to both endpoints regardless of
/// whitelist or treasury status. With restrictions disabled nothing else is checked.
/// Otherwise transfers out of the treasury are always allowed and every other transfer
/// needs both endpoints to be exempt or whitelisted.
pub fn check_transfer<AccountId, L: RestrictionLists<AccountId>>(
    lists: &L,
    from: &AccountId,
    to: &AccountId,
) -> Result<(), TransferRejection> {
    if lists.is_blocked(from) || lists.is_blocked(to) {
        return Err(TransferRejection::BlockedAddress);
    }
    if !lists.restrictions_enabled() || lists.is_exempt(from) {
        return Ok(());
    }

    let cleared = |who: &AccountId| lists.is_exempt(who) || lists.is_whitelisted(who);
    if cleared(from) && cleared(to) {
        Ok(())
    } else {
        Err(TransferRejection::NotWhitelisted)
    }
}
