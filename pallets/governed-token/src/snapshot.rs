use codec::{Decode, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

/// Point-in-time record of the total supply. Ids start at 1 and are never reused.
#[derive(
    Clone, Copy, PartialEq, Eq, Default, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct Snapshot {
    pub id: u64,
    /// Unix seconds.
    pub timestamp: u64,
    pub total_supply: u128,
    pub active: bool,
}
