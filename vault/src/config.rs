multiversx_sc::imports!();

use common_errors::{ERROR_CONTRACT_PAUSED, ERROR_INVALID_VALIDATOR_KEY};

/// Owner-restricted validator setter and pause flag (spec §4.6). The pause
/// flag and its endpoints are `multiversx_sc_modules::pause::PauseModule`
/// (default unpaused, `#[only_owner]`-gated `pause`/`unpause` endpoints)
/// rather than a hand-rolled boolean, mirroring how `price_aggregator`'s
/// `AdminModule` composes the same module. `owner` itself is the framework's
/// built-in contract owner (set at deploy), checked by `#[only_owner]` —
/// the same pattern `controller::config::ConfigModule` uses for its
/// owner-gated setters.
#[multiversx_sc::module]
pub trait ConfigModule:
    crate::storage::Storage + crate::events::EventsModule + multiversx_sc_modules::pause::PauseModule
{
    /// Owner-only. Does not migrate existing delegation; the pooled
    /// collateral already delegated to the previous validator keeps earning
    /// there until the next `request_outbound`/`record_inbound` cycle moves
    /// liquidity (spec §4.5 `set_validator`).
    #[only_owner]
    #[endpoint(setValidator)]
    fn set_validator(&self, new_key: ManagedBuffer) {
        require!(!new_key.is_empty(), ERROR_INVALID_VALIDATOR_KEY);
        self.validator().set(&new_key);
        self.validator_set_event(&new_key);
    }

    /// Gates every state-mutating user entrypoint (spec §4.5, §7
    /// `ContractPaused`). Uses the vault's own error constant rather than
    /// `PauseModule::require_not_paused`'s default message, to keep the
    /// error taxonomy in `common-errors` canonical.
    fn require_not_paused(&self) {
        require!(!self.is_paused(), ERROR_CONTRACT_PAUSED);
    }
}
