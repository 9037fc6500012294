multiversx_sc::imports!();

use common_structs::Position;

/// Global and per-user state of the vault (spec §3 "Data model").
///
/// `owner`/`paused` live in `multiversx_sc_modules::pause::PauseModule` plus
/// the framework's built-in owner (set at deploy, checked by `#[only_owner]`)
/// rather than being re-declared here — see SPEC_FULL §3 "AdminControl".
#[multiversx_sc::module]
pub trait Storage {
    /// DEBT contract address. Immutable after `init` (spec §3).
    #[view(getDebtTokenAddress)]
    #[storage_mapper("debt_token_address")]
    fn debt_token_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Host delegation-manager contract address (the real chain-level
    /// delegation system in production, `delegation-mock` in tests).
    #[view(getDelegationManagerAddress)]
    #[storage_mapper("delegation_manager_address")]
    fn delegation_manager_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Validator key pooled collateral delegates to. The one owner-settable
    /// parameter (spec §3, §4.5 `set_validator`).
    #[view(getValidator)]
    #[storage_mapper("validator")]
    fn validator(&self) -> SingleValueMapper<ManagedBuffer>;

    /// Liquid BASE (motes) awaiting the next batch delegation.
    #[view(getPendingToDelegate)]
    #[storage_mapper("pending_to_delegate")]
    fn pending_to_delegate(&self) -> SingleValueMapper<BigUint>;

    /// Sum of all users' `collateral_motes` (invariant I4).
    #[view(getTotalCollateral)]
    #[storage_mapper("total_collateral")]
    fn total_collateral(&self) -> SingleValueMapper<BigUint>;

    /// Sum of all users' `debt_principal` (invariant I4, I6).
    #[view(getTotalDebtPrincipal)]
    #[storage_mapper("total_debt_principal")]
    fn total_debt_principal(&self) -> SingleValueMapper<BigUint>;

    /// Per-user position ledger, keyed by the caller's account address
    /// (spec §6 "Persisted state layout").
    #[storage_mapper("position")]
    fn position(&self, user: &ManagedAddress) -> SingleValueMapper<Position<Self::Api>>;
}
