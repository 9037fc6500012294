multiversx_sc::imports!();

/// Standard fungible-token events. Not consumed by the vault itself (spec
/// §4.3) but kept for external wallets/indexers reading this contract
/// directly.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );
}
