multiversx_sc::imports!();

/// Per-address ledger for the DEBT fungible token. Mirrors the teacher's
/// pattern of hand-rolled per-address `SingleValueMapper` accounting
/// (`liquidity_layer::storage::{supplied, borrowed}`), generalized to a
/// two-key `allowance(owner, spender)` mapper.
#[multiversx_sc::module]
pub trait Storage {
    #[view(getVault)]
    #[storage_mapper("vault_address")]
    fn vault_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(totalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
