multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A single queued undelegation, waiting for its host-defined unbonding
/// delay to elapse before it can be withdrawn back to the caller.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct UnbondEntry<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub maturity_epoch: u64,
}

/// Storage for the mock validator-delegation manager (spec §4.4's host
/// collaborator). Keyed by `(caller, validator)` so a single deployed mock
/// can stand in for several vault instances in tests, mirroring the way the
/// teacher's `price-aggregator::storage::rounds` is keyed by token pair.
#[multiversx_sc::module]
pub trait Storage {
    #[view(getDelegatedAmount)]
    #[storage_mapper("delegated_stake")]
    fn delegated_stake(
        &self,
        caller: &ManagedAddress,
        validator: &ManagedBuffer,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("unbond_queue")]
    fn unbond_queue(
        &self,
        caller: &ManagedAddress,
        validator: &ManagedBuffer,
    ) -> VecMapper<UnbondEntry<Self::Api>>;

    #[view(getUnbondPeriodEpochs)]
    #[storage_mapper("unbond_period_epochs")]
    fn unbond_period_epochs(&self) -> SingleValueMapper<u64>;
}
