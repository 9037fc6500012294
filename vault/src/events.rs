multiversx_sc::imports!();

/// One `#[event]` per row of spec §6's event table, argument order matching
/// the payload column. Emitted in the exact order the vault's entrypoints
/// specify and never for a failed call (spec §9 "Event log as authoritative
/// projection").
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposited")]
    fn deposited_event(
        &self,
        #[indexed] user: &ManagedAddress,
        amount_motes: &BigUint,
        new_collateral_motes: &BigUint,
    );

    #[event("borrowed")]
    fn borrowed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        amount_wad: &BigUint,
        new_debt_wad: &BigUint,
    );

    #[event("repaid")]
    fn repaid_event(
        &self,
        #[indexed] user: &ManagedAddress,
        amount_wad: &BigUint,
        new_debt_wad: &BigUint,
    );

    #[event("withdrawRequested")]
    fn withdraw_requested_event(&self, #[indexed] user: &ManagedAddress, amount_motes: &BigUint);

    #[event("withdrawFinalized")]
    fn withdraw_finalized_event(&self, #[indexed] user: &ManagedAddress, amount_motes: &BigUint);

    #[event("interestAccrued")]
    fn interest_accrued_event(&self, #[indexed] user: &ManagedAddress, amount_wad: &BigUint);

    #[event("delegationBatched")]
    fn delegation_batched_event(&self, amount_motes: &BigUint);

    #[event("undelegationRequested")]
    fn undelegation_requested_event(&self, amount_motes: &BigUint);

    #[event("validatorSet")]
    fn validator_set_event(&self, new_validator_key: &ManagedBuffer);
}
