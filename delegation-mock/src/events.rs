multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("delegated")]
    fn delegated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] validator: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("undelegated")]
    fn undelegated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] validator: &ManagedBuffer,
        #[indexed] maturity_epoch: u64,
        amount: &BigUint,
    );

    #[event("withdrawn")]
    fn withdrawn_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] validator: &ManagedBuffer,
        amount: &BigUint,
    );
}
