#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod storage;

pub use storage::UnbondEntry;

/// Default unbonding delay, in epochs, used when `init` receives zero.
/// Production deployments point `DelegationAdapter` at the chain's real
/// validator-delegation system instead of this mock; the interface is
/// identical (spec §4.4).
pub const DEFAULT_UNBOND_PERIOD_EPOCHS: u64 = 10;

/// Stand-in for the host chain's validator delegation manager, used the way
/// the teacher's `swap_mock`/`flash_mock` crates stand in for an external
/// DEX/flash-loan counterparty during tests (spec §4.4, SPEC_FULL §2).
///
/// Unlike the real on-chain delegation system, this mock tracks an explicit
/// unbonding queue per `(caller, validator)` so tests can advance the block
/// epoch and observe `withdraw` only releasing motes whose delay has
/// elapsed.
#[multiversx_sc::contract]
pub trait DelegationMock: storage::Storage + events::EventsModule {
    #[init]
    fn init(&self, unbond_period_epochs: OptionalValue<u64>) {
        let period = match unbond_period_epochs {
            OptionalValue::Some(p) if p > 0 => p,
            _ => DEFAULT_UNBOND_PERIOD_EPOCHS,
        };
        self.unbond_period_epochs().set(period);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Delegates the attached EGLD value to `validator` on behalf of the
    /// caller (spec §4.4 `delegate(validator, motes)`).
    #[payable("EGLD")]
    #[endpoint(delegate)]
    fn delegate(&self, validator: ManagedBuffer) {
        require!(!validator.is_empty(), "Validator key is empty or malformed.");
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0, "Amount must be greater than zero.");

        self.delegated_stake(&caller, &validator)
            .update(|s| *s += &amount);
        self.delegated_event(&caller, &validator, &amount);
    }

    /// Requests undelegation of `amount` from `validator`. The motes join
    /// an unbonding queue and become withdrawable once `unbond_period_epochs`
    /// has elapsed (spec §4.4 `undelegate(validator, motes)`).
    #[endpoint(unDelegate)]
    fn un_delegate(&self, validator: ManagedBuffer, amount: BigUint) {
        require!(amount > 0, "Amount must be greater than zero.");
        let caller = self.blockchain().get_caller();

        let stake_mapper = self.delegated_stake(&caller, &validator);
        let current = stake_mapper.get();
        require!(current >= amount, "insufficient delegated stake");
        stake_mapper.set(&(current - &amount));

        let maturity_epoch = self.blockchain().get_block_epoch() + self.unbond_period_epochs().get();
        self.unbond_queue(&caller, &validator).push(&UnbondEntry {
            amount: amount.clone(),
            maturity_epoch,
        });

        self.undelegated_event(&caller, &validator, maturity_epoch, &amount);
    }

    /// Pays out every matured entry of the caller's unbonding queue for
    /// `validator`, leaving unmatured entries queued. Mirrors the real
    /// delegation manager's `withdraw()`, which pays out whatever has
    /// crossed the unbonding delay and leaves the rest pending.
    #[endpoint(withdraw)]
    fn withdraw(&self, validator: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let current_epoch = self.blockchain().get_block_epoch();

        let mut queue = self.unbond_queue(&caller, &validator);
        let mut matured = BigUint::zero();
        let mut still_pending = ManagedVec::<Self::Api, UnbondEntry<Self::Api>>::new();

        for entry in queue.iter() {
            if entry.maturity_epoch <= current_epoch {
                matured += &entry.amount;
            } else {
                still_pending.push(entry.clone());
            }
        }

        require!(matured > 0, "nothing matured yet");

        queue.clear();
        for entry in still_pending.iter() {
            queue.push(&entry);
        }

        self.tx().to(&caller).egld(&matured).transfer();
        self.withdrawn_event(&caller, &validator, &matured);
    }

    #[view(getPendingUnbondTotal)]
    fn pending_unbond_total(&self, caller: ManagedAddress, validator: ManagedBuffer) -> BigUint {
        let mut total = BigUint::zero();
        for entry in self.unbond_queue(&caller, &validator).iter() {
            total += &entry.amount;
        }
        total
    }

    /// Sum of queued entries that have already crossed `unbond_period_epochs`,
    /// i.e. what `withdraw` would pay out if called right now. Lets a caller
    /// (the vault's `DelegationAdapter`) decide whether to attempt settlement
    /// without mutating the queue just to find out.
    #[view(getClaimableUnbondTotal)]
    fn claimable_unbond_total(&self, caller: ManagedAddress, validator: ManagedBuffer) -> BigUint {
        let current_epoch = self.blockchain().get_block_epoch();
        let mut total = BigUint::zero();
        for entry in self.unbond_queue(&caller, &validator).iter() {
            if entry.maturity_epoch <= current_epoch {
                total += &entry.amount;
            }
        }
        total
    }
}
