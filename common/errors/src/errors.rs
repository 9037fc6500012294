#![no_std]

// Error taxonomy shared by the vault and the debt token. Each constant aborts
// the current entrypoint with no state change when passed to `require!`.

pub static ERROR_CONTRACT_PAUSED: &[u8] = b"Contract is paused.";
pub static ERROR_UNAUTHORIZED: &[u8] = b"Unauthorized caller.";
pub static ERROR_NO_VAULT: &[u8] = b"No position found for this account.";
pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount must be greater than zero.";
pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] =
    b"Withdraw amount exceeds available collateral.";
pub static ERROR_LTV_EXCEEDED: &[u8] = b"Action would exceed the maximum loan-to-value ratio.";
pub static ERROR_INSUFFICIENT_DEBT: &[u8] = b"No outstanding debt to repay.";
pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient allowance for transfer_from.";
pub static ERROR_WITHDRAW_PENDING: &[u8] = b"A withdrawal is already pending for this account.";
pub static ERROR_NO_WITHDRAW_PENDING: &[u8] = b"No withdrawal is pending for this account.";
pub static ERROR_UNBONDING_NOT_COMPLETE: &[u8] =
    b"Unbonding delay has not elapsed; liquidity is not yet available.";
pub static ERROR_BELOW_MIN_DEPOSIT: &[u8] = b"Deposit is below the minimum deposit amount.";
pub static ERROR_INVALID_VALIDATOR_KEY: &[u8] = b"Validator key is empty or malformed.";
pub static ERROR_OVERFLOW: &[u8] = b"Arithmetic operation would overflow.";

// Debt token specific.
pub static ERROR_ONLY_VAULT: &[u8] = b"Only the configured vault may call this endpoint.";
pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient balance.";
