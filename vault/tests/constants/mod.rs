use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::MxscPath;

pub use common_constants::{
    BPS_DIVISOR, INTEREST_RATE_BPS, LTV_MAX_BPS, MIN_DEPOSIT_MOTES, MOTES_PER_BASE,
    SECONDS_PER_YEAR, WAD,
};

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const USER_A: TestAddress = TestAddress::new("user-a");
pub const USER_B: TestAddress = TestAddress::new("user-b");

pub const VALIDATOR_KEY: &[u8] = b"validator-1";

pub use delegation_mock::DEFAULT_UNBOND_PERIOD_EPOCHS;

pub const VAULT_PATH: MxscPath = MxscPath::new("../output/vault.mxsc.json");
pub const DEBT_TOKEN_PATH: MxscPath = MxscPath::new("../debt-token/output/debt-token.mxsc.json");
pub const DELEGATION_MOCK_PATH: MxscPath =
    MxscPath::new("../delegation-mock/output/delegation-mock.mxsc.json");

/// One whole BASE, in motes (spec §8 "CSPR = 10^9 motes").
pub const CSPR: u64 = MOTES_PER_BASE;
/// One whole DEBT, in wad (spec §8 "DEBT_1 = 10^18 wad").
pub const DEBT_1: u128 = WAD;
