/// Gas limit of a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;
/// Gas limit of a stake or unstake.
pub const STAKE_GAS_LIMIT: u64 = 50_000;
/// Gas limit of a delegate or undelegate.
pub const DELEGATE_GAS_LIMIT: u64 = 60_000;
/// Gas price used by every builder unless overridden.
pub const DEFAULT_GAS_PRICE: &str = "1";
/// Node route accepting raw transaction envelopes.
pub const SEND_RAW_TX_PATH: &str = "send_raw_tx";
/// Width of an encoded address in bytes.
pub const ADDRESS_LEN: usize = 32;
