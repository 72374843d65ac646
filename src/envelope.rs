use std::str::FromStr;

use serde_with::{serde_as, DisplayFromStr};

use crate::address::{encode, Address};
use crate::utils::constants::{
    DEFAULT_GAS_PRICE, DELEGATE_GAS_LIMIT, STAKE_GAS_LIMIT, TRANSFER_GAS_LIMIT,
};
use crate::{SdkError, SdkResult};

/// Transaction payload, tagged by its variant name on the wire
/// (`{"Transfer": {...}}`, `{"Stake": {...}}`, ...).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxPayload {
    /// Move `amount` to `to`
    Transfer {
        to: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: u128,
    },
    /// Bond `amount` to the sender's own stake
    Stake {
        #[serde_as(as = "DisplayFromStr")]
        amount: u128,
    },
    /// Release `amount` from the sender's own stake
    Unstake {
        #[serde_as(as = "DisplayFromStr")]
        amount: u128,
    },
    /// Delegate `amount` to `validator`
    Delegate {
        validator: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: u128,
    },
    /// Withdraw `amount` previously delegated to `validator`
    Undelegate {
        validator: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: u128,
    },
}

/// Transaction envelope as accepted by the node's `send_raw_tx` route.
///
/// Builders always leave `nonce` at zero and `signature` empty; both are
/// expected to be filled in by the caller or an external signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub chain_id: String,
    pub nonce: u64,
    pub gas_limit: u64,
    pub gas_price: String,
    pub payload: TxPayload,
    pub signature: String,
}

impl Envelope {
    /// Creates an unsigned envelope with a zero nonce and the default gas price.
    pub fn new(chain_id: impl ToString, gas_limit: u64, payload: TxPayload) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            nonce: 0,
            gas_limit,
            gas_price: DEFAULT_GAS_PRICE.to_string(),
            payload,
            signature: String::new(),
        }
    }

    pub fn with_gas_price(mut self, gas_price: impl ToString) -> Self {
        self.gas_price = gas_price.to_string();
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_signature(mut self, signature: impl ToString) -> Self {
        self.signature = signature.to_string();
        self
    }

    /// Encode the envelope as a JSON string
    pub fn to_json(&self) -> SdkResult<String> {
        serde_json::to_string(self).map_err(SdkError::from)
    }
}

impl FromStr for Envelope {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(SdkError::from)
    }
}

/// Builds a transfer of `amount` to the hex-encoded `recipient`.
pub fn build_transfer(
    chain_id: impl ToString,
    recipient: &str,
    amount: u128,
) -> SdkResult<Envelope> {
    let to = encode(recipient)?;
    Ok(Envelope::new(
        chain_id,
        TRANSFER_GAS_LIMIT,
        TxPayload::Transfer { to, amount },
    ))
}

pub fn build_stake(chain_id: impl ToString, amount: u128) -> Envelope {
    Envelope::new(chain_id, STAKE_GAS_LIMIT, TxPayload::Stake { amount })
}

pub fn build_unstake(chain_id: impl ToString, amount: u128) -> Envelope {
    Envelope::new(chain_id, STAKE_GAS_LIMIT, TxPayload::Unstake { amount })
}

/// Builds a delegation of `amount` to the hex-encoded `validator`.
pub fn build_delegate(
    chain_id: impl ToString,
    validator: &str,
    amount: u128,
) -> SdkResult<Envelope> {
    let validator = encode(validator)?;
    Ok(Envelope::new(
        chain_id,
        DELEGATE_GAS_LIMIT,
        TxPayload::Delegate { validator, amount },
    ))
}

pub fn build_undelegate(
    chain_id: impl ToString,
    validator: &str,
    amount: u128,
) -> SdkResult<Envelope> {
    let validator = encode(validator)?;
    Ok(Envelope::new(
        chain_id,
        DELEGATE_GAS_LIMIT,
        TxPayload::Undelegate { validator, amount },
    ))
}
