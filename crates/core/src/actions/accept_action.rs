use crate::bindings::account_system::AccountSystem7702::Action;
use crate::bindings::degen_gambit::DegenGambit;
use crate::types::accept_flags::AcceptParams;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

/// Calldata for `DegenGambit.accept()`. Takes no arguments, so this is just
/// the selector and never changes for a given contract interface.
pub fn accept_call_data() -> Bytes {
    Bytes::from(DegenGambit::acceptCall::new(()).abi_encode())
}

pub struct AcceptAction {
    game: Address,
    value: U256,
    nonce: U256,
    fee_token: Address,
    fee_value: U256,
    is_basis_points: bool,
}

impl AcceptAction {
    pub fn new(params: &AcceptParams, nonce: U256) -> Self {
        Self {
            game: params.target,
            value: params.value,
            nonce,
            fee_token: params.fee_token,
            fee_value: params.fee_value,
            is_basis_points: params.is_basis_points,
        }
    }

    pub fn build(&self) -> Action {
        Action {
            target: self.game,
            data: accept_call_data(),
            value: self.value,
            nonce: self.nonce,
            // Never expires.
            expiration: U256::ZERO,
            feeToken: self.fee_token,
            feeValue: self.fee_value,
            isBasisPoints: self.is_basis_points,
        }
    }

    pub fn describe(&self) -> Value {
        json!({
            "action": "Accept",
            "game": self.game.to_string(),
            "value": self.value,
            "nonce": self.nonce,
            "fee_token": self.fee_token.to_string(),
            "fee_value": self.fee_value,
            "is_basis_points": self.is_basis_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::accept_flags::AcceptFlags;
    use alloy::primitives::{address, keccak256};

    #[test]
    fn test_accept_call_data_is_selector() {
        let data = accept_call_data();
        assert_eq!(data.len(), 4);
        assert_eq!(&data[..], &keccak256("accept()")[..4]);
        assert_eq!(&data[..], DegenGambit::acceptCall::SELECTOR.as_slice());
        assert_eq!(hex::encode(&data), hex::encode(accept_call_data()));
    }

    #[test]
    fn test_build_action() {
        let params = AcceptFlags {
            keyfile: "key.json".to_string(),
            rpc: "http://127.0.0.1:8545".to_string(),
            target: "0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d".to_string(),
            account: "0x90F79bf6EB2c4f870365E785982E1f101E93b906".to_string(),
            value: "1000".to_string(),
            fee_value: "250".to_string(),
            is_basis_points: true,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let action = AcceptAction::new(&params, U256::from(6)).build();
        assert_eq!(
            action.target,
            address!("0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d")
        );
        assert_eq!(action.data, accept_call_data());
        assert_eq!(action.value, U256::from(1000));
        assert_eq!(action.nonce, U256::from(6));
        assert_eq!(action.expiration, U256::ZERO);
        assert_eq!(action.feeToken, Address::ZERO);
        assert_eq!(action.feeValue, U256::from(250));
        assert!(action.isBasisPoints);
    }

    #[test]
    fn test_describe() {
        let params = AcceptFlags {
            keyfile: "key.json".to_string(),
            rpc: "http://127.0.0.1:8545".to_string(),
            target: "0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d".to_string(),
            account: "0x90F79bf6EB2c4f870365E785982E1f101E93b906".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let description = AcceptAction::new(&params, U256::from(3)).describe();
        assert_eq!(description["action"], "Accept");
        assert_eq!(
            description["game"],
            "0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d"
        );
        assert_eq!(description["is_basis_points"], false);
    }
}
