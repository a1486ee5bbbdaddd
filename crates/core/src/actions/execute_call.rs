use crate::bindings::account_system::AccountSystem7702::{self, Action};
use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;
use eyre::{Result, WrapErr, eyre};

// Encodes `execute(Action[] actions, bytes[] signatures)`. The two lists are
// parallel: signatures[i] authorizes actions[i].
pub fn pack_execute(actions: Vec<Action>, signatures: Vec<Bytes>) -> Result<Bytes> {
    if actions.len() != signatures.len() {
        return Err(eyre!(
            "failed to pack input: {} actions but {} signatures",
            actions.len(),
            signatures.len()
        ));
    }
    let calldata = AccountSystem7702::executeCall::new((actions, signatures)).abi_encode();
    Ok(Bytes::from(calldata))
}

pub fn unpack_execute(calldata: &[u8]) -> Result<(Vec<Action>, Vec<Bytes>)> {
    let call = AccountSystem7702::executeCall::abi_decode(calldata, true)
        .wrap_err("calldata is not an execute call")?;
    Ok((call.actions, call.signatures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::accept_action::accept_call_data;
    use alloy::primitives::{Address, U256, address, keccak256};

    fn test_action() -> Action {
        Action {
            target: address!("0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d"),
            data: accept_call_data(),
            value: U256::from(1000),
            nonce: U256::from(6),
            expiration: U256::ZERO,
            feeToken: Address::ZERO,
            feeValue: U256::from(250),
            isBasisPoints: false,
        }
    }

    #[test]
    fn test_execute_round_trip() {
        let signature = Bytes::from(vec![0xab; 65]);
        let calldata = pack_execute(vec![test_action()], vec![signature.clone()]).unwrap();

        let selector = &keccak256(
            "execute((address,bytes,uint256,uint256,uint256,address,uint256,bool)[],bytes[])",
        )[..4];
        assert_eq!(&calldata[..4], selector);

        let (actions, signatures) = unpack_execute(&calldata).unwrap();
        assert_eq!(actions, vec![test_action()]);
        assert_eq!(signatures, vec![signature]);
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = pack_execute(vec![test_action()], vec![]).unwrap_err();
        assert!(err.to_string().contains("failed to pack input"));
    }

    #[test]
    fn test_unpack_rejects_foreign_calldata() {
        assert!(unpack_execute(&accept_call_data()).is_err());
        assert!(unpack_execute(&[]).is_err());
    }
}
