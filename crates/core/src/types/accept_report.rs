use crate::bindings::account_system::AccountSystem7702::Action;
use alloy::primitives::Bytes;
use std::fmt;

#[derive(Debug)]
pub struct AcceptReport {
    pub signature: Bytes,
    pub action: Action,
    pub calldata: Bytes,
}

impl fmt::Display for AcceptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "signedAction: {}", hex::encode(&self.signature))?;
        writeln!(f, "action: {:?}", self.action)?;
        write!(f, "calldata: {}", hex::encode(&self.calldata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256, bytes};

    #[test]
    fn test_report_layout() {
        let report = AcceptReport {
            signature: bytes!("0102"),
            action: Action {
                target: Address::ZERO,
                data: bytes!("2852b71c"),
                value: U256::from(1000),
                nonce: U256::from(6),
                expiration: U256::ZERO,
                feeToken: Address::ZERO,
                feeValue: U256::from(250),
                isBasisPoints: false,
            },
            calldata: bytes!("abcdef"),
        };
        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "signedAction: 0102");
        assert!(lines[1].starts_with("action: Action {"));
        assert!(lines[1].contains("isBasisPoints: false"));
        assert_eq!(lines[2], "calldata: abcdef");
    }
}
