use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use eyre::{Result, eyre};
use log::{debug, warn};
use std::path::Path;

pub fn load_signer(keyfile: &Path, password: &str) -> Result<PrivateKeySigner> {
    if !keyfile.is_file() {
        return Err(eyre!("keystore file {} not found", keyfile.display()));
    }
    let signer = PrivateKeySigner::decrypt_keystore(keyfile, password)
        .map_err(|e| eyre!("could not decrypt {}: {}", keyfile.display(), e))?;
    debug!("Loaded key for {} from {}", signer.address(), keyfile.display());
    Ok(signer)
}

// Signing for an account the key does not control yields an action the
// account system will reject, but that is for the chain to decide.
pub fn check_account(signer: &PrivateKeySigner, account: Address) -> bool {
    let matches = signer.address() == account;
    if !matches {
        warn!(
            "Key address {} does not match --account {}",
            signer.address(),
            account
        );
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex};

    const TEST_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn write_keystore(dir: &Path, password: &str) -> std::path::PathBuf {
        let mut rng = rand::thread_rng();
        let key = hex::decode(TEST_KEY).unwrap();
        PrivateKeySigner::encrypt_keystore(dir, &mut rng, key, password, Some("key.json")).unwrap();
        dir.join("key.json")
    }

    #[test]
    fn test_load_signer() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_keystore(dir.path(), "hunter2");

        let signer = load_signer(&path, "hunter2").unwrap();
        assert_eq!(
            signer.address(),
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
        assert!(check_account(
            &signer,
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        ));
        assert!(!check_account(&signer, Address::ZERO));
    }

    #[test]
    fn test_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_keystore(dir.path(), "hunter2");

        let err = load_signer(&path, "hunter3").unwrap_err().to_string();
        assert!(err.contains("could not decrypt"), "unexpected error: {}", err);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_signer(&dir.path().join("nope.json"), "")
            .unwrap_err()
            .to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "{\"version\": 3}").unwrap();
        assert!(load_signer(&path, "").is_err());
    }
}
