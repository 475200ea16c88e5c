use core_logic::WalletGenerator;
use ethers::signers::Signer;
use ethers::utils::to_checksum;

#[test]
fn generated_address_has_checksummed_format() {
    let identity = WalletGenerator::generate();

    assert!(identity.address.starts_with("0x"));
    assert_eq!(identity.address.len(), 42);
    assert!(identity.private_key.starts_with("0x"));
    assert_eq!(identity.private_key.len(), 66);
}

#[test]
fn rederiving_address_from_private_key_is_deterministic() {
    let identity = WalletGenerator::generate();
    let rederived = WalletGenerator::from_private_key(&identity.private_key).unwrap();

    assert_eq!(rederived.address, identity.address);
    assert_eq!(rederived.private_key, identity.private_key);
}

#[test]
fn prefix_is_optional_when_importing_a_key() {
    let identity = WalletGenerator::generate();
    let bare = identity.private_key.trim_start_matches("0x");
    let rederived = WalletGenerator::from_private_key(bare).unwrap();

    assert_eq!(rederived.address, identity.address);
}

#[test]
fn consecutive_identities_are_distinct() {
    let a = WalletGenerator::generate();
    let b = WalletGenerator::generate();

    assert_ne!(a.address, b.address);
    assert_ne!(a.private_key, b.private_key);
}

#[test]
fn signer_address_matches_identity_address() {
    let identity = WalletGenerator::generate();
    let wallet = identity.signer().unwrap();

    assert_eq!(to_checksum(&wallet.address(), None), identity.address);
}

#[test]
fn short_keys_are_rejected() {
    assert!(WalletGenerator::from_private_key("0xdeadbeef").is_err());
}

#[test]
fn debug_output_redacts_the_private_key() {
    let identity = WalletGenerator::generate();
    let debug = format!("{:?}", identity);

    assert!(debug.contains(&identity.address));
    assert!(!debug.contains(identity.private_key.trim_start_matches("0x")));
    assert!(debug.contains("REDACTED"));
}
