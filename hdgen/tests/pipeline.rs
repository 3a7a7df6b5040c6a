//! End-to-end tests: mnemonic to encoded wallets.

use hdgen::{ChainKind, CurveKind, DerivationPath, Deriver, Keypair, Mnemonic, WalletRegistry, hd};
use hex_literal::hex;

const FIRST_SOL_ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";
const SECOND_SOL_ADDRESS: &str = "Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb";

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn solana_wallets_match_known_addresses() {
    let seed = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("");
    let deriver = Deriver::new(&seed);

    let first = deriver.derive(ChainKind::Sol, 0).unwrap();
    assert_eq!(first.path().to_string(), "m/44'/501'/0'/0'");
    assert_eq!(first.public_key(), FIRST_SOL_ADDRESS);

    let second = deriver.derive(ChainKind::Sol, 1).unwrap();
    assert_eq!(second.public_key(), SECOND_SOL_ADDRESS);

    // The 64-byte secret carries the public key in its second half.
    let secret = bs58::decode(first.secret_key()).into_vec().unwrap();
    let embedded = bs58::encode(&secret[32..]).into_string();
    assert_eq!(embedded, first.public_key());
}

#[test]
fn ethereum_wallet_matches_reference_address() {
    let seed = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("");
    let deriver = Deriver::new(&seed);

    let (path, keypair) = deriver.derive_keypair(ChainKind::Eth, 0).unwrap();
    assert_eq!(path.to_string(), "m/44'/60'/0'/0'");

    let public = keypair.public_key_bytes();
    let reference = alloy_primitives::Address::from_raw_public_key(&public[1..]);

    let wallet = deriver.derive(ChainKind::Eth, 0).unwrap();
    let reference_hex = hex::encode(reference.as_slice());
    assert_eq!(wallet.public_key(), format!("0x{reference_hex}"));

    let secret_hex = keypair.secret_hex();
    assert_eq!(wallet.secret_key(), format!("0x{}", secret_hex.as_str()));
}

#[test]
fn slip10_vector_end_to_end() {
    let seed = hex!("000102030405060708090a0b0c0d0e0f");
    let path: DerivationPath = "m/0'".parse().unwrap();

    let material = hd::derive(&seed, &path, CurveKind::Ed25519).unwrap();
    assert_eq!(
        material.key(),
        &hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
    );

    let keypair = Keypair::from_key_material(&material, CurveKind::Ed25519).unwrap();
    assert_eq!(
        keypair.public_key_hex(),
        "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
    );
    assert_eq!(
        keypair.public_key_encoded(),
        "ATcCGRoY87cSJESCXbHXEX6CDWQxepAViUvVnNsELhRu"
    );
}

#[test]
fn reimport_reproduces_session() {
    let mnemonic = Mnemonic::generate(256).unwrap();
    assert_eq!(mnemonic.word_count(), 24);

    let build = |phrase: &str| {
        let seed = Mnemonic::parse(phrase).unwrap().to_seed("pass");
        let deriver = Deriver::new(&seed);
        let mut registry = WalletRegistry::new();
        for chain in [ChainKind::Sol, ChainKind::Eth, ChainKind::Sol] {
            registry.generate(&deriver, chain).unwrap();
        }
        registry
            .iter()
            .map(|wallet| (wallet.path().to_string(), wallet.public_key().to_owned()))
            .collect::<Vec<_>>()
    };

    let first = build(mnemonic.phrase().as_str());
    let second = build(mnemonic.phrase().as_str());
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn abbreviated_phrase_imports_same_wallets() {
    let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
    let expanded = hdgen::mnemonic::expand(abbreviated).unwrap();
    assert_eq!(expanded.as_str(), TEST_MNEMONIC);

    let seed = Mnemonic::parse(&expanded).unwrap().to_seed("");
    let wallet = Deriver::new(&seed).derive(ChainKind::Sol, 0).unwrap();
    assert_eq!(wallet.public_key(), FIRST_SOL_ADDRESS);
}
