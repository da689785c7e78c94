// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::error::ErrorKind;

/// `hkdf_mod_r` test vectors from EIP-2333
#[test]
fn test_hkdf_mod_r_vectors() -> anyhow::Result<()> {
    let vectors = [
        (
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
            // 6083874454709270928345386274498605044986640685124978867557563392430687146096
            "0d7359d57963ab8fbbde1852dcf553fedbc31f464d80ee7d40ae683122b45070",
        ),
        (
            "3141592653589793238462643383279502884197169399375105820974944592",
            // 29757020647961307431480504535336562678282505419141012933316116377660817309383
            "41c9e07822b092a93fd6797396338c3ada4170cc81829fdfce6b5d34bd5e7ec7",
        ),
        (
            "0099FF991111002299DD7744EE3355BBDD8844115566CC55663355668888CC00",
            // 27580842291869792442942448775674722299803720648445448686099262467207037398656
            "3cfa341ab3910a7d00d933d8f7c4fe87c91798a0397421d6b19fd5b815132e80",
        ),
        (
            "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3",
            // 19022158461524446591288038168518313374041767046816487870552872741050760015818
            "2a0e28ffa5fbbe2f8e7aad4ed94f745d6bf755c51182e119bb1694fe61d3afca",
        ),
    ];

    for (i, (ikm, expected)) in vectors.iter().enumerate() {
        let key = generate_key(&hex::decode(ikm)?, &[])?;
        assert_eq!(key.to_hex(), *expected, "mismatch at vector {i}");
    }
    Ok(())
}

#[test]
fn test_short_ikm_rejected() {
    let err = generate_key(&[7u8; KEYGEN_MIN_IKM_LENGTH - 1], &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_key_info_separates_keys() -> anyhow::Result<()> {
    let ikm = [0x42u8; 32];
    let plain = generate_key(&ikm, &[])?;
    let with_info = generate_key(&ikm, b"wallet/0")?;
    assert_ne!(plain, with_info);
    assert_eq!(with_info, generate_key(&ikm, b"wallet/0")?);
    Ok(())
}

#[test]
fn test_generated_key_is_usable() -> anyhow::Result<()> {
    let key = generate_key(&[0x11u8; 48], &[])?;
    let reparsed = PrivateKey::<Bls12381>::from_bytes(key.as_bytes())?;
    assert_eq!(key, reparsed);
    Ok(())
}

#[test]
fn test_default_salt_is_hashed_pre_v4_salt() -> anyhow::Result<()> {
    let ikm = hex::decode("3141592653589793238462643383279502884197169399375105820974944592")?;
    let salt = Sha256::digest(KEYGEN_SALT_PRE_V4);
    assert_eq!(
        generate_key_with_salt(&ikm, &salt, &[])?.to_hex(),
        "41c9e07822b092a93fd6797396338c3ada4170cc81829fdfce6b5d34bd5e7ec7"
    );
    assert_eq!(generate_key_with_salt(&ikm, &salt, &[])?, generate_key(&ikm, &[])?);
    Ok(())
}

#[test]
fn test_pre_v4_salt_vectors() -> anyhow::Result<()> {
    let vectors = [
        (
            "3141592653589793238462643383279502884197169399375105820974944592",
            "4ff5e145590ed7b71e577bb04032396d1619ff41cb4e350053ed2dce8d1efd1c",
        ),
        (
            "0099FF991111002299DD7744EE3355BBDD8844115566CC55663355668888CC00",
            "1ebd704b86732c3f05f30563dee6189838e73998ebc9c209ccff422adee10c4b",
        ),
    ];

    for (ikm, expected) in vectors {
        let ikm = hex::decode(ikm)?;
        let legacy = generate_key_with_salt(&ikm, KEYGEN_SALT_PRE_V4, &[])?;
        assert_eq!(legacy.to_hex(), expected);
        assert_ne!(legacy, generate_key(&ikm, &[])?);
    }
    Ok(())
}

#[test]
fn test_short_ikm_rejected_with_custom_salt() {
    let err = generate_key_with_salt(&[7u8; 16], KEYGEN_SALT_PRE_V4, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
