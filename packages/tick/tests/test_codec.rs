mod common;

use belugaswap_tick::*;
use soroban_sdk::{xdr::ToXdr, Address, Bytes, Env};

fn sample_tick(env: &Env) -> (TickInfo, Address, Address) {
    let (a, b) = common::sorted_denoms(env);
    let tick = TickInfo {
        pool_id: 42,
        tick_index: -887272,
        liquidity_gross: Dec::parse("1234.5").unwrap(),
        liquidity_net: Dec::parse("-1234.5").unwrap(),
        fee_growth: common::fee_growth(env, &[(&a, 3), (&b, 9)]),
    };
    (tick, a, b)
}

/// Hand-built record with the given fee growth entries, in the given order
fn raw_record(env: &Env, entries: &[(&Address, i128)]) -> Bytes {
    let mut out = Bytes::new(env);
    out.push_back(TICK_CODEC_VERSION);
    out.extend_from_array(&1u64.to_be_bytes());
    out.extend_from_array(&5i64.to_be_bytes());
    out.extend_from_array(&10i128.to_be_bytes());
    out.extend_from_array(&10i128.to_be_bytes());
    out.extend_from_array(&(entries.len() as u32).to_be_bytes());
    for (denom, amount) in entries {
        let xdr = (*denom).clone().to_xdr(env);
        out.extend_from_array(&xdr.len().to_be_bytes());
        out.append(&xdr);
        out.extend_from_array(&amount.to_be_bytes());
    }
    out
}

#[test]
fn test_encode_decode_preserves_tick() {
    let env = Env::default();
    let (tick, _, _) = sample_tick(&env);

    let bytes = encode_tick(&env, &tick).unwrap();
    assert_eq!(bytes.get(0), Some(TICK_CODEC_VERSION));
    assert_eq!(decode_tick(&env, &bytes), Ok(tick));
}

#[test]
fn test_hand_built_record_decodes() {
    let env = Env::default();
    let (a, b) = common::sorted_denoms(&env);

    let tick = decode_tick(&env, &raw_record(&env, &[(&a, 1), (&b, 2)])).unwrap();
    assert_eq!(tick.pool_id, 1);
    assert_eq!(tick.tick_index, 5);
    assert_eq!(tick.liquidity_gross, Dec::from_raw(10));
    assert_eq!(tick.fee_growth.amount_of(&b), Dec::from_raw(2));
}

#[test]
fn test_empty_record_is_not_found() {
    let env = Env::default();
    assert_eq!(
        decode_tick_bytes(&env, &Bytes::new(&env)),
        Err(TickError::TickNotFound)
    );
}

#[test]
fn test_unknown_version_is_rejected() {
    let env = Env::default();
    let (tick, _, _) = sample_tick(&env);
    let mut bytes = encode_tick(&env, &tick).unwrap();
    bytes.set(0, TICK_CODEC_VERSION + 1);

    assert_eq!(decode_tick(&env, &bytes), Err(TickError::DecodeError));
}

#[test]
fn test_truncated_record_is_rejected() {
    let env = Env::default();
    let (tick, _, _) = sample_tick(&env);
    let bytes = encode_tick(&env, &tick).unwrap();

    for cut in [1, 9, 40, bytes.len() - 1] {
        assert_eq!(
            decode_tick(&env, &bytes.slice(0..cut)),
            Err(TickError::DecodeError),
            "cut at {}",
            cut
        );
    }
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let env = Env::default();
    let (tick, _, _) = sample_tick(&env);
    let mut bytes = encode_tick(&env, &tick).unwrap();
    bytes.push_back(0);

    assert_eq!(decode_tick(&env, &bytes), Err(TickError::DecodeError));
}

#[test]
fn test_non_canonical_fee_growth_is_rejected() {
    let env = Env::default();
    let (a, b) = common::sorted_denoms(&env);

    // zero and negative amounts are never written
    assert_eq!(decode_tick(&env, &raw_record(&env, &[(&a, 0)])), Err(TickError::DecodeError));
    assert_eq!(decode_tick(&env, &raw_record(&env, &[(&a, -1)])), Err(TickError::DecodeError));
    // denominations are written strictly ascending
    assert_eq!(decode_tick(&env, &raw_record(&env, &[(&b, 1), (&a, 1)])), Err(TickError::DecodeError));
    assert_eq!(decode_tick(&env, &raw_record(&env, &[(&a, 1), (&a, 1)])), Err(TickError::DecodeError));
}

#[test]
fn test_garbage_denomination_is_rejected() {
    let env = Env::default();
    let mut bytes = Bytes::new(&env);
    bytes.push_back(TICK_CODEC_VERSION);
    bytes.extend_from_array(&[0u8; 48]);
    bytes.extend_from_array(&1u32.to_be_bytes());
    bytes.extend_from_array(&6u32.to_be_bytes());
    bytes.extend_from_array(&[0xff; 6]);
    bytes.extend_from_array(&1i128.to_be_bytes());

    assert_eq!(decode_tick(&env, &bytes), Err(TickError::DecodeError));
}

/// Record whose only denomination is `denom_xdr`
fn record_with_denom(env: &Env, denom_xdr: &[u8]) -> Bytes {
    let mut bytes = Bytes::new(env);
    bytes.push_back(TICK_CODEC_VERSION);
    bytes.extend_from_array(&[0u8; 48]);
    bytes.extend_from_array(&1u32.to_be_bytes());
    bytes.extend_from_array(&(denom_xdr.len() as u32).to_be_bytes());
    bytes.extend_from_slice(denom_xdr);
    bytes.extend_from_array(&1i128.to_be_bytes());
    bytes
}

#[test]
fn test_malformed_address_payload_is_rejected() {
    let env = Env::default();

    // address tag followed by garbage
    let short = record_with_denom(&env, &[0, 0, 0, 18, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(decode_tick(&env, &short), Err(TickError::DecodeError));

    // contract-sized payload with an unknown address type
    let mut bad_type = [0u8; 40];
    bad_type[3] = 18;
    bad_type[7] = 7;
    assert_eq!(decode_tick(&env, &record_with_denom(&env, &bad_type)), Err(TickError::DecodeError));

    // account-sized payload with an unknown key type
    let mut bad_key = [0u8; 44];
    bad_key[3] = 18;
    bad_key[11] = 3;
    assert_eq!(decode_tick(&env, &record_with_denom(&env, &bad_key)), Err(TickError::DecodeError));
}

#[test]
fn test_well_formed_contract_address_decodes() {
    let env = Env::default();
    let mut contract = [0x11u8; 40];
    contract[..8].copy_from_slice(&[0, 0, 0, 18, 0, 0, 0, 1]);

    let tick = decode_tick(&env, &record_with_denom(&env, &contract)).unwrap();
    assert_eq!(tick.fee_growth.len(), 1);
}

#[test]
fn test_encode_refuses_non_canonical_fee_growth() {
    let env = Env::default();
    let (mut tick, a, _) = sample_tick(&env);
    tick.fee_growth.amounts.set(a, Dec::from_int(-2));

    assert_eq!(encode_tick(&env, &tick), Err(TickError::InvalidFeeGrowth));
}
