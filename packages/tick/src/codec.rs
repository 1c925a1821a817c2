// Tick Record Codec
//
// Layout (big-endian):
//   version u8 | pool_id u64 | tick_index i64 | gross i128 | net i128
//   | count u32 | count x (denom_len u32 | denom address XDR | amount i128)
//
// Decoding never traps on bad input: every malformed record is a DecodeError.

use belugaswap_math::Dec;
use soroban_sdk::{
    log,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, Env,
};

use crate::error::TickError;
use crate::types::{FeeGrowth, TickInfo};

/// Current record schema version
pub const TICK_CODEC_VERSION: u8 = 1;

/// XDR discriminant of an address value (SCV_ADDRESS)
const SCV_ADDRESS_TAG: [u8; 4] = [0, 0, 0, 18];
/// SC_ADDRESS_TYPE_ACCOUNT followed by PUBLIC_KEY_TYPE_ED25519
const ACCOUNT_HEADER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];
/// SC_ADDRESS_TYPE_CONTRACT
const CONTRACT_HEADER: [u8; 4] = [0, 0, 0, 1];
/// tag | account header | ed25519 key
const ACCOUNT_XDR_LEN: u32 = 4 + 8 + 32;
/// tag | contract header | contract hash
const CONTRACT_XDR_LEN: u32 = 4 + 4 + 32;

/// Encode a tick record. Fee growth must be canonical (positive entries only).
pub fn encode_tick(env: &Env, tick: &TickInfo) -> Result<Bytes, TickError> {
    tick.fee_growth.validate()?;

    let mut out = Bytes::new(env);
    out.push_back(TICK_CODEC_VERSION);
    out.extend_from_array(&tick.pool_id.to_be_bytes());
    out.extend_from_array(&tick.tick_index.to_be_bytes());
    out.extend_from_array(&tick.liquidity_gross.raw().to_be_bytes());
    out.extend_from_array(&tick.liquidity_net.raw().to_be_bytes());

    out.extend_from_array(&tick.fee_growth.len().to_be_bytes());
    for (denom, amount) in tick.fee_growth.amounts.iter() {
        let denom_xdr = denom.to_xdr(env);
        out.extend_from_array(&denom_xdr.len().to_be_bytes());
        out.append(&denom_xdr);
        out.extend_from_array(&amount.raw().to_be_bytes());
    }
    Ok(out)
}

pub fn decode_tick(env: &Env, bytes: &Bytes) -> Result<TickInfo, TickError> {
    read_tick(env, bytes).map_err(|err| {
        log!(env, "tick record failed to decode", bytes.len());
        err
    })
}

/// Decode a raw record where an empty value means "no record"
pub fn decode_tick_bytes(env: &Env, bytes: &Bytes) -> Result<TickInfo, TickError> {
    if bytes.is_empty() {
        return Err(TickError::TickNotFound);
    }
    decode_tick(env, bytes)
}

fn read_tick(env: &Env, bytes: &Bytes) -> Result<TickInfo, TickError> {
    let mut reader = Reader::new(bytes);

    if reader.u8()? != TICK_CODEC_VERSION {
        return Err(TickError::DecodeError);
    }
    let pool_id = u64::from_be_bytes(reader.array()?);
    let tick_index = i64::from_be_bytes(reader.array()?);
    let liquidity_gross = Dec::from_raw(i128::from_be_bytes(reader.array()?));
    let liquidity_net = Dec::from_raw(i128::from_be_bytes(reader.array()?));

    let count = u32::from_be_bytes(reader.array()?);
    let mut fee_growth = FeeGrowth::new(env);
    let mut previous: Option<Address> = None;
    for _ in 0..count {
        let denom_len = u32::from_be_bytes(reader.array()?);
        let denom = read_denom(env, &reader.take(denom_len)?)?;
        let amount = Dec::from_raw(i128::from_be_bytes(reader.array()?));

        // Encoder writes strictly ascending denominations with non-zero amounts
        if !amount.is_positive() {
            return Err(TickError::DecodeError);
        }
        if let Some(prev) = &previous {
            if denom <= *prev {
                return Err(TickError::DecodeError);
            }
        }
        fee_growth.amounts.set(denom.clone(), amount);
        previous = Some(denom);
    }

    if reader.remaining() != 0 {
        return Err(TickError::DecodeError);
    }

    Ok(TickInfo {
        pool_id,
        tick_index,
        liquidity_gross,
        liquidity_net,
        fee_growth,
    })
}

fn read_denom(env: &Env, xdr: &Bytes) -> Result<Address, TickError> {
    if !is_address_xdr(xdr) {
        return Err(TickError::DecodeError);
    }
    Address::from_xdr(env, xdr).map_err(|_| TickError::DecodeError)
}

/// Layout check ahead of `from_xdr`, which traps on malformed input
fn is_address_xdr(xdr: &Bytes) -> bool {
    if xdr.len() < CONTRACT_XDR_LEN || !has_header(xdr, 0, &SCV_ADDRESS_TAG) {
        return false;
    }
    match xdr.len() {
        ACCOUNT_XDR_LEN => has_header(xdr, 4, &ACCOUNT_HEADER),
        CONTRACT_XDR_LEN => has_header(xdr, 4, &CONTRACT_HEADER),
        _ => false,
    }
}

fn has_header<const N: usize>(xdr: &Bytes, at: u32, header: &[u8; N]) -> bool {
    let mut buf = [0u8; N];
    xdr.slice(at..at + N as u32).copy_into_slice(&mut buf);
    buf == *header
}

struct Reader<'a> {
    bytes: &'a Bytes,
    pos: u32,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a Bytes) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> u32 {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: u32) -> Result<Bytes, TickError> {
        if len > self.remaining() {
            return Err(TickError::DecodeError);
        }
        let chunk = self.bytes.slice(self.pos..self.pos + len);
        self.pos += len;
        Ok(chunk)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], TickError> {
        let chunk = self.take(N as u32)?;
        let mut buf = [0u8; N];
        chunk.copy_into_slice(&mut buf);
        Ok(buf)
    }

    fn u8(&mut self) -> Result<u8, TickError> {
        let [byte] = self.array::<1>()?;
        Ok(byte)
    }
}
