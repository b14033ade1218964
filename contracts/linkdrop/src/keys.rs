//! Public-key text decoding.
//!
//! Accepts `ed25519:<base58>` or bare base58 and always yields the same
//! 32-byte canonical key, which is what the escrow ledger is keyed by.

use linkdrop_errors::LinkdropError;
use soroban_sdk::{xdr::ToXdr, BytesN, Env, String};

/// The only algorithm prefix accepted.
pub const ED25519_ALGORITHM: &[u8] = b"ed25519";

/// Curve tag carried by the 33-byte tagged form.
pub const ED25519_CURVE_TAG: u8 = 0;

/// Valid lengths of a bare base58 ed25519 key. `ed25519:` adds 8.
pub const BARE_KEY_LENGTHS: [usize; 2] = [43, 44];

const MAX_KEY_TEXT_LEN: usize = 64;

/// Leading bytes searched for an algorithm prefix on overlong text.
const PREFIX_SCAN_LEN: usize = 16;

/// `ScVal::String` XDR: 4-byte discriminant, 4-byte length, then the bytes.
const XDR_STRING_HEADER_LEN: u32 = 8;

/// Decode a Soroban string key into its canonical bytes.
pub fn decode(e: &Env, text: &String) -> Result<BytesN<32>, LinkdropError> {
    let len = text.len() as usize;
    if len == 0 {
        return Err(LinkdropError::InvalidKeyEncoding);
    }
    if len > MAX_KEY_TEXT_LEN {
        return Err(reject_overlong(e, text));
    }
    let mut buf = [0u8; MAX_KEY_TEXT_LEN];
    text.copy_into_slice(&mut buf[..len]);
    let raw = decode_text(&buf[..len])?;
    Ok(BytesN::from_array(e, &raw))
}

/// Text too long for any ed25519 form. Keys of other algorithms are longer,
/// so the prefix decides which error is reported.
fn reject_overlong(e: &Env, text: &String) -> LinkdropError {
    let mut head = [0u8; PREFIX_SCAN_LEN];
    text.clone()
        .to_xdr(e)
        .slice(XDR_STRING_HEADER_LEN..XDR_STRING_HEADER_LEN + PREFIX_SCAN_LEN as u32)
        .copy_into_slice(&mut head);
    match head.iter().position(|b| *b == b':') {
        Some(split) if &head[..split] != ED25519_ALGORITHM => {
            LinkdropError::UnsupportedKeyAlgorithm
        }
        _ => LinkdropError::InvalidKeyEncoding,
    }
}

/// Decode key text into the raw 32-byte ed25519 key.
pub fn decode_text(text: &[u8]) -> Result<[u8; 32], LinkdropError> {
    match text.iter().position(|b| *b == b':') {
        Some(split) => {
            let (algorithm, body) = (&text[..split], &text[split + 1..]);
            if algorithm != ED25519_ALGORITHM {
                return Err(LinkdropError::UnsupportedKeyAlgorithm);
            }
            decode_body(body)
        }
        None => decode_body(text),
    }
}

fn decode_body(body: &[u8]) -> Result<[u8; 32], LinkdropError> {
    if !BARE_KEY_LENGTHS.contains(&body.len()) {
        return Err(LinkdropError::InvalidKeyEncoding);
    }
    let mut out = [0u8; 40];
    let written = bs58::decode(body)
        .onto(&mut out)
        .map_err(|_| LinkdropError::InvalidKeyEncoding)?;

    let key = match written {
        32 => &out[..32],
        33 if out[0] == ED25519_CURVE_TAG => &out[1..33],
        _ => return Err(LinkdropError::InvalidKeyEncoding),
    };
    let mut canonical = [0u8; 32];
    canonical.copy_from_slice(key);
    Ok(canonical)
}
