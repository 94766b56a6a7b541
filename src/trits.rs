//! Octet <-> trit conversion.
//!
//! An octet below 3^5 = 243 is read as a five-digit base-3 number, least
//! significant digit first. Octets 243..=255 have no trit encoding; MGF-TP-1
//! rejects them instead of reducing, which keeps every trit uniform.
//!
//! Ref: https://github.com/NTRUOpenSourceProject/ntru-crypto/blob/master/reference-code/C/Encrypt/src/ntru_crypto_ntru_convert.c

/// Trits carried by one accepted octet.
pub const TRITS_PER_OCTET: usize = 5;

/// First octet value without a trit encoding (3^5).
pub const OCTET_REJECT_THRESHOLD: u8 = 243;

/// Decodes `octet` into 5 trits, least significant first.
///
/// Returns `None` for octets >= 243.
#[inline]
#[must_use]
pub const fn octet_to_trits(octet: u8) -> Option<[u8; TRITS_PER_OCTET]> {
    if octet >= OCTET_REJECT_THRESHOLD {
        return None;
    }

    let mut trits = [0u8; TRITS_PER_OCTET];
    let mut value = octet;
    let mut i = 0;
    while i < TRITS_PER_OCTET {
        trits[i] = value % 3;
        value /= 3;
        i += 1;
    }
    Some(trits)
}

/// Encodes 5 trits (least significant first) into an octet in 0..=242.
///
/// Returns `None` if any trit is greater than 2.
#[inline]
#[must_use]
pub const fn trits_to_octet(trits: &[u8; TRITS_PER_OCTET]) -> Option<u8> {
    let mut octet = 0u8;
    let mut i = TRITS_PER_OCTET;
    while i > 0 {
        i -= 1;
        if trits[i] > 2 {
            return None;
        }
        octet = octet * 3 + trits[i];
    }
    Some(octet)
}
