// Wide limb helpers shared by the fixed-point ops and the string codecs.

/// Exact 128x128 -> 256 multiply, as (high, low).
///
/// Schoolbook on 64-bit halves. The cross products p1 and p2 overlap the
/// middle of the result; the carry out of bit 128 is recovered from their
/// low halves together with the high half of p0.
#[inline]
pub(crate) fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    let a0 = a as u64 as u128;
    let a1 = a >> 64;
    let b0 = b as u64 as u128;
    let b1 = b >> 64;

    let p0 = a0 * b0;
    let p1 = a0 * b1;
    let p2 = a1 * b0;
    let p3 = a1 * b1;

    let carry = ((p1 as u64 as u128) + (p2 as u64 as u128) + (p0 >> 64)) >> 64;

    let low = p0.wrapping_add(p1.wrapping_add(p2) << 64);
    let high = p3 + (p1 >> 64) + (p2 >> 64) + carry;

    (high, low)
}

/// One quotient digit of the three-limb window (u2 u1 u0) over the
/// normalized divisor (d1 d0).
///
/// The digit is estimated from the top two limbs over d1 and refined
/// downward against the third limb; once the running remainder no longer
/// fits a limb the test cannot fail and refinement stops. The true
/// remainder fits two limbs, so subtracting the digit's multiple modulo
/// 2^128 is exact. Returns (digit, remainder high, remainder low).
#[inline]
fn quot_digit(u2: u64, u1: u64, u0: u64, d1: u64, d0: u64) -> (u64, u64, u64) {
    let mut q;
    let mut r;
    let mut fits;
    if u2 < d1 {
        let top = ((u2 as u128) << 64) | u1 as u128;
        q = (top / d1 as u128) as u64;
        r = (top % d1 as u128) as u64;
        fits = true;
    } else {
        q = u64::MAX;
        let (sum, overflow) = u1.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }

    while fits && q as u128 * d0 as u128 > ((r as u128) << 64) | u0 as u128 {
        q -= 1;
        let (sum, overflow) = r.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }

    let rem = (((u1 as u128) << 64) | u0 as u128)
        .wrapping_sub((q as u128 * d0 as u128).wrapping_add((q as u128 * d1 as u128) << 64));

    (q, (rem >> 64) as u64, rem as u64)
}

/// u256 / u128 -> (quotient, remainder), schoolbook with two base-2^64
/// digits. Requires divisor != 0 and high < divisor, so the quotient fits
/// a u128.
#[inline]
pub(crate) fn div_wide(high: u128, low: u128, divisor: u128) -> (u128, u128) {
    debug_assert!(divisor != 0, "division by zero");
    debug_assert!(high < divisor, "quotient overflow");

    if high == 0 {
        return (low / divisor, low % divisor);
    }

    // normalize so the divisor's top bit is set; high < divisor keeps the
    // scaled numerator within 256 bits
    let shift = divisor.leading_zeros();
    let d = divisor << shift;
    let (n_hi, n_lo) = if shift == 0 {
        (high, low)
    } else {
        ((high << shift) | (low >> (128 - shift)), low << shift)
    };

    let d1 = (d >> 64) as u64;
    let d0 = d as u64;
    let n3 = (n_hi >> 64) as u64;
    let n2 = n_hi as u64;
    let n1 = (n_lo >> 64) as u64;
    let n0 = n_lo as u64;

    debug_assert!(n3 <= d1);
    let (q1, r2, r1) = quot_digit(n3, n2, n1, d1, d0);
    let (q0, r1, r0) = quot_digit(r2, r1, n0, d1, d0);

    (
        ((q1 as u128) << 64) | q0 as u128,
        (((r1 as u128) << 64) | r0 as u128) >> shift,
    )
}
