use super::Fix256;
use crate::wide::{div_wide, mul_wide};

impl Fix256 {
    /// Adds two values, wrapping modulo 2^256.
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let lo = self.lo.wrapping_add(other.lo);
        let carry = (lo < self.lo) as u128;
        Self {
            lo,
            hi: self.hi.wrapping_add(other.hi).wrapping_add(carry),
        }
    }

    /// Subtracts `other` from `self`, wrapping modulo 2^256.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        let lo = self.lo.wrapping_sub(other.lo);
        let borrow = (lo > self.lo) as u128;
        Self {
            lo,
            hi: self.hi.wrapping_sub(other.hi).wrapping_sub(borrow),
        }
    }

    /// Two's-complement negation, wrapping modulo 2^256 (`MIN.neg() == MIN`).
    #[inline(always)]
    pub fn neg(&self) -> Self {
        if self.lo != 0 {
            Self {
                lo: self.lo.wrapping_neg(),
                hi: !self.hi,
            }
        } else {
            Self {
                lo: 0,
                hi: self.hi.wrapping_neg(),
            }
        }
    }

    /// Multiplies two values.
    ///
    /// The 512-bit raw product is reduced to Q128.128 by discarding the low
    /// 128 bits, rounding half up on the discarded half-ULP. The result wraps
    /// modulo 2^256 when it falls outside the representable range.
    #[inline(always)]
    pub fn mul(&self, other: &Self) -> Self {
        let mut sign = false;

        let mut a = *self;
        if a.is_negative() {
            a = a.neg();
            sign = !sign;
        }
        let mut b = *other;
        if b.is_negative() {
            b = b.neg();
            sign = !sign;
        }

        let p = umul_q(&a, &b);
        if sign {
            p.neg()
        } else {
            p
        }
    }

    /// Divides `self` by `other`.
    ///
    /// Division by zero saturates to [`MIN`](Self::MIN) when the dividend is
    /// negative and [`MAX`](Self::MAX) otherwise; a quotient beyond the
    /// representable range saturates the same way.
    #[inline(always)]
    pub fn div(&self, other: &Self) -> Self {
        let mut sign = false;

        let mut n = *self;
        if n.is_negative() {
            n = n.neg();
            sign = !sign;
        }

        let mut d = *other;
        if d.is_zero() {
            return if sign { Self::MIN } else { Self::MAX };
        }
        if d.is_negative() {
            d = d.neg();
            sign = !sign;
        }

        let q = udiv_q(&n, &d);
        if sign {
            q.neg()
        } else {
            q
        }
    }

    /// Computes the remainder `self - trunc(self / other) * other`.
    ///
    /// The result carries the sign of the dividend (truncated-quotient
    /// convention). Division by zero reports the same sentinel as [`div`](Self::div).
    pub fn rem(&self, other: &Self) -> Self {
        let mut sign = false;

        let mut n = *self;
        if n.is_negative() {
            n = n.neg();
            sign = !sign;
        }

        let mut d = *other;
        if d.is_zero() {
            return if sign { Self::MIN } else { Self::MAX };
        }
        if d.is_negative() {
            d = d.neg();
            sign = !sign;
        }

        // integer quotient digit of |self| / |other|, sign-adjusted
        let mut q = Self {
            lo: 0,
            hi: uquo_int(&n, &d),
        };
        if sign {
            q.hi = q.hi.wrapping_neg();
        }

        self.sub(&q.mul(other))
    }
}

/// Unsigned Q128.128 multiply: 512-bit product shifted down one limb with
/// round-half-up on the discarded lane, wrapping above 2^256.
pub(crate) fn umul_q(a: &Fix256, b: &Fix256) -> Fix256 {
    let (p0_hi, p0_lo) = mul_wide(a.lo, b.lo);
    let round = Fix256 {
        lo: p0_lo >> 127,
        hi: 0,
    };
    let mut acc = Fix256 { lo: p0_hi, hi: 0 }.add(&round);

    let (p1_hi, p1_lo) = mul_wide(a.hi, b.lo);
    acc = acc.add(&Fix256 {
        lo: p1_lo,
        hi: p1_hi,
    });

    let (p2_hi, p2_lo) = mul_wide(a.lo, b.hi);
    acc = acc.add(&Fix256 {
        lo: p2_lo,
        hi: p2_hi,
    });

    // p3 contributes shifted up one limb; its own high half falls off
    let (_, p3_lo) = mul_wide(a.hi, b.hi);
    acc.hi = acc.hi.wrapping_add(p3_lo);

    acc
}

/// Shift (numerator, divisor) left jointly until the divisor's top bit is
/// set, carrying the numerator's spill into an extra high limb. Returns
/// `None` when the quotient would exceed the 256-bit range.
fn norm(n: &Fix256, d: &Fix256) -> Option<(u128, Fix256, Fix256)> {
    let mut n1 = n.hi;
    let mut n0 = n.lo;
    let mut d1 = d.hi;
    let mut d0 = d.lo;
    let n2;

    if d1 != 0 {
        let shift = d1.leading_zeros();
        if shift != 0 {
            d1 = (d1 << shift) | (d0 >> (128 - shift));
            d0 <<= shift;
            n2 = n1 >> (128 - shift);
            n1 = (n1 << shift) | (n0 >> (128 - shift));
            n0 <<= shift;
        } else {
            n2 = 0;
        }
    } else {
        let shift = d0.leading_zeros();
        if n1.leading_zeros() <= shift {
            return None;
        }

        if shift != 0 {
            d1 = d0 << shift;
            d0 = 0;
            n2 = (n1 << shift) | (n0 >> (128 - shift));
            n1 = n0 << shift;
            n0 = 0;
        } else {
            d1 = d0;
            d0 = 0;
            n2 = n1;
            n1 = n0;
            n0 = 0;
        }
    }

    Some((n2, Fix256 { lo: n0, hi: n1 }, Fix256 { lo: d0, hi: d1 }))
}

/// Unsigned Q128.128 divide: (n << 128) / d, produced as two 128-bit quotient
/// digits with downward refinement. Saturates to `MAX` on overflow.
/// Requires d != 0.
pub(crate) fn udiv_q(dividend: &Fix256, divisor: &Fix256) -> Fix256 {
    let Some((n3, n, d)) = norm(dividend, divisor) else {
        return Fix256::MAX;
    };

    // dividend limbs after scaling by 2^128: (n3, n2, n1, 0)
    let mut n2 = n.hi;
    let mut n1 = n.lo;
    let d1 = d.hi;
    let d0 = d.lo;

    // first digit
    debug_assert!(n3 <= d1);
    let mut q_hi;
    let mut r;
    let mut fits;
    if n3 < d1 {
        let (q, rem) = div_wide(n3, n2, d1);
        q_hi = q;
        r = rem;
        fits = true;
    } else {
        q_hi = u128::MAX;
        let (sum, overflow) = n2.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }
    // once r outgrows a limb the test cannot fail, so refinement stops
    while fits && mul_wide(q_hi, d0) > (r, n1) {
        q_hi = q_hi.wrapping_sub(1);
        let (sum, overflow) = r.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }

    // subtract q_hi * d from the running numerator
    {
        let (t1_hi, t1_lo) = mul_wide(q_hi, d0);
        let (_, t2_lo) = mul_wide(q_hi, d1);
        let sub_hi = t1_hi.wrapping_add(t2_lo);

        let new_n1 = n1.wrapping_sub(t1_lo);
        let borrow = (new_n1 > n1) as u128;
        n2 = n2.wrapping_sub(sub_hi).wrapping_sub(borrow);
        n1 = new_n1;
    }

    // second digit
    debug_assert!(n2 <= d1);
    let mut q_lo;
    if n2 < d1 {
        let (q, rem) = div_wide(n2, n1, d1);
        q_lo = q;
        r = rem;
        fits = true;
    } else {
        q_lo = u128::MAX;
        let (sum, overflow) = n1.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }
    while fits && mul_wide(q_lo, d0) > (r, 0) {
        q_lo = q_lo.wrapping_sub(1);
        let (sum, overflow) = r.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }

    Fix256 { lo: q_lo, hi: q_hi }
}

/// Integer part of the unsigned quotient n / d: the first digit of the same
/// scaled division, refined the same way. Returns all-ones on overflow.
/// Requires d != 0.
fn uquo_int(dividend: &Fix256, divisor: &Fix256) -> u128 {
    let Some((n3, n, d)) = norm(dividend, divisor) else {
        return u128::MAX;
    };

    let n1 = n.lo;
    let d1 = d.hi;
    let d0 = d.lo;

    debug_assert!(n3 < d1);
    let (mut q, mut r) = div_wide(n3, n.hi, d1);
    let mut fits = true;
    while fits && mul_wide(q, d0) > (r, n1) {
        q = q.wrapping_sub(1);
        let (sum, overflow) = r.overflowing_add(d1);
        r = sum;
        fits = !overflow;
    }

    q
}
