//! Property-based tests using quickcheck.
//!
//! Exercises the algebraic laws over random 256-bit patterns: every
//! (hi, lo) pair is a legal value, so generation is just two u128s.

use fix256::{Fix256, FormatOptions};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn fx(hi: u128, lo: u128) -> Fix256 {
    Fix256::from_parts(hi, lo)
}

const HALF: Fix256 = Fix256::from_parts(0, 1u128 << 127);

// ============ Additive group ============
#[quickcheck]
fn add_neg_is_zero(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.add(&v.neg()) == Fix256::ZERO
}

#[quickcheck]
fn add_zero_is_identity(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.add(&Fix256::ZERO) == v
}

#[quickcheck]
fn sub_is_add_neg(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = fx(a_hi, a_lo);
    let b = fx(b_hi, b_lo);
    a.sub(&b) == a.add(&b.neg())
}

#[quickcheck]
fn add_commutes(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = fx(a_hi, a_lo);
    let b = fx(b_hi, b_lo);
    a.add(&b) == b.add(&a)
}

#[quickcheck]
fn neg_is_involution(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.neg().neg() == v
}

// ============ Multiplication ============
#[quickcheck]
fn mul_one_is_identity(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.mul(&Fix256::ONE) == v
}

#[quickcheck]
fn mul_zero_absorbs(hi: u128, lo: u128) -> bool {
    fx(hi, lo).mul(&Fix256::ZERO) == Fix256::ZERO
}

#[quickcheck]
fn mul_commutes(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = fx(a_hi, a_lo);
    let b = fx(b_hi, b_lo);
    a.mul(&b) == b.mul(&a)
}

// ============ Total order ============
#[quickcheck]
fn cmp_antisymmetric(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = fx(a_hi, a_lo);
    let b = fx(b_hi, b_lo);
    a.cmp(&b) == b.cmp(&a).reverse()
}

#[quickcheck]
fn eq_iff_same_parts(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = fx(a_hi, a_lo);
    let b = fx(b_hi, b_lo);
    (a == b) == (a_hi == b_hi && a_lo == b_lo)
}

#[quickcheck]
fn cmp_transitive(
    a_hi: u128,
    a_lo: u128,
    b_hi: u128,
    b_lo: u128,
    c_hi: u128,
    c_lo: u128,
) -> bool {
    let mut v = [fx(a_hi, a_lo), fx(b_hi, b_lo), fx(c_hi, c_lo)];
    v.sort();
    v[0] <= v[1] && v[1] <= v[2] && v[0] <= v[2]
}

// ============ Shifts ============
#[quickcheck]
fn shift_zero_is_identity(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.shl(0) == v && v.shr(0) == v && v.sar(0) == v
}

#[quickcheck]
fn shift_amount_mod_256(hi: u128, lo: u128, n: u32) -> bool {
    let v = fx(hi, lo);
    v.shl(n) == v.shl(n % 256) && v.shr(n) == v.shr(n % 256) && v.sar(n) == v.sar(n % 256)
}

#[quickcheck]
fn sar_preserves_sign(hi: u128, lo: u128, n: u32) -> bool {
    let v = fx(hi, lo);
    v.sar(n).is_negative() == v.is_negative()
}

#[quickcheck]
fn sar_equals_shr_for_non_negative(hi: u128, lo: u128, n: u32) -> TestResult {
    let v = fx(hi, lo);
    if v.is_negative() {
        return TestResult::discard();
    }
    TestResult::from_bool(v.sar(n) == v.shr(n))
}

// ============ Rounding ============
#[quickcheck]
fn floor_at_most_value(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.floor() <= v
}

#[quickcheck]
fn ceil_at_least_value(hi: u128, lo: u128) -> TestResult {
    let v = fx(hi, lo);
    // ceil wraps in the top integer bucket
    if v.hi() == Fix256::MAX.hi() {
        return TestResult::discard();
    }
    TestResult::from_bool(v <= v.ceil())
}

#[quickcheck]
fn ceil_minus_floor_is_zero_or_one(hi: u128, lo: u128) -> bool {
    let d = fx(hi, lo).ceil().sub(&fx(hi, lo).floor());
    d == Fix256::ZERO || d == Fix256::ONE
}

#[quickcheck]
fn round_matches_biased_floor(hi: u128, lo: u128) -> TestResult {
    let v = fx(hi, lo);
    // adding or subtracting a half must not cross the range ends
    if v.hi() == Fix256::MAX.hi() || v.hi() == Fix256::MIN.hi() {
        return TestResult::discard();
    }
    let expected = if v.is_negative() {
        v.sub(&HALF).ceil()
    } else {
        v.add(&HALF).floor()
    };
    TestResult::from_bool(v.round() == expected)
}

#[quickcheck]
fn trunc_agrees_with_to_i128(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.trunc() == Fix256::from_parts(v.to_i128() as u128, 0)
}

// ============ String round trip ============
#[quickcheck]
fn format_39_parse_round_trips(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    let opts = FormatOptions {
        precision: Some(39),
        ..FormatOptions::default()
    };
    let mut buf = [0u8; 96];
    let n = v.format_into(&mut buf, &opts);
    let s = core::str::from_utf8(&buf[..n]).unwrap();
    s.parse::<Fix256>().unwrap() == v
}

#[quickcheck]
fn default_format_round_trips(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    let mut buf = [0u8; 96];
    let n = v.format_into(&mut buf, &FormatOptions::default());
    let s = core::str::from_utf8(&buf[..n]).unwrap();
    s.parse::<Fix256>().unwrap() == v
}

// ============ Saturating boundaries ============
#[quickcheck]
fn div_by_zero_follows_dividend_sign(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    let expected = if v.is_negative() {
        Fix256::MIN
    } else {
        Fix256::MAX
    };
    v.div(&Fix256::ZERO) == expected
}

#[quickcheck]
fn abs_is_non_negative_except_min(hi: u128, lo: u128) -> TestResult {
    let v = fx(hi, lo);
    if v == Fix256::MIN {
        return TestResult::discard();
    }
    let a = v.abs();
    TestResult::from_bool(!a.is_negative() && (a == v || a == v.neg()))
}

#[quickcheck]
fn nabs_is_neg_abs(hi: u128, lo: u128) -> bool {
    let v = fx(hi, lo);
    v.nabs() == v.abs().neg()
}
