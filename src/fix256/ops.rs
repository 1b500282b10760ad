use super::Fix256;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

// ============ Operator Traits ============
impl Add for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl Sub for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl Mul for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Div for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.div(&rhs)
    }
}

impl Rem for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn rem(self, rhs: Self) -> Self {
        self.rem(&rhs)
    }
}

impl Neg for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Fix256::neg(&self)
    }
}

/// `<<` is the logical shift; `>>` is the arithmetic shift, matching the
/// convention of Rust's signed primitives. [`Fix256::shr`] stays available
/// for the logical right shift.
impl Shl<u32> for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn shl(self, amount: u32) -> Self {
        Fix256::shl(&self, amount)
    }
}

impl Shr<u32> for Fix256 {
    type Output = Self;
    #[inline(always)]
    fn shr(self, amount: u32) -> Self {
        self.sar(amount)
    }
}

// ============ Assign Ops ============
impl AddAssign for Fix256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.add(&rhs);
    }
}

impl SubAssign for Fix256 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.sub(&rhs);
    }
}

impl MulAssign for Fix256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul(&rhs);
    }
}

impl DivAssign for Fix256 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.div(&rhs);
    }
}

impl RemAssign for Fix256 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.rem(&rhs);
    }
}

impl ShlAssign<u32> for Fix256 {
    #[inline(always)]
    fn shl_assign(&mut self, amount: u32) {
        *self = Fix256::shl(self, amount);
    }
}

impl ShrAssign<u32> for Fix256 {
    #[inline(always)]
    fn shr_assign(&mut self, amount: u32) {
        *self = self.sar(amount);
    }
}

// ============ Reference Ops ============
impl<'b> Add<&'b Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn add(self, rhs: &'b Fix256) -> Fix256 {
        self.add(rhs)
    }
}
impl<'a> Add<&'a Fix256> for Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn add(self, rhs: &'a Fix256) -> Fix256 {
        Fix256::add(&self, rhs)
    }
}
impl Add<Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn add(self, rhs: Fix256) -> Fix256 {
        self.add(&rhs)
    }
}

impl<'b> Sub<&'b Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn sub(self, rhs: &'b Fix256) -> Fix256 {
        self.sub(rhs)
    }
}
impl<'a> Sub<&'a Fix256> for Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn sub(self, rhs: &'a Fix256) -> Fix256 {
        Fix256::sub(&self, rhs)
    }
}
impl Sub<Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn sub(self, rhs: Fix256) -> Fix256 {
        self.sub(&rhs)
    }
}

impl<'b> Mul<&'b Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn mul(self, rhs: &'b Fix256) -> Fix256 {
        self.mul(rhs)
    }
}
impl<'a> Mul<&'a Fix256> for Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn mul(self, rhs: &'a Fix256) -> Fix256 {
        Fix256::mul(&self, rhs)
    }
}
impl Mul<Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn mul(self, rhs: Fix256) -> Fix256 {
        self.mul(&rhs)
    }
}

impl<'b> Div<&'b Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn div(self, rhs: &'b Fix256) -> Fix256 {
        self.div(rhs)
    }
}
impl<'a> Div<&'a Fix256> for Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn div(self, rhs: &'a Fix256) -> Fix256 {
        Fix256::div(&self, rhs)
    }
}
impl Div<Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn div(self, rhs: Fix256) -> Fix256 {
        self.div(&rhs)
    }
}

impl<'b> Rem<&'b Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn rem(self, rhs: &'b Fix256) -> Fix256 {
        self.rem(rhs)
    }
}
impl<'a> Rem<&'a Fix256> for Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn rem(self, rhs: &'a Fix256) -> Fix256 {
        Fix256::rem(&self, rhs)
    }
}
impl Rem<Fix256> for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn rem(self, rhs: Fix256) -> Fix256 {
        self.rem(&rhs)
    }
}

impl Neg for &Fix256 {
    type Output = Fix256;
    #[inline(always)]
    fn neg(self) -> Fix256 {
        Fix256::neg(self)
    }
}

// ============ Default ============
impl Default for Fix256 {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============ Iterator Traits ============
impl Sum for Fix256 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, x| a.add(&x))
    }
}
impl<'a> Sum<&'a Fix256> for Fix256 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, x| a.add(x))
    }
}

impl Product for Fix256 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, x| a.mul(&x))
    }
}
impl<'a> Product<&'a Fix256> for Fix256 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, x| a.mul(x))
    }
}

// ============ From Integer ============
/// From<signed>: the integer limb is the sign extension
macro_rules! impl_from_signed { ($($t:ty),*) => {$( impl From<$t> for Fix256 { #[inline(always)] fn from(n: $t) -> Self { Self { lo: 0, hi: n as i128 as u128 } } } )*}; }

/// From<unsigned>: always non-negative
macro_rules! impl_from_unsigned { ($($t:ty),*) => {$( impl From<$t> for Fix256 { #[inline(always)] fn from(n: $t) -> Self { Self { lo: 0, hi: n as u128 } } } )*}; }

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

// ============ Ops with Primitives ============
/// Enables `Fix256 + i32`, `i32 + Fix256`, etc.
macro_rules! impl_ops_primitive {
    ($($t:ty),*) => {$(
        impl Add<$t> for Fix256 { type Output = Fix256; #[inline(always)] fn add(self, rhs: $t) -> Fix256 { self.add(&Fix256::from(rhs)) } }
        impl Add<Fix256> for $t { type Output = Fix256; #[inline(always)] fn add(self, rhs: Fix256) -> Fix256 { Fix256::from(self).add(&rhs) } }
        impl Sub<$t> for Fix256 { type Output = Fix256; #[inline(always)] fn sub(self, rhs: $t) -> Fix256 { self.sub(&Fix256::from(rhs)) } }
        impl Sub<Fix256> for $t { type Output = Fix256; #[inline(always)] fn sub(self, rhs: Fix256) -> Fix256 { Fix256::from(self).sub(&rhs) } }
        impl Mul<$t> for Fix256 { type Output = Fix256; #[inline(always)] fn mul(self, rhs: $t) -> Fix256 { self.mul(&Fix256::from(rhs)) } }
        impl Mul<Fix256> for $t { type Output = Fix256; #[inline(always)] fn mul(self, rhs: Fix256) -> Fix256 { Fix256::from(self).mul(&rhs) } }
        impl Div<$t> for Fix256 { type Output = Fix256; #[inline(always)] fn div(self, rhs: $t) -> Fix256 { self.div(&Fix256::from(rhs)) } }
        impl Div<Fix256> for $t { type Output = Fix256; #[inline(always)] fn div(self, rhs: Fix256) -> Fix256 { Fix256::from(self).div(&rhs) } }
    )*};
}
impl_ops_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
