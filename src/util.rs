use core::sync::atomic::{AtomicU8, Ordering};

/// Decimal separator used by both the formatter and the parser.
static DECIMAL_SEPARATOR: AtomicU8 = AtomicU8::new(b'.');

/// Sets the process-wide decimal separator byte. Defaults to `b'.'`.
///
/// Reads and writes are relaxed atomics: configure this during initialisation,
/// before any formatting or parsing takes place.
#[inline]
pub fn set_decimal_separator(separator: u8) {
    DECIMAL_SEPARATOR.store(separator, Ordering::Relaxed);
}

/// Returns the process-wide decimal separator byte.
#[inline]
pub fn decimal_separator() -> u8 {
    DECIMAL_SEPARATOR.load(Ordering::Relaxed)
}
