use super::Fix256;
use crate::util::decimal_separator;
use crate::wide::mul_wide;
use core::fmt;

// Digit scratch: fraction digits, separator, up to 39 integer digits and slack.
// Fraction digits beyond the scratch capacity are emitted as trailing zeros.
const SCRATCH: usize = 256;
const FRAC_INLINE_MAX: usize = SCRATCH - 41;

/// Fractional digits required for an exact round-trip through the parser.
pub(crate) const FRAC_ROUND_TRIP: usize = 39;

/// Sign character emitted for non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// No sign character.
    #[default]
    Default,
    /// A leading space.
    Space,
    /// A leading `+`.
    Plus,
}

/// Formatting options for [`Fix256::format_into`].
///
/// The defaults reproduce printf's `"%f"`, except that `precision` defaults
/// to as-needed: enough fractional digits for an exact round-trip (at most
/// 39), with no trailing zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Sign character for non-negative values.
    pub sign: Sign,
    /// Minimum number of characters to write.
    pub width: usize,
    /// Fractional digits to emit, with rounding at the cut. `None` means
    /// as-needed, capped at 39.
    pub precision: Option<usize>,
    /// Pad to `width` with leading zeros (after the sign) instead of spaces.
    pub zero_pad: bool,
    /// Always emit the decimal separator, even for integral values.
    pub decimal_point: bool,
    /// Left-align within `width`, padding on the right.
    pub left_align: bool,
}

impl FormatOptions {
    /// Parses a restricted printf-style specifier: `%[flags][width][.precision]f`.
    ///
    /// The leading `%` and trailing `f` are optional; flags are any of
    /// ` `, `+`, `0`, `-`, `#`. Characters outside the recognised grammar
    /// are ignored.
    pub fn from_spec(spec: &str) -> Self {
        let mut opts = Self::default();
        let b = spec.as_bytes();
        let mut i = 0;

        if i < b.len() && b[i] == b'%' {
            i += 1;
        }

        // flags field
        while i < b.len() {
            match b[i] {
                b' ' => {
                    if opts.sign != Sign::Plus {
                        opts.sign = Sign::Space;
                    }
                }
                b'+' => opts.sign = Sign::Plus,
                b'0' => opts.zero_pad = true,
                b'-' => opts.left_align = true,
                b'#' => opts.decimal_point = true,
                _ => break,
            }
            i += 1;
        }

        // width field
        while i < b.len() && b[i].is_ascii_digit() {
            opts.width = opts.width * 10 + (b[i] - b'0') as usize;
            i += 1;
        }

        // precision field
        if i < b.len() && b[i] == b'.' {
            i += 1;
            let mut precision = 0usize;
            while i < b.len() && b[i].is_ascii_digit() {
                precision = precision * 10 + (b[i] - b'0') as usize;
                i += 1;
            }
            opts.precision = Some(precision);
        }

        opts
    }
}

// ============ Byte Sinks ============
pub(crate) trait ByteSink {
    fn put(&mut self, byte: u8) -> fmt::Result;
}

/// Writes what fits into a byte slice while counting the full length.
struct SliceSink<'a> {
    dst: &'a mut [u8],
    len: usize,
}

impl ByteSink for SliceSink<'_> {
    #[inline(always)]
    fn put(&mut self, byte: u8) -> fmt::Result {
        if self.len < self.dst.len() {
            self.dst[self.len] = byte;
        }
        self.len += 1;
        Ok(())
    }
}

/// Forwards bytes (all ASCII) into a `fmt::Write`.
struct WriteSink<'a, W: fmt::Write> {
    inner: &'a mut W,
}

impl<W: fmt::Write> ByteSink for WriteSink<'_, W> {
    #[inline(always)]
    fn put(&mut self, byte: u8) -> fmt::Result {
        self.inner.write_char(byte as char)
    }
}

// ============ Core Formatter ============
pub(crate) fn format_opt<S: ByteSink>(
    v: &Fix256,
    opts: &FormatOptions,
    out: &mut S,
) -> fmt::Result {
    let mut buf = [0u8; SCRATCH];

    let mut tmp = *v;
    let mut sign_byte = None;
    if tmp.is_negative() {
        tmp = tmp.neg();
        sign_byte = Some(b'-');
    } else {
        match opts.sign {
            Sign::Plus => sign_byte = Some(b'+'),
            Sign::Space => sign_byte = Some(b' '),
            Sign::Default => {}
        }
    }

    let full_precision = opts.precision.is_some();
    let mut precision = opts.precision.unwrap_or(FRAC_ROUND_TRIP);
    let mut trail = 0usize;
    if precision > FRAC_INLINE_MAX {
        trail = precision - FRAC_INLINE_MAX;
        precision = FRAC_INLINE_MAX;
    }

    let mut whole = tmp.hi;
    let mut cursor = 0usize;
    let mut point = 0usize;

    // fractional digits first, in case a carry into the whole part is needed
    if tmp.lo != 0 || opts.decimal_point {
        while tmp.lo != 0 || (full_precision && precision != 0) {
            if cursor == precision {
                if tmp.lo >> 127 != 0 {
                    // round up, propagating the carry backwards
                    let mut carried = false;
                    for c in buf[..cursor].iter_mut().rev() {
                        if *c == b'9' {
                            *c = b'0';
                        } else {
                            *c += 1;
                            carried = true;
                            break;
                        }
                    }
                    if !carried {
                        whole = whole.wrapping_add(1);
                    }
                }
                break;
            }

            let (digit, rest) = mul_wide(tmp.lo, 10);
            buf[cursor] = b'0' + digit as u8;
            cursor += 1;
            tmp.lo = rest;
        }

        if opts.decimal_point || precision != 0 {
            point = cursor;
            buf[cursor] = decimal_separator();
            cursor += 1;
        }
    }

    // whole part, least-significant digit first
    loop {
        buf[cursor] = b'0' + (whole % 10) as u8;
        cursor += 1;
        whole /= 10;
        if whole == 0 {
            break;
        }
    }

    let sign_len = sign_byte.is_some() as usize;
    let pad = opts.width.saturating_sub(cursor + sign_len);

    // left padding, with the sign ahead of zeros but behind spaces
    if !opts.left_align {
        if opts.zero_pad {
            if let Some(s) = sign_byte {
                out.put(s)?;
            }
            for _ in 0..pad {
                out.put(b'0')?;
            }
        } else {
            for _ in 0..pad {
                out.put(b' ')?;
            }
            if let Some(s) = sign_byte {
                out.put(s)?;
            }
        }
    } else if let Some(s) = sign_byte {
        out.put(s)?;
    }

    // whole part reversed down to the separator, then the fraction
    for i in (point..cursor).rev() {
        out.put(buf[i])?;
    }
    for &b in &buf[..point] {
        out.put(b)?;
    }

    // right padding
    if opts.left_align {
        let pad_byte = if opts.zero_pad { b'0' } else { b' ' };
        for _ in 0..pad {
            out.put(pad_byte)?;
        }
    }

    // trailing zeros for precision beyond the scratch capacity
    for _ in 0..trail {
        out.put(b'0')?;
    }

    Ok(())
}

impl Fix256 {
    /// Formats into `dst` and returns the length the full output requires.
    ///
    /// Writes only what fits; when the returned length exceeds `dst.len()`
    /// the output was truncated (numeric rounding is unaffected by
    /// truncation). The written bytes are always ASCII.
    pub fn format_into(&self, dst: &mut [u8], opts: &FormatOptions) -> usize {
        let mut sink = SliceSink { dst, len: 0 };
        // a slice sink cannot fail
        let _ = format_opt(self, opts, &mut sink);
        sink.len
    }
}

// ============ Formatting Traits ============
/// Display: maps the standard formatter flags onto [`FormatOptions`], so
/// `{:+10.4}`, `{:<8}`, `{:#}` and sign-aware zero padding all behave like
/// their printf counterparts.
impl fmt::Display for Fix256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = FormatOptions {
            sign: if f.sign_plus() {
                Sign::Plus
            } else {
                Sign::Default
            },
            width: f.width().unwrap_or(0),
            precision: f.precision(),
            zero_pad: f.sign_aware_zero_pad(),
            decimal_point: f.alternate(),
            left_align: matches!(f.align(), Some(fmt::Alignment::Left)),
        };
        format_opt(self, &opts, &mut WriteSink { inner: f })
    }
}

/// The raw 256-bit pattern, zero-padded, integer limb first.
impl fmt::LowerHex for Fix256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}{:032x}", self.hi, self.lo)
    }
}

impl fmt::UpperHex for Fix256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032X}{:032X}", self.hi, self.lo)
    }
}
