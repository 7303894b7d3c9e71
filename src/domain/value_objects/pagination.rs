use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid literal for {parameter}: {value:?}")]
pub struct PaginationError {
    pub parameter: &'static str,
    pub value: String,
}

/// A contiguous window `[offset, offset + count)` over a result set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page {
    pub count: usize,
    pub offset: usize,
}

impl Page {
    /// Build a page from raw query values, falling back to `default_count` and `0`.
    ///
    /// Each value is parsed as an integer (surrounding whitespace and a leading sign are
    /// allowed) and negative values are clamped to zero.
    pub fn from_raw(
        count: Option<&str>,
        offset: Option<&str>,
        default_count: i64,
    ) -> Result<Self, PaginationError> {
        let count = match count {
            Some(raw) => parse_integer("count", raw)?,
            None => default_count,
        };
        let offset = match offset {
            Some(raw) => parse_integer("offset", raw)?,
            None => 0,
        };
        Ok(Self {
            count: clamp(count),
            offset: clamp(offset),
        })
    }

    /// Exclusive end index, saturating instead of overflowing.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.count)
    }

    /// Whether the window can possibly select anything.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// Integers are unbounded: well-formed values outside i64 saturate instead of failing.
fn parse_integer(parameter: &'static str, raw: &str) -> Result<i64, PaginationError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(if negative { i64::MIN } else { i64::MAX });
    }

    Err(PaginationError {
        parameter,
        value: raw.to_string(),
    })
}

fn clamp(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
