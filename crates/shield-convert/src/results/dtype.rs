//! Data type codes of `.bdo` tokens, e.g. `<f8`, `i4`, `S80`.

use std::fmt;

/// Byte order of a value or of a whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// `II` marker, `<` prefix.
    Little,
    /// `MM` marker, `>` prefix.
    Big,
}

impl ByteOrder {
    /// Metadata label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Little => "little-endian",
            Self::Big => "big-endian",
        }
    }

    /// Read a `u64` from up to 8 bytes.
    pub fn read_u64(self, bytes: &[u8]) -> u64 {
        let buf = fixed::<8>(bytes, self);
        match self {
            Self::Little => u64::from_le_bytes(buf),
            Self::Big => u64::from_be_bytes(buf),
        }
    }

    /// Read a `u32` from up to 4 bytes.
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let buf = fixed::<4>(bytes, self);
        match self {
            Self::Little => u32::from_le_bytes(buf),
            Self::Big => u32::from_be_bytes(buf),
        }
    }

    /// Read an `i64`.
    pub fn read_i64(self, bytes: &[u8]) -> i64 {
        self.read_u64(bytes) as i64
    }

    /// Read an `f64`.
    pub fn read_f64(self, bytes: &[u8]) -> f64 {
        f64::from_bits(self.read_u64(bytes))
    }
}

/// Copy `bytes` into an `N`-byte array, zero-extending at the most
/// significant end when shorter.
fn fixed<const N: usize>(bytes: &[u8], order: ByteOrder) -> [u8; N] {
    let mut buf = [0u8; N];
    let n = bytes.len().min(N);
    match order {
        ByteOrder::Little => buf[..n].copy_from_slice(&bytes[..n]),
        ByteOrder::Big => buf[N - n..].copy_from_slice(&bytes[bytes.len() - n..]),
    }
    buf
}

/// Read a NUL-terminated ASCII string.
pub fn nul_terminated(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Type code of a token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType(String);

impl DataType {
    /// Parse the 8-byte type field.
    pub fn from_field(field: &[u8]) -> Self {
        Self(nul_terminated(field))
    }

    /// Type code as written.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Type code without a byte order prefix, e.g. `f8`.
    pub fn base(&self) -> &str {
        self.0.trim_start_matches(['<', '>', '='])
    }

    /// Bytes per item, taken from the digits in the code.
    pub fn item_size(&self) -> Option<usize> {
        let digits: String = self
            .0
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok().filter(|&size| size > 0)
    }

    /// String items are NUL-terminated text.
    pub fn is_string(&self) -> bool {
        self.0.contains('S')
    }

    /// Byte order of the values; a prefix overrides the file order.
    pub fn byte_order(&self, file: ByteOrder) -> ByteOrder {
        match self.0.chars().next() {
            Some('<') => ByteOrder::Little,
            Some('>') => ByteOrder::Big,
            _ => file,
        }
    }

    /// Render one item for logging.
    pub fn format_item(&self, item: &[u8], file: ByteOrder) -> String {
        let order = self.byte_order(file);
        match self.base() {
            "i4" => (order.read_u32(item) as i32).to_string(),
            "i8" => order.read_i64(item).to_string(),
            "u4" => order.read_u32(item).to_string(),
            "u8" => order.read_u64(item).to_string(),
            "f4" => format!("{:e}", f32::from_bits(order.read_u32(item))),
            "f8" => format!("{:e}", order.read_f64(item)),
            _ => nul_terminated(item),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dtype(code: &str) -> DataType {
        DataType(code.to_string())
    }

    #[test]
    fn test_item_sizes() {
        assert_eq!(dtype("<f8").item_size(), Some(8));
        assert_eq!(dtype("i4").item_size(), Some(4));
        assert_eq!(dtype("S10").item_size(), Some(10));
        assert_eq!(dtype("16S").item_size(), Some(16));
        assert_eq!(dtype("<c32").item_size(), Some(32));
        assert_eq!(dtype("<f").item_size(), None);
        assert_eq!(dtype("S0").item_size(), None);
    }

    #[test]
    fn test_byte_order_prefix() {
        assert_eq!(dtype("<i8").byte_order(ByteOrder::Big), ByteOrder::Little);
        assert_eq!(dtype(">i8").byte_order(ByteOrder::Little), ByteOrder::Big);
        assert_eq!(dtype("i8").byte_order(ByteOrder::Big), ByteOrder::Big);
        assert_eq!(dtype(">f8").base(), "f8");
    }

    #[test]
    fn test_format_items() {
        let little = ByteOrder::Little;
        assert_eq!(dtype("<i8").format_item(&(-3_i64).to_le_bytes(), little), "-3");
        assert_eq!(dtype(">u4").format_item(&7_u32.to_be_bytes(), little), "7");
        assert_eq!(dtype("<f8").format_item(&0.5_f64.to_le_bytes(), little), "5e-1");
        assert_eq!(dtype("S8").format_item(b"abc\0\0\0\0\0", little), "abc");
        assert!(dtype("S8").is_string());
    }

    #[test]
    fn test_read_short_slices() {
        assert_eq!(ByteOrder::Little.read_u64(&[1, 0]), 1);
        assert_eq!(ByteOrder::Big.read_u64(&[1, 0]), 256);
    }
}
