//! Decoder for one `.bdo` result file.
//!
//! A file is a 24-byte header followed by tokens. Each token has a 24-byte
//! header (tag `u64`, NUL-terminated type code, item count `u64`, all in the
//! file byte order) and `count` items of the size named by the type code.

use std::path::Path;

use shield_ir::{DetectorResult, Dimensions};
use tracing::debug;

use crate::error::DecodeError;
use crate::results::dtype::{nul_terminated, ByteOrder, DataType};
use crate::results::tags::{tag_kind, TagKind};

/// Leading bytes of every result file.
pub const MAGIC: &[u8] = b"xSH12A";
/// Only supported format version.
pub const VERSION: &str = "0.6";

const HEADER_LEN: usize = 24;
const TOKEN_HEADER_LEN: usize = 24;

type Result<T> = std::result::Result<T, DecodeError>;

/// One token with its payload split into items.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    /// Tag ID.
    pub tag: u64,
    /// Payload type.
    pub dtype: DataType,
    /// Equal-size payload slices.
    pub items: Vec<&'a [u8]>,
}

/// Check the file header and return the file byte order.
pub fn read_header(data: &[u8]) -> Result<ByteOrder> {
    if data.len() < HEADER_LEN {
        return Err(DecodeError::TooShort(data.len()));
    }
    if &data[0..6] != MAGIC {
        return Err(DecodeError::BadMagic(
            String::from_utf8_lossy(&data[0..6]).into_owned(),
        ));
    }
    let order = match &data[6..8] {
        b"II" => ByteOrder::Little,
        b"MM" => ByteOrder::Big,
        other => {
            return Err(DecodeError::UnknownByteOrder(
                String::from_utf8_lossy(other).into_owned(),
            ))
        }
    };
    let version = &data[8..24];
    if !version.starts_with(VERSION.as_bytes())
        || version[VERSION.len()..].iter().any(|&b| b != 0)
    {
        return Err(DecodeError::UnsupportedVersion(nul_terminated(version)));
    }
    Ok(order)
}

/// Splits the body of a result file into tokens.
pub struct TokenReader<'a> {
    input: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> TokenReader<'a> {
    /// Reader over `input`, which starts right after the file header.
    pub fn new(input: &'a [u8], order: ByteOrder) -> Self {
        Self {
            input,
            pos: 0,
            order,
        }
    }

    /// Read all remaining tokens.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Get the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        let input = self.input;
        let rest = &input[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }
        if rest.len() < TOKEN_HEADER_LEN {
            return Err(DecodeError::TruncatedToken {
                tag: 0,
                offset: self.pos,
                needed: TOKEN_HEADER_LEN,
                available: rest.len(),
            });
        }

        let tag = self.order.read_u64(&rest[0..8]);
        let dtype = DataType::from_field(&rest[8..16]);
        let count = self.order.read_u64(&rest[16..24]) as usize;
        let size = dtype.item_size().ok_or_else(|| DecodeError::UnknownDataType {
            tag,
            dtype: dtype.to_string(),
        })?;

        let needed = size
            .checked_mul(count)
            .and_then(|payload| payload.checked_add(TOKEN_HEADER_LEN))
            .unwrap_or(usize::MAX);
        if rest.len() < needed {
            return Err(DecodeError::TruncatedToken {
                tag,
                offset: self.pos,
                needed,
                available: rest.len(),
            });
        }

        let items = rest[TOKEN_HEADER_LEN..needed].chunks_exact(size).collect();
        self.pos += needed;
        Ok(Some(Token { tag, dtype, items }))
    }
}

/// Accumulates one detector result while tokens are applied.
struct ResultBuilder {
    result: DetectorResult,
    order: ByteOrder,
    has_dimensions: bool,
}

impl ResultBuilder {
    fn apply(&mut self, token: &Token<'_>) -> Result<()> {
        match tag_kind(token.tag) {
            Some(TagKind::Metadata(key)) => self.metadata(token, key),
            Some(TagKind::Debug(name)) => self.echo(token, name),
            Some(TagKind::Dimensions) => self.dimensions(token),
            Some(TagKind::Data) => self.data(token),
            None => Err(DecodeError::UnknownTag(token.tag)),
        }
    }

    fn metadata(&mut self, token: &Token<'_>, key: &'static str) -> Result<()> {
        let item = match token.items.as_slice() {
            [] => return Err(DecodeError::NoItems(token.tag)),
            [item] => item,
            items => {
                return Err(DecodeError::UnexpectedItemCount {
                    tag: token.tag,
                    expected: 1,
                    actual: items.len(),
                })
            }
        };
        if !token.dtype.is_string() {
            return Err(DecodeError::UnexpectedDataType {
                tag: token.tag,
                expected: "string",
                actual: token.dtype.to_string(),
            });
        }
        self.result
            .metadata
            .insert(key.to_string(), nul_terminated(item));
        Ok(())
    }

    fn echo(&mut self, token: &Token<'_>, name: &'static str) -> Result<()> {
        if token.items.is_empty() {
            return Err(DecodeError::NoItems(token.tag));
        }
        let values: Vec<String> = token
            .items
            .iter()
            .map(|item| token.dtype.format_item(item, self.order))
            .collect();
        debug!(tag = name, dtype = %token.dtype, ?values, "bdo echo tag");
        Ok(())
    }

    fn expect_base(token: &Token<'_>, base: &'static str, expected: &'static str) -> Result<()> {
        if token.dtype.base() == base {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedDataType {
                tag: token.tag,
                expected,
                actual: token.dtype.to_string(),
            })
        }
    }

    fn dimensions(&mut self, token: &Token<'_>) -> Result<()> {
        Self::expect_base(token, "i8", "<i8")?;
        let order = token.dtype.byte_order(self.order);
        let segments: Vec<usize> = token
            .items
            .iter()
            .map(|item| order.read_i64(item).max(0) as usize)
            .collect();
        let &[x, y, z] = segments.as_slice() else {
            return Err(DecodeError::UnexpectedItemCount {
                tag: token.tag,
                expected: 3,
                actual: segments.len(),
            });
        };
        let dimensions = Dimensions::from_segments(x, y, z);
        if dimensions.cell_count().is_none() {
            return Err(DecodeError::DimensionsOverflow { x, y, z });
        }
        self.result.dimensions = dimensions;
        self.has_dimensions = true;
        Ok(())
    }

    fn data(&mut self, token: &Token<'_>) -> Result<()> {
        Self::expect_base(token, "f8", "<f8")?;
        if token.items.is_empty() {
            return Err(DecodeError::NoItems(token.tag));
        }
        if !self.has_dimensions {
            return Err(DecodeError::MissingDimensions);
        }
        let dims = self.result.dimensions;
        let expected = dims.cell_count().ok_or(DecodeError::DimensionsOverflow {
            x: dims.segment_x,
            y: dims.segment_y,
            z: dims.segment_z,
        })?;
        if token.items.len() != expected {
            return Err(DecodeError::UnexpectedItemCount {
                tag: token.tag,
                expected,
                actual: token.items.len(),
            });
        }

        let order = token.dtype.byte_order(self.order);
        let (sx, sy, sz) = (dims.segment_x, dims.segment_y, dims.segment_z);
        self.result.data = (0..sz)
            .map(|z| {
                (0..sy)
                    .map(|y| {
                        (0..sx)
                            .map(|x| order.read_f64(token.items[z * sx * sy + y * sx + x]))
                            .collect()
                    })
                    .collect()
            })
            .collect();
        Ok(())
    }
}

/// Decode a result file from a byte buffer.
///
/// The returned result has detector ID 0; the caller attaches the real one.
pub fn decode_bdo(filename: &str, data: &[u8]) -> Result<DetectorResult> {
    let order = read_header(data)?;
    let mut builder = ResultBuilder {
        result: DetectorResult::default(),
        order,
        has_dimensions: false,
    };
    builder
        .result
        .metadata
        .insert("filename".to_string(), filename.to_string());
    builder
        .result
        .metadata
        .insert("endianness".to_string(), order.label().to_string());
    builder
        .result
        .metadata
        .insert("version".to_string(), VERSION.to_string());

    let mut reader = TokenReader::new(&data[HEADER_LEN..], order);
    while let Some(token) = reader.next_token()? {
        builder.apply(&token)?;
    }
    debug!(
        file = filename,
        dimensions = builder.result.dimensions.number_of_dimensions,
        "bdo decoded"
    );
    Ok(builder.result)
}

/// Decode a result file from disk.
pub fn read_bdo(path: impl AsRef<Path>) -> Result<DetectorResult> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    decode_bdo(&filename, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::tags::{DATA, DIMENSIONS};
    use crate::results::testing::BdoWriter;
    use approx::assert_relative_eq;

    fn grid(x: i64, y: i64, z: i64) -> BdoWriter {
        let mut file = BdoWriter::little();
        file.string(0x00, "0.9.2")
            .string(0x03, "tester")
            .i64s(0xCC05, &[1])
            .i64s(DIMENSIONS, &[x, y, z]);
        file
    }

    #[test]
    fn test_decode_grid() {
        let values: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
        let mut file = grid(10, 20, 1);
        file.f64s(DATA, &values);

        let result = decode_bdo("dose0.bdo", &file.finish()).unwrap();
        assert_eq!(result.dimensions, Dimensions::from_segments(10, 20, 1));
        assert_eq!(result.dimensions.number_of_dimensions, 2);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].len(), 20);
        assert_eq!(result.data[0][0].len(), 10);
        assert_relative_eq!(result.data[0][0][0], 0.0);
        assert_relative_eq!(result.data[0][0][9], 4.5);
        assert_relative_eq!(result.data[0][1][0], 5.0);
        assert_relative_eq!(result.data[0][19][9], 99.5);

        assert_eq!(result.metadata["filename"], "dose0.bdo");
        assert_eq!(result.metadata["endianness"], "little-endian");
        assert_eq!(result.metadata["version"], "0.6");
        assert_eq!(result.metadata["shieldVersionName"], "0.9.2");
        assert_eq!(result.metadata["username"], "tester");
        assert!(result.errors.is_empty());
        assert_eq!(result.detector_id, 0);
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(decode_bdo("a", b"xSH12A"), Err(DecodeError::TooShort(6))));

        let mut bad_magic = BdoWriter::little().finish();
        bad_magic[0] = b'y';
        assert!(matches!(decode_bdo("a", &bad_magic), Err(DecodeError::BadMagic(_))));

        let mut bad_order = BdoWriter::little().finish();
        bad_order[6..8].copy_from_slice(b"XX");
        assert!(matches!(
            decode_bdo("a", &bad_order),
            Err(DecodeError::UnknownByteOrder(_))
        ));

        let mut bad_version = BdoWriter::little().finish();
        bad_version[10] = b'7';
        match decode_bdo("a", &bad_version) {
            Err(DecodeError::UnsupportedVersion(v)) => assert_eq!(v, "0.7"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_body() {
        let result = decode_bdo("empty.bdo", &BdoWriter::little().finish()).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.metadata.len(), 3);
    }

    #[test]
    fn test_truncated_payload() {
        let mut file = grid(2, 2, 1);
        file.f64s(DATA, &[1.0, 2.0, 3.0, 4.0]);
        let mut bytes = file.finish();
        bytes.truncate(bytes.len() - 3);
        match decode_bdo("a", &bytes) {
            Err(DecodeError::TruncatedToken {
                tag,
                needed,
                available,
                ..
            }) => {
                assert_eq!(tag, DATA);
                assert_eq!(needed, 24 + 32);
                assert_eq!(available, 24 + 29);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_truncated_token_header() {
        let mut bytes = grid(1, 1, 1).finish();
        bytes.extend_from_slice(&[0u8; 10]);
        assert!(matches!(
            decode_bdo("a", &bytes),
            Err(DecodeError::TruncatedToken { tag: 0, needed: 24, available: 10, .. })
        ));
    }

    #[test]
    fn test_big_endian_file() {
        let mut file = BdoWriter::big();
        file.string(0x04, "node7")
            .raw(DIMENSIONS, ">i8", &[2_i64, 1, 1].map(i64::to_be_bytes).concat(), 3)
            .raw(DATA, ">f8", &[1.5_f64, -2.0].map(f64::to_be_bytes).concat(), 2);
        let result = decode_bdo("be.bdo", &file.finish()).unwrap();
        assert_eq!(result.metadata["endianness"], "big-endian");
        assert_eq!(result.metadata["hostname"], "node7");
        assert_eq!(result.dimensions.segment_x, 2);
        assert_relative_eq!(result.data[0][0][0], 1.5);
        assert_relative_eq!(result.data[0][0][1], -2.0);
    }

    #[test]
    fn test_prefix_overrides_file_order() {
        // big-endian headers, little-endian values
        let mut file = BdoWriter::big();
        file.i64s(DIMENSIONS, &[1, 1, 3]).f64s(DATA, &[7.0, 8.0, 9.0]);
        let result = decode_bdo("mixed.bdo", &file.finish()).unwrap();
        assert_eq!(result.dimensions.segment_z, 3);
        assert_relative_eq!(result.data[2][0][0], 9.0);
    }

    #[test]
    fn test_unknown_tag_aborts() {
        let mut file = grid(1, 1, 1);
        file.i64s(0xBEEF, &[1]).f64s(DATA, &[1.0]);
        assert!(matches!(
            decode_bdo("a", &file.finish()),
            Err(DecodeError::UnknownTag(0xBEEF))
        ));
    }

    #[test]
    fn test_structural_checks() {
        let mut wrong_count = grid(2, 2, 1);
        wrong_count.f64s(DATA, &[1.0, 2.0, 3.0]);
        assert!(matches!(
            decode_bdo("a", &wrong_count.finish()),
            Err(DecodeError::UnexpectedItemCount { expected: 4, actual: 3, .. })
        ));

        let mut no_dims = BdoWriter::little();
        no_dims.f64s(DATA, &[1.0]);
        assert!(matches!(
            decode_bdo("a", &no_dims.finish()),
            Err(DecodeError::MissingDimensions)
        ));

        let mut huge = grid(1 << 32, 1 << 32, 1);
        huge.f64s(DATA, &[1.0]);
        assert!(matches!(
            decode_bdo("a", &huge.finish()),
            Err(DecodeError::DimensionsOverflow { z: 1, .. })
        ));

        let mut float_dims = BdoWriter::little();
        float_dims.f64s(DIMENSIONS, &[1.0, 1.0, 1.0]);
        assert!(matches!(
            decode_bdo("a", &float_dims.finish()),
            Err(DecodeError::UnexpectedDataType { .. })
        ));

        let mut two_dims = BdoWriter::little();
        two_dims.i64s(DIMENSIONS, &[1, 1]);
        assert!(matches!(
            decode_bdo("a", &two_dims.finish()),
            Err(DecodeError::UnexpectedItemCount { expected: 3, actual: 2, .. })
        ));

        let mut empty_echo = BdoWriter::little();
        empty_echo.raw(0xCC00, "<f8", &[], 0);
        assert!(matches!(
            decode_bdo("a", &empty_echo.finish()),
            Err(DecodeError::NoItems(0xCC00))
        ));

        let mut numeric_name = BdoWriter::little();
        numeric_name.i64s(0x03, &[42]);
        assert!(matches!(
            decode_bdo("a", &numeric_name.finish()),
            Err(DecodeError::UnexpectedDataType { tag: 0x03, .. })
        ));

        let mut bad_dtype = BdoWriter::little();
        bad_dtype.raw(0xCC00, "<f", &[0; 8], 1);
        assert!(matches!(
            decode_bdo("a", &bad_dtype.finish()),
            Err(DecodeError::UnknownDataType { tag: 0xCC00, .. })
        ));
    }

    #[test]
    fn test_tokenize() {
        let mut file = grid(1, 1, 1);
        file.f64s(DATA, &[3.0]);
        let bytes = file.finish();
        let tokens = TokenReader::new(&bytes[24..], ByteOrder::Little)
            .tokenize()
            .unwrap();
        let tags: Vec<u64> = tokens.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![0x00, 0x03, 0xCC05, DIMENSIONS, DATA]);
        assert_eq!(tokens[0].items[0].len(), 80);
    }
}
