//! Error types for serialization and result decoding.

use std::fmt;

use thiserror::Error;

/// Kind of setup entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A body.
    Body,
    /// A zone.
    Zone,
    /// A material.
    Material,
    /// A detector.
    Detector,
    /// The beam.
    Beam,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Body => "Body",
            Self::Zone => "Zone",
            Self::Material => "Material",
            Self::Detector => "Detector",
            Self::Beam => "Beam",
        };
        f.write_str(name)
    }
}

/// Errors that abort converting a setup into engine input files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializeError {
    /// A required setup collection is empty.
    #[error("[serializer] incomplete setup: no {0} defined")]
    IncompleteSetup(&'static str),

    /// A single entity cannot be serialized.
    #[error("[serializer] {kind}{{Id: {id}}} -> {file}: {message}")]
    Entity {
        /// Kind of the offending entity.
        kind: EntityKind,
        /// Domain ID of the offending entity.
        id: i64,
        /// File being produced.
        file: &'static str,
        /// Error message.
        message: String,
    },

    /// A file-wide constraint is violated.
    #[error("[serializer] {file}: {message}")]
    General {
        /// File being produced.
        file: &'static str,
        /// Error message.
        message: String,
    },

    /// Writing into the output buffer failed.
    #[error("[serializer] formatting failed")]
    Format(#[from] std::fmt::Error),
}

impl SerializeError {
    /// Create an entity error.
    pub fn entity(kind: EntityKind, id: i64, file: &'static str, message: impl Into<String>) -> Self {
        Self::Entity {
            kind,
            id,
            file,
            message: message.into(),
        }
    }

    /// Create a file-wide error.
    pub fn general(file: &'static str, message: impl Into<String>) -> Self {
        Self::General {
            file,
            message: message.into(),
        }
    }
}

/// Result type for serialization.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Errors that abort decoding one binary result file.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// I/O error reading a result file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer ends before the file header does.
    #[error("file too short: {0} bytes, header needs 24")]
    TooShort(usize),

    /// Magic bytes do not match.
    #[error("bad magic number: expected \"xSH12A\", found {0:?}")]
    BadMagic(String),

    /// Byte order marker is neither `II` nor `MM`.
    #[error("unknown byte order marker {0:?}")]
    UnknownByteOrder(String),

    /// File format version is not supported.
    #[error("unsupported format version {0:?}, only \"0.6\" is supported")]
    UnsupportedVersion(String),

    /// A token claims more bytes than remain.
    #[error("truncated token 0x{tag:X} at offset {offset}: needs {needed} bytes, {available} available")]
    TruncatedToken {
        /// Tag ID, or 0 if the token header itself is cut.
        tag: u64,
        /// Offset of the token.
        offset: usize,
        /// Bytes required.
        needed: usize,
        /// Bytes remaining.
        available: usize,
    },

    /// Data type code has no recognizable item size.
    #[error("unknown data type {dtype:?} in token 0x{tag:X}")]
    UnknownDataType {
        /// Tag ID.
        tag: u64,
        /// Data type code.
        dtype: String,
    },

    /// Token has the wrong data type for its tag.
    #[error("token 0x{tag:X}: expected data type {expected:?}, got {actual:?}")]
    UnexpectedDataType {
        /// Tag ID.
        tag: u64,
        /// Required data type.
        expected: &'static str,
        /// Data type found.
        actual: String,
    },

    /// Token has the wrong number of items for its tag.
    #[error("token 0x{tag:X}: expected {expected} items, got {actual}")]
    UnexpectedItemCount {
        /// Tag ID.
        tag: u64,
        /// Required item count.
        expected: usize,
        /// Item count found.
        actual: usize,
    },

    /// Token carries no items.
    #[error("token 0x{0:X} has no items")]
    NoItems(u64),

    /// Tag ID has no handler.
    #[error("unknown tag 0x{0:X}")]
    UnknownTag(u64),

    /// Main data block arrived before the dimensions token.
    #[error("data block found before dimensions")]
    MissingDimensions,

    /// Bin counts whose product does not fit in `usize`.
    #[error("dimensions {x}x{y}x{z} overflow")]
    DimensionsOverflow { x: usize, y: usize, z: usize },

    /// Result file name does not belong to any detector.
    #[error("no detector is associated with file {0:?}")]
    UnknownDetectorFile(String),
}
