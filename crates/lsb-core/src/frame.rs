//! The frame is the self-describing unit hidden in a container.
//!
//! All fields are written in this fixed order, every byte most significant bit first:
//!
//! | bytes | content                                  |
//! |-------|------------------------------------------|
//! | 1     | extension length `n`                     |
//! | n     | extension, printable ASCII, no leading `.` |
//! | 4     | payload length `m`, unsigned big endian  |
//! | m     | payload, verbatim                        |
//!
//! Changing any of the constants below breaks every image written before.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::bit_stream::BitStream;
use crate::error::LsbError;
use crate::media::capacity::required_bits;
use crate::result::Result;

/// width of the extension length field
pub const EXTENSION_LENGTH_BYTES: usize = 1;
/// width of the payload length field
pub const PAYLOAD_LENGTH_BYTES: usize = 4;
/// both length fields together
pub const HEADER_BYTES: usize = EXTENSION_LENGTH_BYTES + PAYLOAD_LENGTH_BYTES;
pub const MAX_EXTENSION_LEN: usize = u8::MAX as usize;
pub const MAX_PAYLOAD_LEN: u64 = u32::MAX as u64;

/// A payload together with the extension of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    extension: String,
    payload: Vec<u8>,
}

impl Frame {
    /// Fails with `InvalidExtension` or `PayloadTooLarge` when the values cannot be framed.
    pub fn new<S: Into<String>>(extension: S, payload: Vec<u8>) -> Result<Self> {
        let extension = extension.into();
        validate_extension(&extension)?;
        validate_payload_len(payload.len())?;

        Ok(Self { extension, payload })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.extension, self.payload)
    }

    /// number of carrier bits this frame occupies
    pub fn bit_len(&self) -> usize {
        required_bits(self.extension.len(), self.payload.len())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.extension, &self.payload)
    }

    pub fn to_bit_stream(&self) -> BitStream {
        BitStream::from_bytes(self.to_bytes())
    }

    /// Parses a bitstream written by [`Frame::to_bit_stream`].
    ///
    /// Any inconsistency between the declared lengths and the supplied bits is
    /// reported as `MalformedFrame`.
    pub fn from_bit_stream(bits: &BitStream) -> Result<Self> {
        if bits.len() % 8 != 0 {
            return Err(LsbError::MalformedFrame(format!(
                "{} bits do not form whole bytes",
                bits.len()
            )));
        }
        let bytes = bits.as_bytes();
        let mut cursor = Cursor::new(bytes);

        let extension_len = cursor
            .read_u8()
            .map_err(|_| LsbError::MalformedFrame("the extension length is missing".into()))?
            as usize;
        let extension = read_field(&mut cursor, extension_len, "extension")?;
        let extension = String::from_utf8(extension)
            .map_err(|_| LsbError::MalformedFrame("the extension is not valid text".into()))?;
        validate_extension(&extension).map_err(|e| LsbError::MalformedFrame(e.to_string()))?;

        let payload_len = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| LsbError::MalformedFrame("the payload length is missing".into()))?
            as usize;
        let payload = read_field(&mut cursor, payload_len, "payload")?;

        let trailing = bytes.len() - cursor.position() as usize;
        if trailing != 0 {
            return Err(LsbError::MalformedFrame(format!(
                "{trailing} bytes follow the payload"
            )));
        }
        debug!(
            "Parsed frame: extension {extension:?}, payload {} bytes",
            payload.len()
        );

        Ok(Self { extension, payload })
    }
}

/// Serializes `extension` and `payload` into the frame bitstream without taking ownership.
pub fn build(extension: &str, payload: &[u8]) -> Result<BitStream> {
    validate_extension(extension)?;
    validate_payload_len(payload.len())?;

    Ok(BitStream::from_bytes(encode(extension, payload)))
}

/// Counterpart of [`build`].
pub fn parse(bits: &BitStream) -> Result<Frame> {
    Frame::from_bit_stream(bits)
}

/// the rules an extension has to follow on both sides of the codec
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(LsbError::invalid_extension(extension, "must not be empty"));
    }
    if extension.len() > MAX_EXTENSION_LEN {
        return Err(LsbError::invalid_extension(
            extension,
            format!(
                "is {} bytes long, at most {MAX_EXTENSION_LEN} bytes fit",
                extension.len()
            ),
        ));
    }
    if extension.starts_with('.') {
        return Err(LsbError::invalid_extension(
            extension,
            "must not start with a dot",
        ));
    }
    if !extension.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(LsbError::invalid_extension(
            extension,
            "must consist of printable ASCII characters",
        ));
    }
    // it ends up in a file name
    if extension.contains(['/', '\\']) {
        return Err(LsbError::invalid_extension(
            extension,
            "must not contain a path separator",
        ));
    }

    Ok(())
}

fn validate_payload_len(len: usize) -> Result<()> {
    if len as u64 > MAX_PAYLOAD_LEN {
        return Err(LsbError::PayloadTooLarge(len));
    }

    Ok(())
}

fn encode(extension: &str, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_BYTES + extension.len() + payload.len());
    buffer.push(extension.len() as u8);
    buffer.extend_from_slice(extension.as_bytes());
    buffer.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buffer.extend_from_slice(payload);

    buffer
}

fn read_field(cursor: &mut Cursor<&[u8]>, len: usize, field: &str) -> Result<Vec<u8>> {
    let remaining = cursor.get_ref().len() - cursor.position() as usize;
    if len > remaining {
        return Err(LsbError::MalformedFrame(format!(
            "the {field} declares {len} bytes but only {remaining} bytes remain"
        )));
    }
    let mut buf = vec![0; len];
    cursor.read_exact(&mut buf)?;

    Ok(buf)
}
