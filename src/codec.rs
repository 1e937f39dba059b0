//! Resolution codec
//!
//! A resolution travels as its 4-byte signed integer code. Unknown codes
//! decode to [`Resolution::Unrecognized`] rather than failing, so decoding an
//! encoded value always gives the original back.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Result;
use crate::slab::Resolution;

/// Size of an encoded resolution in bytes
pub const ENCODED_LEN: usize = 4;

/// Encode a resolution with bincode
pub fn encode_binary(resolution: Resolution) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&resolution)?)
}

/// Decode a bincode-encoded resolution
pub fn decode_binary(bytes: &[u8]) -> Result<Resolution> {
    Ok(bincode::deserialize(bytes)?)
}

/// Encode a resolution as a JSON number
pub fn to_json(resolution: Resolution) -> Result<String> {
    Ok(serde_json::to_string(&resolution)?)
}

/// Decode a resolution from a JSON number
pub fn from_json(json: &str) -> Result<Resolution> {
    Ok(serde_json::from_str(json)?)
}

/// Write a resolution code to a stream, little endian
pub fn write_resolution<W: Write>(writer: &mut W, resolution: Resolution) -> Result<()> {
    writer.write_i32::<LittleEndian>(resolution.to_i32())?;
    Ok(())
}

/// Read a resolution code from a stream, little endian
pub fn read_resolution<R: Read>(reader: &mut R) -> Result<Resolution> {
    let code = reader.read_i32::<LittleEndian>()?;
    Ok(Resolution::from_i32(code))
}
