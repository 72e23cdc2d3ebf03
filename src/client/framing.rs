//! Wire framing between the client and the HUD.
//!
//! Requests are a 4 byte big-endian length followed by the JSON payload.
//! Responses carry no prefix: a single receive into a bounded buffer is the
//! whole message.

use crate::client::AnswerMapping;
use crate::err;
use crate::result::HudResult;
use std::io::{self, ErrorKind, Read, Write};

pub const LENGTH_PREFIX_SIZE: usize = 4;

pub fn encode_frame(payload: &[u8]) -> HudResult<Vec<u8>> {
    let length = u32::try_from(payload.len()).map_err(|_| {
        err!(
            "Payload of {} bytes does not fit a {} byte length prefix",
            payload.len(),
            LENGTH_PREFIX_SIZE
        )
    })?;
    let mut frame = Vec::with_capacity(LENGTH_PREFIX_SIZE + payload.len());
    frame.extend_from_slice(&length.to_be_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

pub fn write_frame(writer: &mut impl Write, frame: &[u8]) -> io::Result<()> {
    writer.write_all(frame)?;
    writer.flush()
}

/// Reads a length prefixed frame and returns its payload.
pub fn read_frame(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
    reader.read_exact(&mut prefix)?;
    let mut payload = vec![0u8; u32::from_be_bytes(prefix) as usize];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Performs one receive of at most `buffer_size` bytes.
pub fn read_response(reader: &mut impl Read, buffer_size: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; buffer_size];
    let received = loop {
        match reader.read(&mut buffer) {
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            result => break result?,
        }
    };
    buffer.truncate(received);
    Ok(buffer)
}

pub fn decode_answers(response: &[u8]) -> HudResult<AnswerMapping> {
    Ok(serde_json::from_slice(response)?)
}
