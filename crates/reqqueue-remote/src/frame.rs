//! Length-prefixed frames
//!
//! Each frame is a 4-byte big-endian payload length followed by that many
//! bytes of UTF-8 JSON. Empty frames and frames over 16 MiB are rejected.

use crate::errors::{protocol_error, transport_error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{ErrorKind, Read, Write};

pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

/// Write one frame and flush
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    if payload.is_empty() || payload.len() > MAX_FRAME_LEN {
        return Err(protocol_error(
            "write_frame",
            format!("frame length {} out of range", payload.len()),
        ));
    }
    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| transport_error("write_frame_len", e))?;
    writer
        .write_all(payload)
        .map_err(|e| transport_error("write_frame_payload", e))?;
    writer.flush().map_err(|e| transport_error("flush", e))?;
    Ok(())
}

/// Read one frame; `None` if the peer closed before a new frame began
///
/// A stream that ends partway through the length prefix is a truncated
/// frame, not a clean close.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>> {
    let mut len_buf = [0u8; 4];
    loop {
        match reader.read(&mut len_buf[..1]) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(transport_error("read_frame_len", e)),
        }
    }
    reader
        .read_exact(&mut len_buf[1..])
        .map_err(|e| transport_error("read_frame_len", e))?;
    let len = u32::from_be_bytes(len_buf) as usize;

    if len == 0 {
        return Err(protocol_error("read_frame", "empty frame"));
    }
    if len > MAX_FRAME_LEN {
        return Err(protocol_error(
            "read_frame",
            format!("frame too large: {} bytes", len),
        ));
    }

    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| transport_error("read_frame_payload", e))?;
    tracing::debug!(len, "frame read");
    Ok(Some(payload))
}

/// Serialize `message` as JSON and write it as one frame
pub fn send<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<()> {
    let json = serde_json::to_vec(message)
        .map_err(|e| protocol_error("encode_message", e.to_string()))?;
    write_frame(writer, &json)
}

/// Read one frame and decode it as JSON
pub fn receive<R: Read, T: DeserializeOwned>(reader: &mut R) -> Result<Option<T>> {
    match read_frame(reader)? {
        Some(payload) => serde_json::from_slice(&payload)
            .map(Some)
            .map_err(|e| protocol_error("decode_message", e.to_string())),
        None => Ok(None),
    }
}
