//! Credentials file layout
//!
//! Records are two consecutive lines: the username, then the password digest
//! in lowercase hex. Each line ends with a single `\n`. There is no header,
//! count, or checksum. Both [`CredentialStore`](super::CredentialStore) and
//! [`CredentialVerifier`](super::CredentialVerifier) go through this module.

use std::io::{self, BufRead};

pub const LINE_TERMINATOR: u8 = b'\n';

/// Encodes one record as a single buffer so it can be appended in one write.
pub fn encode_record(username: &[u8], digest_hex: &str) -> Vec<u8> {
    let mut record = Vec::with_capacity(username.len() + digest_hex.len() + 2);
    record.extend_from_slice(username);
    record.push(LINE_TERMINATOR);
    record.extend_from_slice(digest_hex.as_bytes());
    record.push(LINE_TERMINATOR);
    record
}

/// Reads the next line as raw bytes with its terminator removed.
///
/// Returns `Ok(None)` at end of file. A final line without a terminator is
/// returned as-is.
pub fn read_line<'a, R: BufRead>(reader: &mut R, buf: &'a mut Vec<u8>) -> io::Result<Option<&'a [u8]>> {
    buf.clear();
    if reader.read_until(LINE_TERMINATOR, buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&LINE_TERMINATOR) {
        buf.pop();
    }
    Ok(Some(buf.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_encode_record_layout() {
        let record = encode_record(b"alice", "00ff");
        assert_eq!(record, b"alice\n00ff\n");
    }

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut reader = Cursor::new(b"alice\n  \r\nlast".to_vec());
        let mut buf = Vec::new();

        assert_eq!(read_line(&mut reader, &mut buf).unwrap(), Some(&b"alice"[..]));
        assert_eq!(read_line(&mut reader, &mut buf).unwrap(), Some(&b"  \r"[..]));
        assert_eq!(read_line(&mut reader, &mut buf).unwrap(), Some(&b"last"[..]));
        assert_eq!(read_line(&mut reader, &mut buf).unwrap(), None);
    }

    #[test]
    fn test_read_line_keeps_non_utf8_bytes() {
        let mut reader = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf).unwrap(), Some(&[0xff, 0xfe][..]));
    }
}
