//! SHA-1 content hashing for content-addressed file names

use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 1024;

/// Returns the lowercase hex SHA-1 digest of `bytes`
pub fn sha1_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha1::digest(bytes))
}

/// Streams `reader` to the end and returns its lowercase hex SHA-1 digest
pub fn sha1_hex_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; BUFFER_SIZE];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Returns the lowercase hex SHA-1 digest of the file at `path`
pub fn sha1_hex_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    sha1_hex_reader(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_known_digests() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        // Longer than one buffer so the loop runs several times
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

        let streamed = sha1_hex_reader(Cursor::new(&data)).unwrap();

        assert_eq!(streamed, sha1_hex(&data));
        assert_eq!(streamed.len(), 40);
        assert!(streamed.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
