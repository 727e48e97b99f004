//! WAL Reader
//!
//! Handles reading entries from the WAL file.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{PdaError, Result};

use super::entry::{FrameHeader, HEADER_SIZE, MAX_PAYLOAD_SIZE};
use super::WalEntry;

/// Outcome of reading one frame
#[derive(Debug)]
pub enum Frame {
    /// A complete entry whose checksum matched
    Entry(WalEntry),

    /// Clean end of file on a frame boundary
    End,

    /// The file ends in the middle of a frame (interrupted write)
    Partial,

    /// A complete frame that fails validation
    Corrupt(String),
}

/// Reads entries from the WAL file
pub struct WalReader {
    reader: BufReader<File>,
    /// Offset just past the last complete, valid frame
    position: u64,
}

impl WalReader {
    /// Open a WAL file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            position: 0,
        })
    }

    /// Read the next frame without treating damage as an error
    pub fn read_frame(&mut self) -> Result<Frame> {
        let mut header = [0u8; HEADER_SIZE];
        match read_full(&mut self.reader, &mut header)? {
            0 => return Ok(Frame::End),
            n if n < HEADER_SIZE => return Ok(Frame::Partial),
            _ => {}
        }

        let header = FrameHeader::parse(&header);
        if header.len > MAX_PAYLOAD_SIZE {
            return Ok(Frame::Corrupt(format!(
                "frame at offset {} claims {} bytes (max {})",
                self.position, header.len, MAX_PAYLOAD_SIZE
            )));
        }

        let mut payload = vec![0u8; header.len as usize];
        if read_full(&mut self.reader, &mut payload)? < payload.len() {
            return Ok(Frame::Partial);
        }

        if crc32fast::hash(&payload) != header.crc {
            return Ok(Frame::Corrupt(format!(
                "checksum mismatch for lsn {} at offset {}",
                header.lsn, self.position
            )));
        }

        let entry = match WalEntry::decode_payload(&payload) {
            Ok(entry) if entry.lsn == header.lsn => entry,
            Ok(entry) => {
                return Ok(Frame::Corrupt(format!(
                    "header lsn {} does not match payload lsn {}",
                    header.lsn, entry.lsn
                )))
            }
            Err(e) => return Ok(Frame::Corrupt(e.to_string())),
        };

        self.position += (HEADER_SIZE + payload.len()) as u64;
        Ok(Frame::Entry(entry))
    }

    /// Read the next entry from the WAL
    ///
    /// Partial or corrupted frames are reported as `WalCorruption`.
    pub fn next_entry(&mut self) -> Result<Option<WalEntry>> {
        match self.read_frame()? {
            Frame::Entry(entry) => Ok(Some(entry)),
            Frame::End => Ok(None),
            Frame::Partial => Err(PdaError::WalCorruption(format!(
                "partial frame at offset {}",
                self.position
            ))),
            Frame::Corrupt(reason) => Err(PdaError::WalCorruption(reason)),
        }
    }

    /// Offset just past the last valid frame read so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Iterate over all valid entries
    pub fn entries(self) -> WalIterator {
        WalIterator {
            reader: self,
            done: false,
        }
    }
}

/// Iterator over WAL entries
pub struct WalIterator {
    reader: WalReader,
    done: bool,
}

impl Iterator for WalIterator {
    type Item = Result<WalEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Fill `buf` as far as the reader allows, returning the bytes read
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
