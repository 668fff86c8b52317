//! Byte-wise file writer
//!
//! Opens one file and writes a fixed message into it one byte per `write`
//! call. Return values of `open` and `write` are never checked: the probe
//! only exists to exercise those two entry points.

use log::{debug, trace};

use crate::flags::OpenFlags;

/// NUL-terminated, the raw `open` ABI only receives a pointer.
pub const TARGET_PATH: &str = "text.txt\0";

pub const MESSAGE: &[u8] = b"\nroses are red\nviolets are blue\nI love Nachos\nand so do you\n\n";

pub const EXIT_SUCCESS: i32 = 0;

/// The two entry points the writer depends on.
pub trait FileSyscalls {
    fn open(&mut self, path: &str, flags: OpenFlags) -> isize;
    fn write(&mut self, fd: usize, buf: &[u8]) -> isize;
}

pub struct ByteWriter<'a, S: FileSyscalls> {
    sys: &'a mut S,
    fd: usize,
    message: &'a [u8],
    cursor: usize,
}

impl<'a, S: FileSyscalls> ByteWriter<'a, S> {
    /// Opens `path` for writing. The returned descriptor is used as is.
    pub fn acquire(sys: &'a mut S, path: &str, message: &'a [u8]) -> Self {
        let fd = sys.open(path, OpenFlags::CREATE | OpenFlags::WRONLY | OpenFlags::TRUNC);
        debug!("write1: opened {} as fd {}", path.trim_end_matches('\0'), fd);
        Self {
            sys,
            fd: fd as usize,
            message,
            cursor: 0,
        }
    }

    pub fn emit(&mut self, byte: u8) {
        self.sys.write(self.fd, &[byte]);
    }

    /// Emits the byte under the cursor and advances. Returns `false` once the
    /// message is exhausted.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let byte = self.message[self.cursor];
        trace!("write1: byte {} = {:#04x}", self.cursor, byte);
        self.emit(byte);
        self.cursor += 1;
        true
    }

    pub fn run(mut self) -> i32 {
        while self.step() {}
        debug!("write1: wrote {} bytes to fd {}", self.cursor, self.fd);
        EXIT_SUCCESS
    }

    #[cfg(all(unix, test))]
    pub fn fd(&self) -> usize {
        self.fd
    }

    #[cfg(all(unix, test))]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor == self.message.len()
    }
}

pub fn write1<S: FileSyscalls>(sys: &mut S) -> i32 {
    ByteWriter::acquire(sys, TARGET_PATH, MESSAGE).run()
}

#[cfg(all(unix, test))]
mod test {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Open(String, OpenFlags),
        Write(usize, Vec<u8>),
    }

    /// In-memory stand-in for the kernel. Truncates on `TRUNC`, appends on
    /// every write, and records every call in order.
    #[derive(Default)]
    struct MemFs {
        files: HashMap<String, Vec<u8>>,
        fd_table: Vec<Option<String>>,
        calls: Vec<Call>,
        fail_open: bool,
        fail_write: bool,
    }

    impl MemFs {
        fn new() -> Self {
            // 0, 1 and 2 are taken by stdio
            Self {
                fd_table: vec![None, None, None],
                ..Default::default()
            }
        }

        fn content(&self, name: &str) -> Option<&[u8]> {
            self.files.get(name).map(Vec::as_slice)
        }

        fn writes(&self) -> impl Iterator<Item = (usize, &[u8])> {
            self.calls.iter().filter_map(|call| match call {
                Call::Write(fd, buf) => Some((*fd, buf.as_slice())),
                Call::Open(..) => None,
            })
        }
    }

    impl FileSyscalls for MemFs {
        fn open(&mut self, path: &str, flags: OpenFlags) -> isize {
            self.calls.push(Call::Open(path.to_string(), flags));
            if self.fail_open {
                return -1;
            }
            let name = path.trim_end_matches('\0').to_string();
            if !self.files.contains_key(&name) && !flags.contains(OpenFlags::CREATE) {
                return -1;
            }
            let file = self.files.entry(name.clone()).or_default();
            if flags.contains(OpenFlags::TRUNC) {
                file.clear();
            }
            self.fd_table.push(Some(name));
            (self.fd_table.len() - 1) as isize
        }

        fn write(&mut self, fd: usize, buf: &[u8]) -> isize {
            self.calls.push(Call::Write(fd, buf.to_vec()));
            if self.fail_write {
                return -1;
            }
            let Some(Some(name)) = self.fd_table.get(fd) else {
                return -1;
            };
            self.files.get_mut(name).unwrap().extend_from_slice(buf);
            buf.len() as isize
        }
    }

    #[test]
    fn test_message_literal() {
        assert_eq!(MESSAGE.len(), 61);
        assert_eq!(
            core::str::from_utf8(MESSAGE).unwrap(),
            "\nroses are red\nviolets are blue\nI love Nachos\nand so do you\n\n"
        );
        assert!(!MESSAGE.contains(&0));
    }

    #[test]
    fn test_fresh_destination() {
        let mut fs = MemFs::new();
        assert!(fs.content("text.txt").is_none());
        assert_eq!(write1(&mut fs), EXIT_SUCCESS);
        assert_eq!(fs.content("text.txt"), Some(MESSAGE));
    }

    #[test]
    fn test_one_write_per_byte() {
        let mut fs = MemFs::new();
        write1(&mut fs);
        let writes: Vec<_> = fs.writes().collect();
        assert_eq!(writes.len(), MESSAGE.len());
        for (i, (_, buf)) in writes.iter().enumerate() {
            assert_eq!(*buf, &MESSAGE[i..i + 1]);
        }
    }

    #[test]
    fn test_single_open_before_writes() {
        let mut fs = MemFs::new();
        write1(&mut fs);
        assert_eq!(
            fs.calls[0],
            Call::Open(
                TARGET_PATH.to_string(),
                OpenFlags::CREATE | OpenFlags::WRONLY | OpenFlags::TRUNC
            )
        );
        let opens = fs
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Open(..)))
            .count();
        assert_eq!(opens, 1);
        assert!(fs.writes().all(|(fd, _)| fd == 3));
    }

    #[test]
    fn test_existing_content_truncated() {
        let mut fs = MemFs::new();
        fs.files
            .insert("text.txt".to_string(), b"unrelated data that is long".to_vec());
        assert_eq!(write1(&mut fs), EXIT_SUCCESS);
        assert_eq!(fs.content("text.txt"), Some(MESSAGE));
    }

    #[test]
    fn test_existing_empty_destination() {
        let mut fs = MemFs::new();
        fs.files.insert("text.txt".to_string(), Vec::new());
        assert_eq!(write1(&mut fs), EXIT_SUCCESS);
        assert_eq!(fs.content("text.txt"), Some(MESSAGE));
    }

    #[test]
    fn test_failed_open_still_succeeds() {
        let mut fs = MemFs::new();
        fs.fail_open = true;
        assert_eq!(write1(&mut fs), EXIT_SUCCESS);
        // the bogus handle is used unchecked
        assert_eq!(fs.writes().count(), MESSAGE.len());
        assert!(fs.writes().all(|(fd, _)| fd == (-1isize) as usize));
        assert!(fs.content("text.txt").is_none());
    }

    #[test]
    fn test_failed_write_still_succeeds() {
        let mut fs = MemFs::new();
        fs.fail_write = true;
        assert_eq!(write1(&mut fs), EXIT_SUCCESS);
        assert_eq!(fs.writes().count(), MESSAGE.len());
        assert_eq!(fs.content("text.txt"), Some(&[][..]));
    }

    #[test]
    fn test_step_advances_cursor() {
        let mut fs = MemFs::new();
        let mut writer = ByteWriter::acquire(&mut fs, "short\0", b"ab");
        assert_eq!(writer.fd(), 3);
        assert_eq!(writer.cursor(), 0);
        assert!(!writer.is_done());
        assert!(writer.step());
        assert_eq!(writer.cursor(), 1);
        assert!(writer.step());
        assert!(writer.is_done());
        assert!(!writer.step());
        assert_eq!(writer.cursor(), 2);
        assert_eq!(fs.content("short"), Some(&b"ab"[..]));
        assert_eq!(fs.calls.len(), 3);
    }

    #[test]
    fn test_empty_message() {
        let mut fs = MemFs::new();
        let writer = ByteWriter::acquire(&mut fs, "empty\0", b"");
        assert!(writer.is_done());
        assert_eq!(writer.run(), EXIT_SUCCESS);
        assert_eq!(fs.writes().count(), 0);
        assert_eq!(fs.content("empty"), Some(&[][..]));
    }
}
