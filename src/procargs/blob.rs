//! Cursor over the `kern.procargs2` blob.
//!
//! Layout, as the kernel writes it:
//!
//! ```text
//! [argc: i32][exec path\0][\0 padding...][argv0\0][argv1\0]...[envp...]
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LoginError;

/// The pieces of the blob the trampoline cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcArgs {
    pub argc: usize,
    pub executable: PathBuf,
    /// Original argv, argv[0] included. At most `argc` entries.
    pub argv: Vec<OsString>,
}

impl ProcArgs {
    /// First byte of the original argv[0], if any.
    pub fn argv0_first(&self) -> Option<u8> {
        self.argv.first().and_then(|a| a.as_encoded_bytes().first().copied())
    }
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Native-endian `i32` argument count.
    fn read_count(&mut self) -> Result<i32, LoginError> {
        const WIDTH: usize = std::mem::size_of::<i32>();
        let bytes = self
            .buf
            .get(self.pos..self.pos + WIDTH)
            .ok_or_else(|| LoginError::malformed("blob shorter than argc"))?;
        let mut word = [0u8; WIDTH];
        word.copy_from_slice(bytes);
        self.pos += WIDTH;
        Ok(i32::from_ne_bytes(word))
    }

    /// Bytes up to the next NUL; the cursor ends just past the NUL.
    fn read_cstr(&mut self) -> Result<&'a [u8], LoginError> {
        let buf = self.buf;
        let rest = &buf[self.pos.min(buf.len())..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| LoginError::malformed("unterminated string"))?;
        self.pos += len + 1;
        Ok(&rest[..len])
    }

    /// Skip the NUL run between the executable path and argv[0].
    fn skip_padding(&mut self) {
        while self.buf.get(self.pos) == Some(&0) {
            self.pos += 1;
        }
    }
}

/// Parse a blob fetched from the kernel.
pub fn parse(buf: &[u8]) -> Result<ProcArgs, LoginError> {
    let mut cursor = Cursor::new(buf);

    let argc = cursor.read_count()?;
    let argc = usize::try_from(argc)
        .map_err(|_| LoginError::malformed(format!("negative argc {argc}")))?;

    let executable = cursor.read_cstr()?;
    if executable.is_empty() {
        return Err(LoginError::malformed("empty executable path"));
    }
    let executable = PathBuf::from(os_string(executable));

    cursor.skip_padding();

    let mut argv = Vec::new();
    while argv.len() < argc && !cursor.is_at_end() {
        argv.push(os_string(cursor.read_cstr()?));
    }
    if argc > 0 && argv.is_empty() {
        return Err(LoginError::malformed("argv[0] missing"));
    }

    Ok(ProcArgs {
        argc,
        executable,
        argv,
    })
}

#[cfg(unix)]
fn os_string(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn os_string(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}
