use std::io::{Stderr, Stdout, Write};
use std::string::FromUtf8Error;

/// Output and error streams handed to a command, so commands never reach for
/// the process streams themselves.
pub struct Writer {
    buffer: WriteBuffer,
    err: WriteBuffer,
}

impl Writer {
    pub fn new(buffer: WriteBuffer, err: WriteBuffer) -> Self {
        Self { buffer, err }
    }

    pub fn write_err(&mut self, message: String) -> std::io::Result<()> {
        writeln!(self.err, "{message}")
    }

    /// Returns whatever was captured on the output and error streams.
    pub fn into_strings(self) -> Result<(String, String), FromUtf8Error> {
        Ok((self.buffer.into_string()?, self.err.into_string()?))
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
}

impl WriteBuffer {
    // process streams keep nothing to read back
    fn into_string(self) -> Result<String, FromUtf8Error> {
        match self {
            WriteBuffer::Vec(vec) => String::from_utf8(vec),
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => Ok(String::new()),
        }
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
        }
    }
}
