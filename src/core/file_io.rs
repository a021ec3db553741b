use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Path spelling that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Opens `path` for reading; `-` reads stdin.
pub fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Creates (or truncates) `path` for writing. `None` or `-` writes stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if !is_stdio(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(io::stdout().lock())),
    }
}

/// The reader/writer pair a script works on.
pub struct IoPair {
    pub input: Box<dyn Read>,
    pub output: Box<dyn Write>,
}

impl IoPair {
    pub fn new(input: Box<dyn Read>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Copies input to output unchanged. This is the placeholder body a
    /// copied script replaces with its own transformation.
    pub fn pass_through(mut self) -> Result<u64> {
        let copied = io::copy(&mut self.input, &mut self.output)?;
        self.output.flush()?;
        tracing::debug!("Copied {} bytes", copied);
        Ok(copied)
    }
}
