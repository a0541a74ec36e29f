use std::io::{self, Write};

/// Destination for the words taken off the word channel.
///
/// The consumer hands each word to its sink as soon as it is received.
pub trait WordSink {
    fn accept(&mut self, word: &str) -> io::Result<()>;
}

/// Writes one word per line to any `Write`.
///
/// Used with stdout by the binary.
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> WordSink for LineSink<W> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", word)
    }
}

/// Collecting sink, handy for tests and for callers that post-process words.
impl WordSink for Vec<String> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        self.push(word.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_sink_writes_one_word_per_line() {
        let mut sink = LineSink::new(Vec::new());
        sink.accept("feed").unwrap();
        sink.accept("the").unwrap();
        sink.accept("monkey").unwrap();

        let out = sink.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "feed\nthe\nmonkey\n");
    }

    #[test]
    fn flush_keeps_the_sink_usable() {
        let mut sink = LineSink::new(Vec::new());
        sink.accept("feed").unwrap();
        sink.flush().unwrap();
        sink.accept("the").unwrap();

        let out = sink.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "feed\nthe\n");
    }

    #[test]
    fn vec_sink_collects_words() {
        let mut sink: Vec<String> = Vec::new();
        sink.accept("feed").unwrap();
        assert_eq!(sink, vec!["feed".to_string()]);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_sink_surfaces_write_errors() {
        let mut sink = LineSink::new(BrokenPipe);
        let err = sink.accept("feed").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
