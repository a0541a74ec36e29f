pub mod sink;

pub use sink::{LineSink, WordSink};
