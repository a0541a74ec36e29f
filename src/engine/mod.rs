pub mod consumer;
pub mod emitter;
pub mod session;
pub mod word_cycle;

pub use consumer::{Consumer, ConsumerReport};
pub use emitter::{EmitterHandle, EmitterReport, StopReason, StopSignal, WordEmitter};
pub use session::{Session, SessionSummary};
pub use word_cycle::WordCycle;
