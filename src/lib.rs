// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config loading + validation
pub mod engine;     // word emitter, consumer, session
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // output sinks
