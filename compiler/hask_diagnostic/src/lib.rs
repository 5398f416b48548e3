//! Diagnostic system for reporting lexical errors.
//!
//! A [`Diagnostic`] carries an [`ErrorCode`] for searchability, a message, the
//! 1-based position it refers to, and optional notes and suggestions. An
//! [`emitter::DiagnosticEmitter`] writes them out as text or JSON.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
