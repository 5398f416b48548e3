//! Low-level scanning primitives for the hask lexer.
//!
//! This crate owns the pieces of the lexer that know nothing about tokens:
//!
//! - [`SourceBuffer`]: a copy of the source followed by a `0x00` sentinel,
//!   so lookahead never needs a bounds check.
//! - [`Cursor`]: a `Copy` byte cursor over that buffer.
//! - [`char_class`]: identifier/digit predicates and [`ByteSet`], the
//!   compact membership set used by the operator and punctuation tables.
//!
//! ```
//! use hask_lexer_core::SourceBuffer;
//!
//! let buf = SourceBuffer::new("f x");
//! let mut cursor = buf.cursor();
//! assert_eq!(cursor.current(), b'f');
//! cursor.advance();
//! assert_eq!(cursor.current(), b' ');
//! assert_eq!(cursor.peek(), b'x');
//! ```

pub mod char_class;
mod cursor;
mod source_buffer;

pub use char_class::ByteSet;
pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
