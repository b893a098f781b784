//! Growable, indent-aware text buffer.
//!
//! Every KML document owns one [`Buffer`]. Text is only ever appended:
//! there is no seek, removal, or in-place edit. Two append primitives are
//! provided:
//!
//! - [`Buffer::printf`] prefixes the current indent before writing, and is
//!   used for anything that starts a new line.
//! - [`Buffer::printf_noindent`] writes with no prefix, continuing the
//!   current line (coordinate lists, inline time values).
//!
//! Capacity is tracked explicitly so growth follows a fixed policy: the first
//! allocation is [`INITIAL_CAPACITY`] bytes, after which the capacity doubles
//! until the request fits. Room for one terminator byte is always kept
//! beyond the written text, so `capacity >= len + 1` holds once anything has
//! been written.

use std::fmt::{self, Write};

use log::{debug, warn};

/// Size of the first allocation, in bytes.
pub const INITIAL_CAPACITY: usize = 4096;

/// Spaces emitted per indent level.
pub const INDENT_SPACES: usize = 2;

/// Append-only text store with an indent level.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    text: String,
    capacity: usize,
    indent: usize,
}

impl Buffer {
    /// Create an empty buffer. Nothing is allocated until the first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarantee that `need` more bytes fit beyond the current length.
    ///
    /// Allocates [`INITIAL_CAPACITY`] on first use, then doubles the capacity
    /// until `capacity >= len + need`.
    pub fn ensure_capacity(&mut self, need: usize) {
        let before = self.capacity;
        if self.capacity == 0 {
            self.capacity = INITIAL_CAPACITY;
        }

        let required = self.text.len() + need;
        while self.capacity < required {
            self.capacity *= 2;
        }

        if self.capacity != before {
            debug!("buffer grew from {} to {} bytes", before, self.capacity);
        }

        if self.text.capacity() < self.capacity {
            self.text.reserve_exact(self.capacity - self.text.len());
        }
    }

    /// Append formatted text, prefixed by the current indent.
    ///
    /// Returns the number of bytes written, including the indent prefix.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> usize {
        let spaces = self.indent * INDENT_SPACES;
        self.append(spaces, args)
    }

    /// Append formatted text with no indent prefix.
    ///
    /// Returns the number of bytes written.
    pub fn printf_noindent(&mut self, args: fmt::Arguments<'_>) -> usize {
        self.append(0, args)
    }

    fn append(&mut self, spaces: usize, args: fmt::Arguments<'_>) -> usize {
        let rendered = measure(args);
        self.ensure_capacity(spaces + rendered + 1);

        let start = self.text.len();
        self.text.extend(std::iter::repeat_n(' ', spaces));
        match args.as_str() {
            Some(s) => self.text.push_str(s),
            // Writing into a String only fails if a Display impl reports an error.
            None => {
                let res = self.text.write_fmt(args);
                debug_assert!(res.is_ok(), "Display impl failed while appending");
            }
        }

        self.text.len() - start
    }

    /// Increase the indent level by one.
    pub fn push_indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indent level by one.
    ///
    /// The level saturates at zero; popping an empty level is a caller bug
    /// and is only reported through the log.
    pub fn pop_indent(&mut self) {
        if self.indent == 0 {
            warn!("indent popped below zero; unbalanced open/close calls");
            return;
        }
        self.indent -= 1;
    }

    /// Current indent level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Bytes allocated for the buffer (zero until the first write).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Everything written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Length in bytes of the rendered arguments, without keeping the text.
fn measure(args: fmt::Arguments<'_>) -> usize {
    if let Some(s) = args.as_str() {
        return s.len();
    }

    struct Counter(usize);

    impl fmt::Write for Counter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 += s.len();
            Ok(())
        }
    }

    let mut counter = Counter(0);
    let res = counter.write_fmt(args);
    debug_assert!(res.is_ok(), "Display impl failed while measuring");
    counter.0
}

/// Append to a [`Buffer`] with the current indent prefix.
macro_rules! bprintf {
    ($buf:expr, $($arg:tt)*) => {
        $buf.printf(format_args!($($arg)*))
    };
}

/// Append to a [`Buffer`] without an indent prefix.
macro_rules! bprintf_noindent {
    ($buf:expr, $($arg:tt)*) => {
        $buf.printf_noindent(format_args!($($arg)*))
    };
}

pub(crate) use bprintf;
pub(crate) use bprintf_noindent;
