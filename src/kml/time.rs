//! TimeStamp and TimeSpan blocks.

use std::fmt;

use crate::buffer::{bprintf, bprintf_noindent};

use super::Kml;

/// A possibly partial instant.
///
/// Components are rendered in order (year, month, day, hour, minute,
/// second) and rendering stops at the first missing one, so `2008` with
/// no month but a day still renders as `2008`. A full value ends in `Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl Time {
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn with_second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    /// Every component, `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(year) = self.year else {
            return Ok(());
        };
        write!(f, "{year}")?;

        let rest = [
            ("-", self.month),
            ("-", self.day),
            ("T", self.hour),
            (":", self.minute),
            (":", self.second),
        ];
        for (separator, component) in rest {
            let Some(value) = component else {
                return Ok(());
            };
            write!(f, "{separator}{value:02}")?;
        }

        f.write_str("Z")
    }
}

impl Kml {
    /// Open a `<TimeStamp>` and its inline `<when>` element.
    pub fn timestamp_header(&mut self) {
        let buf = &mut self.buf;
        bprintf!(buf, "<TimeStamp>\n");
        buf.push_indent();
        bprintf!(buf, "<when>");
    }

    pub fn timestamp_footer(&mut self) {
        let buf = &mut self.buf;
        bprintf_noindent!(buf, "</when>\n");
        buf.pop_indent();
        bprintf!(buf, "</TimeStamp>\n");
    }

    pub fn timespan_header(&mut self) {
        bprintf!(self.buf, "<TimeSpan>\n");
        self.buf.push_indent();
    }

    pub fn timespan_footer(&mut self) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</TimeSpan>\n");
    }

    pub fn begin_header(&mut self) {
        bprintf!(self.buf, "<begin>");
    }

    pub fn begin_footer(&mut self) {
        bprintf_noindent!(self.buf, "</begin>\n");
    }

    pub fn end_header(&mut self) {
        bprintf!(self.buf, "<end>");
    }

    pub fn end_footer(&mut self) {
        bprintf_noindent!(self.buf, "</end>\n");
    }

    /// Write a time value inline, continuing the current line.
    pub fn time(&mut self, time: &Time) {
        bprintf_noindent!(self.buf, "{}", time);
    }

    /// A complete `<TimeStamp>` block for one instant.
    pub fn timestamp(&mut self, when: &Time) {
        self.timestamp_header();
        self.time(when);
        self.timestamp_footer();
    }

    /// A complete `<TimeSpan>` block; either bound may be left open.
    pub fn timespan(&mut self, begin: Option<&Time>, end: Option<&Time>) {
        self.timespan_header();
        if let Some(begin) = begin {
            self.begin_header();
            self.time(begin);
            self.begin_footer();
        }
        if let Some(end) = end {
            self.end_header();
            self.time(end);
            self.end_footer();
        }
        self.timespan_footer();
    }
}
