#![allow(dead_code)]
//! A tiny line-oriented text buffer built on [`Vector`], exercising the public API the way a
//! downstream crate would.

use log::debug;
use simplevec::prelude::*;

/// Text held as one `String` per line.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineBuffer {
    lines: Vector<String>,
}

impl LineBuffer {
    /// An empty buffer with room for `lines` lines.
    pub fn with_room_for(lines: usize) -> Self {
        LineBuffer {
            lines: Vector::from(reserve(lines)),
        }
    }

    /// Splits `text` on `'\n'`.
    pub fn parse(text: &str) -> Self {
        LineBuffer {
            lines: text.split('\n').map(String::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    pub fn line(&self, number: usize) -> Result<&str, Error> {
        self.lines.at(number).map(String::as_str)
    }

    pub fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Inserts `line` before line `number` and returns it for further editing.
    ///
    /// # Panics
    ///
    /// Panics if `number > self.len()`.
    pub fn insert(&mut self, number: usize, line: &str) -> &mut String {
        debug!("insert line {} of {}", number, self.lines.len());
        self.lines.insert(number, line.to_string())
    }

    /// Removes line `number`, or does nothing if there is no such line.
    pub fn delete(&mut self, number: usize) -> Option<String> {
        let removed = self.lines.erase(number);
        if removed.is_none() {
            debug!("delete past end: line {} of {}", number, self.lines.len());
        }
        removed
    }

    /// Pads with empty lines, or cuts trailing lines, to exactly `lines` lines.
    pub fn set_line_count(&mut self, lines: usize) {
        self.lines.resize(lines);
    }

    /// Removes trailing empty lines.
    pub fn trim_end(&mut self) {
        while self.lines.last().map_or(false, String::is_empty) {
            self.lines.pop();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Swaps the whole contents with `other`.
    pub fn swap(&mut self, other: &mut LineBuffer) {
        self.lines.swap_with(&mut other.lines);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line);
        }
        out
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplevec::growth::grown_capacity;

    #[test]
    fn reserve_then_fill() {
        let mut buf = LineBuffer::with_room_for(3);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
        buf.append("one");
        buf.append("two");
        buf.append("three");
        assert_eq!(buf.capacity(), 3);
        buf.append("four");
        assert_eq!(buf.capacity(), 6);
        assert_eq!(buf.render(), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn edit_session() {
        let mut buf = LineBuffer::parse("a\nb\nc");
        buf.insert(1, "inserted").push_str("!");
        assert_eq!(buf.line(1), Ok("inserted!"));
        assert_eq!(buf.delete(0).as_deref(), Some("a"));
        assert_eq!(buf.delete(3), None);
        buf.set_line_count(5);
        assert_eq!(buf.render(), "inserted!\nb\nc\n\n");
        buf.trim_end();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.line(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn copies_are_independent() {
        let original = LineBuffer::parse("x\ny");
        let mut copy = original.clone();
        copy.insert(0, "new");
        copy.delete(2);
        assert_eq!(original.render(), "x\ny");
        assert_eq!(copy.render(), "new\nx");

        let mut target = LineBuffer::parse("1\n2\n3\n4");
        target.clone_from(&original);
        assert_eq!(target, original);
    }

    #[test]
    fn swap_and_take() {
        let mut a = LineBuffer::parse("a");
        let mut b = LineBuffer::parse("b1\nb2");
        a.swap(&mut b);
        assert_eq!(a.render(), "b1\nb2");
        assert_eq!(b.render(), "a");

        let taken = core::mem::take(&mut a);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
        assert_eq!(taken.into_lines(), ["b1", "b2"]);
    }

    #[test]
    fn buffers_order_line_by_line() {
        let a = LineBuffer::parse("abc\nd");
        let b = LineBuffer::parse("abc\ne");
        let c = LineBuffer::parse("abc");
        assert!(a < b);
        assert!(c < a);
        assert!(b >= a);
        assert_eq!(a.clone().max(b.clone()), b);
    }

    #[test]
    fn growth_follows_doubling() {
        let mut buf = LineBuffer::default();
        let mut expected = 0;
        for i in 0..20 {
            if buf.len() == buf.capacity() {
                expected = grown_capacity(expected, i + 1).unwrap();
            }
            buf.append("");
            assert_eq!(buf.capacity(), expected);
        }
    }

    #[test]
    fn clear_keeps_room() {
        let mut buf = LineBuffer::parse("a\nb\nc\nd");
        let capacity = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), capacity);
    }

    #[cfg(not(miri))]
    #[test]
    fn compile_errors_are_good() {
        let t = trybuild::TestCases::new();
        t.compile_fail("shouldfail/*.rs");
    }
}
