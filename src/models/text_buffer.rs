//! Rope-backed text with a grapheme cursor.
//!
//! Mutations return the `EditOp` they performed so the caller can record it.

use super::edit_op::{EditOp, OpId};
use compact_str::CompactString;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;

/// Borrows the slice as `&str` when it is contiguous.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    /// (row, grapheme column)
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Streams the rope in chunks instead of materializing one string.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let last_row = self.len_lines().saturating_sub(1);
        let row = row.min(last_row);
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    pub fn move_cursor_to_end(&mut self) {
        let row = self.len_lines().saturating_sub(1);
        self.cursor = (row, self.line_grapheme_len(row));
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        (row < self.rope.len_lines()).then(|| slice_to_cow(self.rope.line(row)))
    }

    pub fn cursor_char_offset(&self) -> usize {
        self.pos_to_char(self.cursor)
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let line = slice_to_cow(self.rope.line(row));
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = slice_to_cow(self.rope.line(row));
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        without_newline.graphemes(true).count()
    }

    /// Inserts at the cursor and moves the cursor past the inserted text.
    pub fn insert_str_op(&mut self, s: &str, parent: OpId) -> EditOp {
        let cursor_before = self.cursor;
        let char_offset = self.cursor_char_offset();

        self.rope.insert(char_offset, s);

        let cursor_after = match s.rfind('\n') {
            Some(last_newline) => {
                let newlines = s.chars().filter(|&c| c == '\n').count();
                let tail = &s[last_newline + 1..];
                (cursor_before.0 + newlines, tail.graphemes(true).count())
            }
            None => (cursor_before.0, cursor_before.1 + s.graphemes(true).count()),
        };
        self.cursor = cursor_after;

        EditOp::insert(
            parent,
            char_offset,
            CompactString::from(s),
            cursor_before,
            cursor_after,
        )
    }

    /// Backspace. `None` at the start of the buffer.
    pub fn delete_backward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let (row, col) = self.cursor;
        let cursor_before = self.cursor;

        let (start, end, cursor_after) = if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            (start, end, (row, col - 1))
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let end = self.rope.line_to_char(row);
            (end - 1, end, (row - 1, prev_len))
        } else {
            return None;
        };

        let deleted = CompactString::from(slice_to_cow(self.rope.slice(start..end)).as_ref());
        self.rope.remove(start..end);
        self.cursor = cursor_after;

        Some(EditOp::delete(
            parent,
            start,
            end,
            deleted,
            cursor_before,
            cursor_after,
        ))
    }

    /// Delete key. `None` at the end of the buffer.
    pub fn delete_forward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let (row, col) = self.cursor;
        let line_len = self.line_grapheme_len(row);

        let (start, end) = if col < line_len {
            (self.pos_to_char((row, col)), self.pos_to_char((row, col + 1)))
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            (start, start + 1)
        } else {
            return None;
        };

        let deleted = CompactString::from(slice_to_cow(self.rope.slice(start..end)).as_ref());
        self.rope.remove(start..end);

        Some(EditOp::delete(
            parent,
            start,
            end,
            deleted,
            self.cursor,
            self.cursor,
        ))
    }

    /// Replaces the whole rope (undo/redo/reload) and clamps the cursor.
    pub fn set_rope(&mut self, rope: Rope) {
        self.rope = rope;
        let (row, col) = self.cursor;
        self.set_cursor(row, col);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
