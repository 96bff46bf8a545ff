//! Text sink: one line per pattern.
//!
//! Each itemset renders as its symbols followed by the `-1` terminator, then
//! the absolute support: `1 2 -1 3 -1 #SUP: 2`. With sequence ids enabled the
//! line ends with `#SID: 0 2`.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::pattern::SequentialPattern;
use crate::output::PatternSink;

/// Itemset terminator token.
pub const ITEMSET_END: &str = "-1";

/// Renders a pattern in the line format described above.
pub fn render_pattern<K>(pattern: &SequentialPattern<K>, show_sequence_ids: bool) -> String
where
    K: SymbolLike + Display,
{
    let mut line = String::new();
    for set in pattern.itemsets() {
        for s in set.iter() {
            line.push_str(&s.to_string());
            line.push(' ');
        }
        line.push_str(ITEMSET_END);
        line.push(' ');
    }
    line.push_str("#SUP: ");
    line.push_str(&pattern.support().to_string());
    if show_sequence_ids {
        line.push_str(" #SID: ");
        line.push_str(&pattern.support_set().iter().join(" "));
    }
    line
}

/// Streams patterns to any [`Write`] implementation.
pub struct WriterSink<W: Write> {
    writer: W,
    show_sequence_ids: bool,
    written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_sequence_ids: false,
            written: 0,
        }
    }

    /// Appends `#SID:` with the supporting sequence ids to every line.
    pub fn show_sequence_ids(mut self, on: bool) -> Self {
        self.show_sequence_ids = on;
        self
    }

    /// Lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<K, W> PatternSink<K> for WriterSink<W>
where
    K: SymbolLike + Display,
    W: Write,
{
    fn save_pattern(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError> {
        writeln!(
            self.writer,
            "{}",
            render_pattern(pattern, self.show_sequence_ids)
        )?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), MiningError> {
        self.writer.flush()?;
        Ok(())
    }
}
