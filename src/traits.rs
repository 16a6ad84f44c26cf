use std::fmt::{
    self,
    Write,
};

/// Indentation emitted per level of depth when rendering.
pub const INDENT: &str = "   ";

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Measure {
    /// Aggregate size in KB, computed on every call. Saturates at `u64::MAX`.
    fn total_size(&self) -> u64;
}

/// Line-oriented rendering of a node and, for directories, everything below
/// it. Each emitted line is prefixed with `depth` copies of [`INDENT`] and
/// terminated by a newline.
pub trait Render {
    fn render<W>(&self, out: &mut W, depth: usize) -> fmt::Result
    where
        W: Write;
}

pub fn indent<W>(out: &mut W, depth: usize) -> fmt::Result
where
    W: Write,
{
    (0..depth).try_for_each(|_| out.write_str(INDENT))
}
