//! README Rewriter
//!
//! Turns crate-level documentation into README text. Inside fenced blocks,
//! hidden `# ` doc-test lines are dropped, `##` escapes lose one `#`, and
//! ```` ```rust ```` fences lose any trailing attributes.

pub mod engine;
pub mod probe;

pub use engine::{RewriteStats, Rewriter};

/// Rewrite a whole document given as lines
///
/// Lines keep their trailing newline; the output has the same order and at
/// most as many lines as the input.
pub fn rewrite_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rewrite_lines_with_stats(lines).0
}

/// Like [`rewrite_lines`], also returning the pass counters
pub fn rewrite_lines_with_stats<I, S>(lines: I) -> (Vec<String>, RewriteStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rewriter = Rewriter::new();
    let out = lines
        .into_iter()
        .filter_map(|line| rewriter.rewrite_line(line.as_ref()))
        .collect();
    (out, rewriter.finish())
}

/// Rewrite a document held as a single string
pub fn rewrite_str(text: &str) -> String {
    rewrite_lines(text.split_inclusive('\n')).concat()
}
