//! Output writer
//!
//! The writer owns all mutable compile state: the append-only output
//! buffer, the current nesting depth, and the stack of pending closers.
//! Every emission is indented with one literal tab per depth level and
//! terminated with a newline; the buffer is trimmed exactly once, when the
//! writer is finished.

/// Buffered writer with an explicit closer stack.
///
/// Invariant: `closers.len() == depth` between lines. The two only diverge
/// transiently inside [`Writer::write_shallower`], which renders an
/// else-continuation one level up without touching the stack.
#[derive(Debug, Default)]
pub struct Writer {
    buffer: String,
    depth: usize,
    closers: Vec<String>,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of still-open containers.
    pub fn open_closers(&self) -> usize {
        self.closers.len()
    }

    /// Append one output line at the current depth.
    pub fn write(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push('\t');
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append one output line a single level shallower than the current
    /// depth, leaving depth and stack untouched.
    ///
    /// This exists for else-continuations: the `else:` marker must line up
    /// with its `if` while the `endif` pushed by the `if` stays pending.
    pub fn write_shallower(&mut self, text: &str) {
        let depth = self.depth;
        self.depth = depth.saturating_sub(1);
        self.write(text);
        self.depth = depth;
    }

    /// Open a container: remember its closer and deepen by one level.
    pub fn push_closer(&mut self, closer: String) {
        self.closers.push(closer);
        self.depth += 1;
    }

    /// Close the innermost open container, emitting its closer at the
    /// depth of the line that opened it.
    pub fn pop_closer(&mut self) {
        if let Some(closer) = self.closers.pop() {
            self.depth -= 1;
            self.write(&closer);
        }
    }

    /// Close every remaining container (innermost first) and return the
    /// trimmed output.
    pub fn finish(mut self) -> String {
        while !self.closers.is_empty() {
            self.pop_closer();
        }
        self.buffer.trim().to_string()
    }
}
