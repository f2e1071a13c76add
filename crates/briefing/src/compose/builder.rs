//! Block joiner for assembled text.

/// Separator placed between consecutive blocks.
pub const SEPARATOR: &str = "\n\n";

/// Builder that joins text blocks with [`SEPARATOR`].
///
/// Empty blocks are skipped, so a block with nothing to say never leaves a
/// stray blank paragraph behind.
///
/// # Example
///
/// ```
/// use briefing::compose::DocumentBuilder;
///
/// let text = DocumentBuilder::new()
///     .block("first")
///     .block("")
///     .block_if(false, || "hidden".into())
///     .block_if(true, || "second".into())
///     .build();
///
/// assert_eq!(text, "first\n\nsecond");
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    blocks: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block. Skipped if `content` is empty.
    pub fn block(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(content);
        }
        self
    }

    /// Conditionally append a block.
    ///
    /// The `content_fn` is only called when `condition` is true.
    pub fn block_if(self, condition: bool, content_fn: impl FnOnce() -> String) -> Self {
        if condition {
            self.block(content_fn())
        } else {
            self
        }
    }

    /// Number of non-empty blocks so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn build(self) -> String {
        self.blocks.join(SEPARATOR)
    }
}
