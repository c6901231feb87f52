use bumpalo::{Bump, collections::String};
use minivec::MiniVec;

/// Comment-stripped program text, kept line for line so token line numbers
/// stay valid against the original file.
#[derive(Debug)]
pub struct Source<'bump> {
    text: &'bump str,
    lines: MiniVec<&'bump str>,
}

impl<'bump> Source<'bump> {
    pub fn new(raw: &str, allocator: &'bump Bump) -> Self {
        let mut text = String::with_capacity_in(raw.len(), allocator);
        for (number, line) in raw.lines().enumerate() {
            if number > 0 {
                text.push('\n');
            }
            // `//` runs to the end of the line; a comment-only line stays as an empty one
            let code = match line.find("//") {
                Some(position) => &line[..position],
                None => line,
            };
            text.push_str(code.trim_end());
        }
        let text = text.into_bump_str();
        let lines = text.split('\n').collect::<MiniVec<_>>();

        Self { text, lines }
    }

    pub fn text(&self) -> &'bump str {
        self.text
    }

    /// Line `number`, counted from 1.
    pub fn line(&self, number: usize) -> Option<&'bump str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .copied()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
