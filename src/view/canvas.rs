use std::io::{stdout, Write};

/// Character buffer covering the whole grid, redrawn on every frame.
pub struct Canvas {
    lines: Vec<String>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        let lines = (0..height)
            .map(|_| (0..width).map(|_| fill).collect::<String>())
            .collect();
        Self {
            lines,
            width,
            height,
        }
    }

    /// Writes one glyph; coordinates outside the canvas are ignored.
    pub fn set(&mut self, col: usize, line: usize, ch: char) {
        if col >= self.width || line >= self.height {
            return;
        }
        let target = &mut self.lines[line];
        let range = target
            .char_indices()
            .nth(col)
            .map(|(start, old)| start..start + old.len_utf8())
            .unwrap();
        target.replace_range(range, &ch.to_string());
    }

    pub fn display(&self) {
        let clear = termion::clear::All;
        print!("{clear}");
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            print!("{goto}{line}");
        }
        stdout().flush().unwrap();
    }
}
