use std::io::{stdin, stdout, Write};
use std::sync::mpsc::Sender;

use termion::{event::Key, input::TermRead};

pub use canvas::Canvas;
mod canvas;

use crate::{Bounds, CellRenderer, DriverCmd, Pos};

const ALIVE_GLYPH: char = '#';
const DEAD_GLYPH: char = '·';

/// Draws the grid in the terminal, one character per cell. Rows map to
/// screen lines and columns to screen columns, origin at the top left,
/// with a key-help footer underneath.
pub struct TermView {
    canvas: Canvas,
    footer_line: u16,
}

impl TermView {
    pub fn new(bounds: Bounds) -> Self {
        let canvas = Canvas::new(bounds.cols() as usize, bounds.rows() as usize, DEAD_GLYPH);
        let footer_line = bounds.rows() as u16 + 1;
        Self {
            canvas,
            footer_line,
        }
    }
}

impl CellRenderer for TermView {
    fn spawn(&mut self, pos: Pos) {
        self.canvas.set(pos.y as usize, pos.x as usize, ALIVE_GLYPH);
    }

    fn despawn(&mut self, pos: Pos) {
        self.canvas.set(pos.y as usize, pos.x as usize, DEAD_GLYPH);
    }

    fn present(&mut self) {
        self.canvas.display();
        let goto = termion::cursor::Goto(1, self.footer_line);
        print!("{goto}[space] play/pause  [r] reset  [+/-] speed  [q] quit");
        stdout().flush().unwrap();
    }
}

/// Blocks on keyboard input and translates keys into driver commands.
/// Meant for its own thread; returns once the driver hangs up or a quit
/// key was forwarded.
pub fn input_loop(sender: Sender<DriverCmd>) {
    for key in stdin().keys() {
        let command = match key.unwrap() {
            Key::Char('q') => DriverCmd::Quit,
            Key::Char(' ') => DriverCmd::Toggle,
            Key::Char('r') => DriverCmd::Reset,
            Key::Char('+') => DriverCmd::Faster,
            Key::Char('-') => DriverCmd::Slower,
            _ => continue,
        };

        let quitting = matches!(command, DriverCmd::Quit);
        if sender.send(command).is_err() || quitting {
            break;
        }
    }
}
