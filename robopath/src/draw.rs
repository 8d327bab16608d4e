//! Board output, optionally coloured with crossterm.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use robopath_world::layout::{GOAL, HINT, PATH, ROBOT, WALL};

fn color_for(ch: char) -> Option<Color> {
    let (r, g, b) = match ch {
        ROBOT | PATH => (0x00, 0xd4, 0xff),
        GOAL => (0xff, 0x00, 0x00),
        HINT => (0xff, 0x00, 0xff),
        WALL => (0x0f, 0x34, 0x60),
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}

/// Write a rendered board. Without `color` the text is copied verbatim.
pub fn print_board(out: &mut impl Write, board: &str, color: bool) -> io::Result<()> {
    if !color {
        out.write_all(board.as_bytes())?;
        return out.flush();
    }
    for ch in board.chars() {
        match color_for(ch) {
            Some(c) => queue!(out, SetForegroundColor(c), Print(ch), ResetColor)?,
            None => queue!(out, Print(ch))?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_is_verbatim() {
        let mut buf = Vec::new();
        print_board(&mut buf, "R.\n.G\n", false).unwrap();
        assert_eq!(buf, b"R.\n.G\n");
    }

    #[test]
    fn colored_output_keeps_text() {
        let mut buf = Vec::new();
        print_board(&mut buf, "R#\n.G\n", true).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains('\u{1b}'));
        let visible: String = s.chars().filter(|c| "R#.G\n".contains(*c)).collect();
        assert_eq!(visible, "R#\n.G\n");
    }
}
