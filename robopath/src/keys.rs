//! Keyboard layout for manual robot moves.

use robopath_core::Dir;

/// Map a move key to a direction. `q`/`e`/`z`/`c` are the diagonals and are
/// only recognised when `diagonal` is set.
pub fn dir_for_key(key: char, diagonal: bool) -> Option<Dir> {
    let dir = match key.to_ascii_lowercase() {
        'w' => Dir::N,
        'a' => Dir::W,
        's' => Dir::S,
        'd' => Dir::E,
        'q' => Dir::NW,
        'e' => Dir::NE,
        'z' => Dir::SW,
        'c' => Dir::SE,
        _ => return None,
    };
    if dir.is_diagonal() && !diagonal {
        return None;
    }
    Some(dir)
}
