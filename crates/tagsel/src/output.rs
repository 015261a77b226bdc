use crate::input::Game;
use std::io::{self, ErrorKind, Write};

/// Echo the selected games. A reader that stops early (`tagsel | head`)
/// is not an error.
pub fn write_games<W: Write>(out: &mut W, games: &[&Game]) -> io::Result<()> {
    let written = games
        .iter()
        .try_for_each(|game| out.write_all(game.text.as_bytes()))
        .and_then(|()| out.flush());
    match written {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_games;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    struct ReadOnly;

    impl Write for ReadOnly {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::PermissionDenied))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_game_text() {
        let games = parse_games("[Event \"A\"]\n\n1. e4 1-0\n").unwrap();
        let selected: Vec<_> = games.iter().collect();
        let mut out = Vec::new();
        write_games(&mut out, &selected).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[Event \"A\"]\n\n1. e4 1-0\n");
    }

    #[test]
    fn test_broken_pipe_is_clean() {
        let games = parse_games("[Event \"A\"]\n").unwrap();
        let selected: Vec<_> = games.iter().collect();
        assert!(write_games(&mut ClosedPipe, &selected).is_ok());
    }

    #[test]
    fn test_other_errors_reported() {
        let games = parse_games("[Event \"A\"]\n").unwrap();
        let selected: Vec<_> = games.iter().collect();
        let err = write_games(&mut ReadOnly, &selected).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }
}
