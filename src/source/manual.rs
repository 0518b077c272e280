//! Interactive grid entry.

use super::{parse_int, GridSource, SourceError};
use crate::raster::{check_dimensions, pixel_from_value, Grid, MAX_HEIGHT, MAX_WIDTH};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Reads a grid typed by the user.
///
/// The user is asked for the height and width (in that order), then for
/// every pixel row by row. Values are whitespace separated and may be
/// spread over any number of lines. Input is consumed a line at a time so
/// prompts appear before the corresponding read.
pub struct ManualSource<R, W> {
    input: R,
    prompt: Option<W>,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ManualSource<R, W> {
    /// Creates a source that writes prompts to `prompt`.
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            input,
            prompt: Some(prompt),
            pending: VecDeque::new(),
        }
    }

    /// Creates a source that reads silently.
    pub fn quiet(input: R) -> Self {
        Self {
            input,
            prompt: None,
            pending: VecDeque::new(),
        }
    }

    fn say(&mut self, message: &str) -> Result<(), SourceError> {
        if let Some(out) = self.prompt.as_mut() {
            out.write_all(message.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Returns the next token, reading more lines as needed.
    fn next_token(&mut self, expected: &'static str) -> Result<String, SourceError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SourceError::UnexpectedEof { expected });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_int(&mut self, expected: &'static str) -> Result<i64, SourceError> {
        let token = self.next_token(expected)?;
        parse_int(&token)
    }
}

impl<R: BufRead, W: Write> GridSource for ManualSource<R, W> {
    fn load(&mut self) -> Result<Grid, SourceError> {
        self.say(&format!(
            "Enter image height and width (max {MAX_HEIGHT}x{MAX_WIDTH}): "
        ))?;
        let height = self.next_int("height")?;
        let width = self.next_int("width")?;
        let (width, height) = check_dimensions(width, height)?;
        tracing::debug!(width, height, "Manual entry dimensions accepted");

        self.say("Enter pixels (0=white, 1=black), row by row:\n")?;
        let mut pixels = Vec::with_capacity(width * height);
        for index in 0..width * height {
            let value = self.next_int("pixels")?;
            pixels.push(pixel_from_value(value, index, width)?);
        }

        Ok(Grid::new(width, height, pixels)?)
    }

    fn describe(&self) -> String {
        "manual input".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::GridError;

    fn load(input: &str) -> Result<Grid, SourceError> {
        ManualSource::<_, Vec<u8>>::quiet(input.as_bytes()).load()
    }

    #[test]
    fn test_reads_height_then_width() {
        let grid = load("2 3\n0 1 0\n1 1 1\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.row(0), &[false, true, false]);
    }

    #[test]
    fn test_tokens_span_lines() {
        let grid = load("2\n2 0\n1\n\n1 0").unwrap();
        assert_eq!(grid.pixels(), &[false, true, true, false]);
    }

    #[test]
    fn test_prompts_written() {
        let mut prompts = Vec::new();
        ManualSource::new("1 1\n1\n".as_bytes(), &mut prompts)
            .load()
            .unwrap();
        let text = String::from_utf8(prompts).unwrap();
        assert!(text.contains("height and width"));
        assert!(text.contains("row by row"));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            load("0 5\n"),
            Err(SourceError::Grid(GridError::InvalidDimensions { .. }))
        ));
        assert!(matches!(
            load("769 10\n"),
            Err(SourceError::Grid(GridError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_invalid_pixel() {
        assert!(matches!(
            load("1 2\n0 7\n"),
            Err(SourceError::Grid(GridError::InvalidPixel {
                value: 7,
                row: 0,
                col: 1
            }))
        ));
    }

    #[test]
    fn test_early_eof() {
        assert!(matches!(
            load("2 2\n0 1 1"),
            Err(SourceError::UnexpectedEof { expected: "pixels" })
        ));
        assert!(matches!(
            load(""),
            Err(SourceError::UnexpectedEof { expected: "height" })
        ));
    }

    #[test]
    fn test_non_numeric_token() {
        assert!(matches!(load("two 2\n"), Err(SourceError::InvalidToken(_))));
    }
}
