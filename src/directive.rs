//! Directive parsing: free text to a closed set of filter instructions.
//!
//! Incoming requests carry a comma-separated caption such as
//! `"blur 8, rotate, flip horizontal"`. Each comma-separated token is one
//! directive: its first whitespace-separated word names the filter
//! (case-insensitive), the remainder is an optional level or direction.
//! Multi-word names from the original command set (`salt and pepper`) and
//! the staged concat commands (`concat1`, `concat2`) are matched on the
//! whole token.
//!
//! Parsing is strict about filter names and lenient about arguments: an
//! unrecognised name rejects the whole list before any filter runs, while
//! a malformed level or direction falls back to the filter's default.

use std::fmt;

use crate::error::{FilterError, FilterResult};

/// Default window size for `blur` when the directive carries no level.
pub const DEFAULT_BLUR_LEVEL: i64 = 16;

/// Default tile size for `pixelate` when the directive carries no level.
pub const DEFAULT_PIXELATE_LEVEL: i64 = 10;

/// Axis selector for `flip` and `concat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => f.write_str("horizontal"),
            Direction::Vertical => f.write_str("vertical"),
        }
    }
}

/// One parsed filter instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Sliding-window box blur with decimation; shrinks the grid.
    Blur(i64),
    /// Horizontal adjacent-difference edge map; each row loses one cell.
    Contour,
    /// Rotate 90° clockwise.
    Rotate,
    /// Binary threshold at 100.
    Segment,
    /// Random per-cell salt/pepper perturbation.
    SaltAndPepper,
    /// `255 - value` per cell.
    Invert,
    /// Binary threshold at 127.
    Binary,
    /// Mirror left-right (`Vertical`) or top-bottom (`Horizontal`).
    Flip(Direction),
    /// Tile the grid and flatten each tile to its average.
    Pixelate(i64),
    /// Concatenate the grid with a copy of itself.
    Concat(Direction),
    /// Stage one of the two-upload concatenation handshake: store the
    /// current grid and wait for a second image.
    ConcatFirst,
    /// Stage two: consume the stored grid and concatenate.
    ConcatSecond(Direction),
}

impl Directive {
    /// Short name for log events and error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Directive::Blur(_) => "blur",
            Directive::Contour => "contour",
            Directive::Rotate => "rotate",
            Directive::Segment => "segment",
            Directive::SaltAndPepper => "salt and pepper",
            Directive::Invert => "invert",
            Directive::Binary => "binary",
            Directive::Flip(_) => "flip",
            Directive::Pixelate(_) => "pixelate",
            Directive::Concat(_) => "concat",
            Directive::ConcatFirst => "concat1",
            Directive::ConcatSecond(_) => "concat2",
        }
    }
}

/// Parse a comma-separated directive list.
///
/// The whole list is parsed before anything executes, so a bad token means
/// no filter ever touches the grid.
///
/// # Errors
/// Returns [`FilterError::UnknownFilter`] for a token whose first word names
/// no known filter.
pub fn parse_directives(text: &str) -> FilterResult<Vec<Directive>> {
    let lowered = text.to_lowercase();

    lowered
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> FilterResult<Directive> {
    // Whole-token names first: multi-word and staged commands.
    match token {
        "salt and pepper" | "salt_and_pepper" => return Ok(Directive::SaltAndPepper),
        "concat1" => return Ok(Directive::ConcatFirst),
        _ => {}
    }

    let mut words = token.split_whitespace();
    let name = words.next().unwrap_or("");
    let argument = words.next();

    let directive = match name {
        "blur" => Directive::Blur(parse_level(argument, DEFAULT_BLUR_LEVEL)),
        "pixelate" | "pixel" => Directive::Pixelate(parse_level(argument, DEFAULT_PIXELATE_LEVEL)),
        "contour" => Directive::Contour,
        "rotate" => Directive::Rotate,
        "segment" => Directive::Segment,
        "invert" => Directive::Invert,
        "binary" => Directive::Binary,
        "flip" => Directive::Flip(parse_direction(argument, Direction::Vertical)),
        "concat" => Directive::Concat(parse_direction(argument, Direction::Horizontal)),
        "concat2" => Directive::ConcatSecond(parse_direction(argument, Direction::Horizontal)),
        _ => return Err(FilterError::UnknownFilter(token.to_string())),
    };

    Ok(directive)
}

/// A level argument that is not an integer falls back to the default;
/// range validation happens at execution time where the grid size is known.
fn parse_level(argument: Option<&str>, default: i64) -> i64 {
    match argument.and_then(|word| word.parse::<i64>().ok()) {
        Some(level) => level,
        None => default,
    }
}

fn parse_direction(argument: Option<&str>, default: Direction) -> Direction {
    match argument {
        Some("horizontal") => Direction::Horizontal,
        Some("vertical") => Direction::Vertical,
        Some(other) => {
            tracing::warn!(direction = other, "unrecognised direction, using default");
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_sequence() {
        let directives = parse_directives("rotate, invert").unwrap();

        assert_eq!(directives, vec![Directive::Rotate, Directive::Invert]);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        let directives = parse_directives("  ROTATE ,Flip HORIZONTAL ").unwrap();

        assert_eq!(
            directives,
            vec![Directive::Rotate, Directive::Flip(Direction::Horizontal)]
        );
    }

    #[test]
    fn test_parse_blur_with_level() {
        let directives = parse_directives("blur 4").unwrap();

        assert_eq!(directives, vec![Directive::Blur(4)]);
    }

    #[test]
    fn test_parse_blur_keeps_out_of_range_level_for_runtime_check() {
        // Range validation needs the grid dimensions, so -3 survives parsing.
        let directives = parse_directives("blur -3").unwrap();

        assert_eq!(directives, vec![Directive::Blur(-3)]);
    }

    #[test]
    fn test_parse_non_numeric_level_falls_back_to_default() {
        let directives = parse_directives("blur soft, pixel lots").unwrap();

        assert_eq!(
            directives,
            vec![
                Directive::Blur(DEFAULT_BLUR_LEVEL),
                Directive::Pixelate(DEFAULT_PIXELATE_LEVEL),
            ]
        );
    }

    #[test]
    fn test_parse_pixel_spelling_is_pixelate() {
        let directives = parse_directives("pixel 5").unwrap();

        assert_eq!(directives, vec![Directive::Pixelate(5)]);
    }

    #[test]
    fn test_parse_flip_invalid_direction_defaults_to_vertical() {
        let directives = parse_directives("flip sideways").unwrap();

        assert_eq!(directives, vec![Directive::Flip(Direction::Vertical)]);
    }

    #[test]
    fn test_parse_concat_defaults_to_horizontal() {
        let directives = parse_directives("concat").unwrap();

        assert_eq!(directives, vec![Directive::Concat(Direction::Horizontal)]);
    }

    #[test]
    fn test_parse_salt_and_pepper_whole_token() {
        let directives = parse_directives("salt and pepper, invert").unwrap();

        assert_eq!(
            directives,
            vec![Directive::SaltAndPepper, Directive::Invert]
        );
    }

    #[test]
    fn test_parse_staged_concat_commands() {
        assert_eq!(
            parse_directives("concat1").unwrap(),
            vec![Directive::ConcatFirst]
        );
        assert_eq!(
            parse_directives("concat2 vertical").unwrap(),
            vec![Directive::ConcatSecond(Direction::Vertical)]
        );
    }

    #[test]
    fn test_parse_unknown_filter_rejects_whole_list() {
        let err = parse_directives("invert, sparkle, rotate").unwrap_err();

        match err {
            FilterError::UnknownFilter(token) => assert_eq!(token, "sparkle"),
            other => panic!("expected UnknownFilter, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_text_is_empty_list() {
        assert!(parse_directives("").unwrap().is_empty());
        assert!(parse_directives(" , ,").unwrap().is_empty());
    }
}
