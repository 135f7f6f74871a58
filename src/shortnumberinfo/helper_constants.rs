/// Plus signs that start an internationally dialled number: ASCII and
/// full-width.
pub const PLUS_CHARS: [char; 2] = ['+', '\u{FF0B}'];

/// Separators removed from a short number before matching, in addition to
/// whitespace: the hyphen and its dash variants.
pub const SEPARATOR_CHARS: [char; 9] = [
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
    '\u{FF0D}',
];

/// Only accepted in front of exact emergency numbers.
pub const STAR_SIGN: &str = "*";
