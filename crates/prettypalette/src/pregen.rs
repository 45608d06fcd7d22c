//! Pre-generated color sets.
//!
//! Generating a color set of some size takes long enough that applications
//! may prefer to generate color sets ahead of time. The format for storing
//! them is line-oriented text. Line `k` holds the color set of size `k` as
//! whitespace-separated decimal integers, with each integer packing a color's
//! alpha, red, green, and blue channels as `0xAARRGGBB`. Since platforms with
//! only signed integers write opaque colors as negative numbers, parsing
//! accepts both signed and unsigned integers. Writing always
//! produces signed integers.

use std::io::{BufRead, Write};

use crate::error::ColorListError;
use crate::Rgb;

/// An ordered sequence of color sets, one per set size.
///
/// ```
/// # use prettypalette::{ColorLists, Rgb};
/// let lists = ColorLists::parse("-16777216\n-65536 -16711936\n").unwrap();
/// assert_eq!(lists.len(), 2);
/// assert!(lists.is_complete());
/// assert_eq!(lists.get(1), Some(&[Rgb::new(0, 0, 0)][..]));
/// assert_eq!(lists.get(2), Some(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)][..]));
/// assert_eq!(lists.get(3), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorLists {
    lists: Vec<Vec<Rgb>>,
}

impl ColorLists {
    /// Create a new empty sequence of color lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text into color lists.
    pub fn parse(text: &str) -> Result<Self, ColorListError> {
        let mut lists = Self::new();
        for (index, line) in text.lines().enumerate() {
            lists.push(parse_line(index + 1, line)?);
        }
        Ok(lists)
    }

    /// Read color lists from the reader.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, ColorListError> {
        let mut lists = Self::new();
        for (index, line) in reader.lines().enumerate() {
            lists.push(parse_line(index + 1, &line?)?);
        }
        Ok(lists)
    }

    /// Write these color lists to the writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for list in &self.lists {
            write_line(writer, list)?;
        }
        Ok(())
    }

    /// Get the color list for sets of size `n`. Sizes start at 1.
    pub fn get(&self, n: usize) -> Option<&[Rgb]> {
        n.checked_sub(1)
            .and_then(|index| self.lists.get(index))
            .map(|list| list.as_slice())
    }

    /// Get the number of color lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Determine whether there are no color lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Append a color list.
    pub fn push(&mut self, list: Vec<Rgb>) {
        self.lists.push(list);
    }

    /// Get an iterator over the color lists.
    pub fn iter(&self) -> impl Iterator<Item = &[Rgb]> {
        self.lists.iter().map(|list| list.as_slice())
    }

    /// Determine whether the list for every size `k` has exactly `k` colors.
    pub fn is_complete(&self) -> bool {
        self.lists
            .iter()
            .enumerate()
            .all(|(index, list)| list.len() == index + 1)
    }
}

fn parse_line(line: usize, text: &str) -> Result<Vec<Rgb>, ColorListError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map(Rgb::from)
                .or_else(|_| token.parse::<u32>().map(Rgb::from))
                .map_err(|_| ColorListError::MalformedColor {
                    line,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Write one color list as a line of space-separated, signed integers.
pub fn write_line<W: Write>(writer: &mut W, colors: &[Rgb]) -> std::io::Result<()> {
    let mut first = true;
    for color in colors {
        if first {
            first = false;
        } else {
            writer.write_all(b" ")?;
        }
        write!(writer, "{}", i32::from(*color))?;
    }
    writer.write_all(b"\n")
}

#[cfg(test)]
mod test {
    use super::{write_line, ColorLists};
    use crate::error::ColorListError;
    use crate::Rgb;

    const DATA: &str = "\
-1
-16777216 -256
4294901760 -16711681 -8355712
";

    #[test]
    fn test_parse() -> Result<(), ColorListError> {
        let lists = ColorLists::parse(DATA)?;
        assert_eq!(lists.len(), 3);
        assert!(lists.is_complete());
        assert_eq!(lists.get(0), None);
        assert_eq!(lists.get(1), Some(&[Rgb::new(255, 255, 255)][..]));
        assert_eq!(
            lists.get(2),
            Some(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 0)][..])
        );
        assert_eq!(
            lists.get(3),
            Some(
                &[
                    Rgb::new(255, 0, 0),
                    Rgb::new(0, 255, 255),
                    Rgb::new(128, 128, 128)
                ][..]
            )
        );
        Ok(())
    }

    #[test]
    fn test_read() -> Result<(), ColorListError> {
        let lists = ColorLists::read(DATA.as_bytes())?;
        assert_eq!(lists, ColorLists::parse(DATA)?);

        let sizes: Vec<usize> = lists.iter().map(|list| list.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_incomplete() -> Result<(), ColorListError> {
        let lists = ColorLists::parse("-1\n\n-1 -1 -1\n")?;
        assert_eq!(lists.len(), 3);
        assert_eq!(lists.get(2), Some(&[][..]));
        assert!(!lists.is_complete());

        assert!(ColorLists::new().is_empty());
        assert!(ColorLists::new().is_complete());
        Ok(())
    }

    #[test]
    fn test_malformed() {
        let result = ColorLists::parse("-1\n-1 #ffffff\n");
        assert!(matches!(
            result,
            Err(ColorListError::MalformedColor { line: 2, ref token }) if token == "#ffffff"
        ));

        let result = ColorLists::parse("4294967296");
        assert!(matches!(
            result,
            Err(ColorListError::MalformedColor { line: 1, .. })
        ));
    }

    #[test]
    fn test_write() -> std::io::Result<()> {
        let mut lists = ColorLists::new();
        lists.push(vec![Rgb::new(255, 255, 255)]);
        lists.push(vec![Rgb::new(255, 0, 0), Rgb::with_alpha(0, 0, 0, 255)]);

        let mut buffer = Vec::new();
        lists.write(&mut buffer)?;
        assert_eq!(String::from_utf8_lossy(&buffer), "-1\n-65536 255\n");

        let mut buffer = Vec::new();
        write_line(&mut buffer, &[])?;
        assert_eq!(buffer, b"\n");
        Ok(())
    }
}
