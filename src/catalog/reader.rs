use crate::catalog::{Error, Result, Star};
use std::io::BufRead;
use std::mem;
use std::str::FromStr;

const HABHYG_COLUMN: usize = 0;
const HABITABLE_COLUMN: usize = 2;
const DISPLAY_NAME_COLUMN: usize = 3;
const SPECTRAL_CLASS_COLUMN: usize = 11;
const DISTANCE_COLUMN: usize = 12;
const MAGNITUDE_COLUMN: usize = 16;

/// Splits one CSV record into fields, or returns `None` if the record ends inside a quoted field.
///
/// A field that starts with `"` is quoted: commas and line breaks inside it are kept, a doubled
/// `""` stands for one quote, and the enclosing quotes are dropped. Quotes anywhere else are
/// literal.
fn split_fields(row: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = row.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            },
            '"' if field.is_empty() => quoted = true,
            ',' if !quoted => fields.push(mem::replace(&mut field, String::new())),
            _ => field.push(c),
        }
    }
    if quoted {
        return None;
    }
    fields.push(field);
    Some(fields)
}

/// An iterator over the stars of a HabHYG CSV catalog.
///
/// The first line is treated as a header and skipped, as are blank lines. A quoted field may
/// span several lines. Line numbers in errors are one-based, count the header, and point at the
/// first line of the offending record.
pub struct StarReader<R> {
    reader: R,
    line_buf: String,
    line: usize,
    record_line: usize,
}

impl<R> StarReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        StarReader {
            reader,
            line_buf: String::with_capacity(256),
            line: 0,
            record_line: 0,
        }
    }

    // reads further lines until every quoted field of the record is closed
    fn read_fields(&mut self) -> Result<Vec<String>> {
        loop {
            if let Some(fields) = split_fields(self.line_buf.trim_end_matches(&['\r', '\n'][..])) {
                return Ok(fields);
            }
            if self.reader.read_line(&mut self.line_buf)? == 0 {
                return Err(Error::UnterminatedQuote {
                    line: self.record_line,
                });
            }
            self.line += 1;
        }
    }

    fn parse_row(&self, fields: &[String]) -> Result<Star> {
        Ok(Star {
            habhyg: self.parse_field(fields, HABHYG_COLUMN)?,
            display_name: self.field(fields, DISPLAY_NAME_COLUMN)?.to_string(),
            habitable: self.field(fields, HABITABLE_COLUMN)? == "1",
            spectral_class: self.field(fields, SPECTRAL_CLASS_COLUMN)?.to_string(),
            distance_parsecs: self.parse_optional_field(fields, DISTANCE_COLUMN)?,
            magnitude: self.parse_optional_field(fields, MAGNITUDE_COLUMN)?,
        })
    }

    fn field<'a>(&self, fields: &'a [String], column: usize) -> Result<&'a str> {
        fields
            .get(column)
            .map(|field| field.trim())
            .ok_or(Error::MissingField {
                line: self.record_line,
                column,
            })
    }

    fn parse_field<T>(&self, fields: &[String], column: usize) -> Result<T>
    where
        T: FromStr,
    {
        let value = self.field(fields, column)?;
        value.parse().map_err(|_| Error::InvalidField {
            line: self.record_line,
            column,
            value: value.to_string(),
        })
    }

    fn parse_optional_field<T>(&self, fields: &[String], column: usize) -> Result<Option<T>>
    where
        T: FromStr,
    {
        if self.field(fields, column)?.is_empty() {
            Ok(None)
        } else {
            self.parse_field(fields, column).map(Some)
        }
    }
}

impl<R> Iterator for StarReader<R>
where
    R: BufRead,
{
    type Item = Result<Star>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buf.clear();
            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(err) => return Some(Err(err.into())),
            }
            if self.line == 1 {
                debug!("skipping catalog header: {}", self.line_buf.trim_end());
                continue;
            }
            if self.line_buf.trim().is_empty() {
                continue;
            }
            self.record_line = self.line;
            let star = self
                .read_fields()
                .and_then(|fields| self.parse_row(&fields));
            if let Err(ref err) = star {
                warn!("rejecting catalog row: {}", err);
            }
            return Some(star);
        }
    }
}
