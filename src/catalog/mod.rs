//! Loading star records from a HabHYG CSV catalog into a treap keyed by display name.

mod reader;
mod star;

pub use self::reader::StarReader;
pub use self::star::Star;

use crate::treap::{PrioritySource, Treap};
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::result;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MissingField { line: usize, column: usize },
    InvalidField { line: usize, column: usize, value: String },
    UnterminatedQuote { line: usize },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::MissingField { line, column } => {
                write!(f, "line {}: missing column {}", line, column)
            },
            Error::InvalidField { line, column, value } => {
                write!(f, "line {}: invalid value {:?} in column {}", line, value, column)
            },
            Error::UnterminatedQuote { line } => {
                write!(f, "line {}: quoted field is never closed", line)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Reads every star from `reader` and inserts it into `treap` keyed by its display name.
/// Returns the number of stars inserted.
///
/// # Examples
///
/// ```
/// use star_treap::catalog;
/// use star_treap::treap::Treap;
///
/// let csv = "\
/// HabHyg,Hip,Habitable,Display Name,Hyg,BayerFlamsteed,Gliese,BD,HD,HR,ProperName,Spectral Class,Distance,Xg,Yg,Zg,AbsMag
/// 7,37173,0,Procyon,37173,Alp CMi,Gl 280A,,61421,2943,Procyon,F5IV-V,3.5142,,,,2.66
/// ";
/// let mut stars = Treap::new("Star Catalog");
/// assert_eq!(catalog::insert_all(csv.as_bytes(), &mut stars).unwrap(), 1);
/// assert_eq!(stars.get("Procyon").map(|star| star.habhyg), Some(7));
/// ```
pub fn insert_all<R, P>(reader: R, treap: &mut Treap<String, Star, P>) -> Result<usize>
where
    R: BufRead,
    P: PrioritySource,
{
    let mut count = 0;
    for star in StarReader::new(reader) {
        let star = star?;
        treap.insert(star.display_name.clone(), star);
        count += 1;
    }
    Ok(count)
}

/// Opens the catalog at `path` and inserts every star into `treap`.
pub fn load<T, P>(path: T, treap: &mut Treap<String, Star, P>) -> Result<usize>
where
    T: AsRef<Path>,
    P: PrioritySource,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let count = insert_all(BufReader::new(file), treap)?;
    info!("loaded {} stars from {}", count, path.display());
    Ok(count)
}
