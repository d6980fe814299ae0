use cookie_factory::combinator::string;
use cookie_factory::multi::all;
use cookie_factory::{gen_simple, GenError, SerializeFn};

use std::io::{self, Write};

use super::Sample;

pub fn sample<W: Write>(s: &Sample) -> impl SerializeFn<W> {
    string(format!(
        "{} {} {} {} {}\n",
        s.time, s.top.x, s.top.y, s.bottom.x, s.bottom.y
    ))
}

pub fn samples<'a, W: Write + 'a>(records: &'a [Sample]) -> impl SerializeFn<W> + 'a {
    all(records.iter().map(sample))
}

/// Writes records in the same text format `read` accepts.
pub fn to_writer<W: Write>(w: W, records: &[Sample]) -> io::Result<W> {
    gen_simple(samples(records), w).map_err(|e| match e {
        GenError::IoError(e) => e,
        e => io::Error::new(io::ErrorKind::Other, format!("{:?}", e)),
    })
}
