use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map_res, opt, recognize};
use nom::number::complete::float;
use nom::sequence::{pair, preceded};
use nom::IResult;

pub(crate) fn integer(i: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(i)
}

/// A whitespace-separated numeric column.
pub(crate) fn field(i: &str) -> IResult<&str, f32> {
    preceded(space1, float)(i)
}
