use cgmath::Point2;
use nom::multi::many0;
use nom::IResult;
use thiserror::Error;

use super::Sample;

mod utilities;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LineError {
    #[error("expected `<time> <topX> <topY> <bottomX> <bottomY>`")]
    Malformed,
    #[error("trailing junk after the sample columns: {0:?}")]
    Trailing(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("line {line}: {source}")]
pub struct ReadError {
    pub line: usize,
    pub source: LineError,
}

/// Parses one sample record. Consumes exactly the five leading columns.
pub fn sample(i: &str) -> IResult<&str, Sample> {
    let (i, time) = utilities::integer(i)?;
    let (i, top_x) = utilities::field(i)?;
    let (i, top_y) = utilities::field(i)?;
    let (i, bottom_x) = utilities::field(i)?;
    let (i, bottom_y) = utilities::field(i)?;
    let sample = Sample {
        time,
        top: Point2::new(top_x, top_y),
        bottom: Point2::new(bottom_x, bottom_y),
    };
    Ok((i, sample))
}

/// Parses one full line. The solver appends the ring center as extra numeric
/// columns; those are accepted and dropped. Anything non-numeric is an error.
pub fn sample_line(line: &str) -> Result<Sample, LineError> {
    let line = line.trim();
    let (rest, sample) = self::sample(line).map_err(|_| LineError::Malformed)?;
    let (rest, _) = many0(utilities::field)(rest).map_err(|_| LineError::Malformed)?;
    if !rest.trim().is_empty() {
        return Err(LineError::Trailing(rest.trim().to_string()));
    }
    Ok(sample)
}

/// Parses a whole samples file, skipping blank lines, keeping file order.
pub fn samples(input: &str) -> Result<Vec<Sample>, ReadError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            sample_line(line).map_err(|source| ReadError {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    const INPUT: &str = "\
47 0.5 0.25 0.5 0.75 0.55 0.5
46 0.5 0.3 0.45 0.75
0 0.1 0.1 0.1 0.6
";

    #[test]
    fn sample_read() {
        let (rest, val) = sample("3 1.5 2.5 9.9 9.9").unwrap();
        assert_eq!(rest, "");
        assert_eq!(val.time, 3);
        assert_eq!(val.top, Point2::new(1.5, 2.5));
        assert_eq!(val.bottom, Point2::new(9.9, 9.9));
    }

    #[test]
    fn ring_columns_ignored() {
        let val = sample_line("47 0.5 0.25 0.5 0.75 0.55 0.5").unwrap();
        assert_eq!(val.time, 47);
        assert_eq!(val.top, Point2::new(0.5, 0.25));
        assert_eq!(val.bottom, Point2::new(0.5, 0.75));
    }

    #[test]
    fn file_order_kept() {
        let vals = samples(INPUT).unwrap();
        let times: Vec<_> = vals.iter().map(|s| s.time).collect();
        assert_eq!(times, [47, 46, 0]);
    }

    #[test]
    fn blank_lines_skipped() {
        let vals = samples("\n3 1.0 2.0 3.0 4.0\n\n").unwrap();
        assert_eq!(vals.len(), 1);
    }

    #[test]
    fn short_line_rejected() {
        assert_eq!(sample_line("3 1.5"), Err(LineError::Malformed));
        assert_eq!(sample_line(""), Err(LineError::Malformed));
    }

    #[test]
    fn junk_rejected() {
        assert_eq!(
            sample_line("3 1.5 2.5 9.9 9.9 end"),
            Err(LineError::Trailing("end".to_string()))
        );

        let err = samples("3 1.0 2.0 3.0 4.0\nnope\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.source, LineError::Malformed);
    }

    #[test]
    fn negative_time_accepted() {
        let val = sample_line("-3 0.5 0.5 0.5 0.5").unwrap();
        assert_eq!(val.time, -3);
    }
}
