//! Text parsers for the geometric types.
//!
//! Grammars mirror the server's output syntax exactly: no whitespace,
//! `(x,y)` point pairs, and shape-specific bracketing (`{a,b,c}` lines,
//! `[...]` segments, `<(x,y),r>` circles). Each `decode_*` wrapper
//! requires the whole input to match and converts any leftover or
//! mismatch into a [`DecodeError`] naming the shape.

use nom::{
    IResult,
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, map},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, separated_pair, tuple},
};

use crate::error::DecodeError;
use crate::value::{PgBox, PgCircle, PgLine, PgLineSegment, PgPath, PgPoint, PgPolygon};

fn point(input: &str) -> IResult<&str, PgPoint> {
    map(
        delimited(
            char('('),
            separated_pair(double, char(','), double),
            char(')'),
        ),
        |(x, y)| PgPoint { x, y },
    )(input)
}

fn point_list(input: &str) -> IResult<&str, Vec<PgPoint>> {
    separated_list1(char(','), point)(input)
}

fn line(input: &str) -> IResult<&str, PgLine> {
    map(
        delimited(
            char('{'),
            tuple((double, char(','), double, char(','), double)),
            char('}'),
        ),
        |(a, _, b, _, c)| PgLine { a, b, c },
    )(input)
}

fn lseg(input: &str) -> IResult<&str, PgLineSegment> {
    map(
        delimited(
            char('['),
            separated_pair(point, char(','), point),
            char(']'),
        ),
        |(start, end)| PgLineSegment { start, end },
    )(input)
}

// The box text form has no outer bracketing at all.
fn rect(input: &str) -> IResult<&str, PgBox> {
    map(
        separated_pair(point, char(','), point),
        |(upper_right, lower_left)| PgBox {
            upper_right,
            lower_left,
        },
    )(input)
}

// Closed paths print as `(...)`, open ones as `[...]`; both carry the
// same point list.
fn path(input: &str) -> IResult<&str, PgPath> {
    map(
        alt((
            delimited(char('('), point_list, char(')')),
            delimited(char('['), point_list, char(']')),
        )),
        |points| PgPath { points },
    )(input)
}

fn polygon(input: &str) -> IResult<&str, PgPolygon> {
    map(delimited(char('('), point_list, char(')')), |points| {
        PgPolygon { points }
    })(input)
}

fn circle(input: &str) -> IResult<&str, PgCircle> {
    map(
        delimited(
            char('<'),
            separated_pair(point, char(','), double),
            char('>'),
        ),
        |(center, radius)| PgCircle { center, radius },
    )(input)
}

fn run<'a, O, P>(parser: P, shape: &'static str, input: &'a str) -> Result<O, DecodeError>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(input)
        .map(|(_, value)| value)
        .map_err(|_| DecodeError::InvalidGeometry {
            shape,
            input: input.to_string(),
        })
}

pub fn decode_point(s: &str) -> Result<PgPoint, DecodeError> {
    run(point, "point", s)
}

pub fn decode_line(s: &str) -> Result<PgLine, DecodeError> {
    run(line, "line", s)
}

pub fn decode_lseg(s: &str) -> Result<PgLineSegment, DecodeError> {
    run(lseg, "lseg", s)
}

pub fn decode_box(s: &str) -> Result<PgBox, DecodeError> {
    run(rect, "box", s)
}

pub fn decode_path(s: &str) -> Result<PgPath, DecodeError> {
    run(path, "path", s)
}

pub fn decode_polygon(s: &str) -> Result<PgPolygon, DecodeError> {
    run(polygon, "polygon", s)
}

pub fn decode_circle(s: &str) -> Result<PgCircle, DecodeError> {
    run(circle, "circle", s)
}
