use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::multispace0,
    combinator::{map, opt},
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::sync::Arc;
use tutor_ast::{Equation, Expr};

// Intermediate AST for parsing
#[derive(Debug, Clone)]
enum ParseNode {
    Number(BigRational),
    Variable(String),
    Add(Box<ParseNode>, Box<ParseNode>),
    Sub(Box<ParseNode>, Box<ParseNode>),
    Mul(Box<ParseNode>, Box<ParseNode>),
    Div(Box<ParseNode>, Box<ParseNode>),
    Neg(Box<ParseNode>),
}

impl ParseNode {
    fn lower(self) -> Arc<Expr> {
        match self {
            ParseNode::Number(n) => Expr::rational(n),
            ParseNode::Variable(s) => Expr::var(&s),
            ParseNode::Add(l, r) => Expr::add(l.lower(), r.lower()),
            ParseNode::Sub(l, r) => Expr::sub(l.lower(), r.lower()),
            ParseNode::Mul(l, r) => Expr::mul(l.lower(), r.lower()),
            ParseNode::Div(l, r) => Expr::div(l.lower(), r.lower()),
            ParseNode::Neg(e) => Expr::neg(e.lower()),
        }
    }
}

/// Convert a decimal string to BigRational.
/// Supports: "8.2" → 41/5, ".5" → 1/2, "8." → 8, "123" → 123
/// For "A.B", num = A*10^k + B, den = 10^k (where k = len(B))
fn decimal_to_rational(integer_part: &str, fractional_part: &str) -> BigRational {
    let k = fractional_part.len();

    if k == 0 {
        let n: BigInt = integer_part.parse().unwrap_or_else(|_| BigInt::from(0));
        return BigRational::from_integer(n);
    }

    let ten = BigInt::from(10);
    let mut denominator = BigInt::from(1);
    for _ in 0..k {
        denominator *= &ten;
    }

    // Integer part may be empty for ".5"
    let int_val: BigInt = if integer_part.is_empty() {
        BigInt::from(0)
    } else {
        integer_part.parse().unwrap_or_else(|_| BigInt::from(0))
    };

    let frac_val: BigInt = fractional_part.parse().unwrap_or_else(|_| BigInt::from(0));

    let numerator = int_val * &denominator + frac_val;

    // BigRational::new automatically reduces the fraction
    BigRational::new(numerator, denominator)
}

// Parser for numeric literals (integers and decimals): 123, 8.2, .5, 8.
fn parse_number(input: &str) -> IResult<&str, ParseNode> {
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let (int_str, frac_str) = match maybe_frac {
        Some((_, frac)) => (int_part, frac),
        None => (int_part, ""),
    };

    // Must have at least some digits somewhere ("." alone is not a number)
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    let rational = decimal_to_rational(int_str, frac_str);
    Ok((remaining, ParseNode::Number(rational)))
}

// Variables are single letters, so "xy" is the product x*y rather than one
// identifier named "xy".
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    if !matches!(input.chars().next(), Some(c) if c.is_ascii_alphabetic()) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Alpha,
        )));
    }
    Ok((&input[1..], &input[..1]))
}

fn parse_variable(input: &str) -> IResult<&str, ParseNode> {
    map(parse_identifier, |s: &str| ParseNode::Variable(s.to_string()))(input)
}

fn parse_parens(input: &str) -> IResult<&str, ParseNode> {
    delimited(
        preceded(multispace0, tag("(")),
        parse_expr,
        preceded(multispace0, tag(")")),
    )(input)
}

fn parse_atom(input: &str) -> IResult<&str, ParseNode> {
    preceded(multispace0, alt((parse_number, parse_variable, parse_parens)))(input)
}

fn parse_unary(input: &str) -> IResult<&str, ParseNode> {
    alt((
        map(
            pair(preceded(multispace0, tag("-")), parse_unary),
            |(_, expr)| ParseNode::Neg(Box::new(expr)),
        ),
        parse_atom,
    ))(input)
}

// Term - handles explicit * and / operators,
// plus implicit multiplication: 2x → 2*x, 3(x+y) → 3*(x+y)
fn parse_term(input: &str) -> IResult<&str, ParseNode> {
    let (input, init) = parse_unary(input)?;

    let (input, result) = fold_many0(
        pair(
            preceded(multispace0, alt((tag("*"), tag("·"), tag("/")))),
            parse_unary,
        ),
        move || init.clone(),
        |acc, (op, val)| match op {
            "*" | "·" => ParseNode::Mul(Box::new(acc), Box::new(val)),
            "/" => ParseNode::Div(Box::new(acc), Box::new(val)),
            _ => unreachable!(),
        },
    )(input)?;

    // Implicit multiplication only applies with NO whitespace between the
    // number and the next factor: "2x" yes, "2 x" no.
    parse_implicit_mul_chain(input, result)
}

// Parse implicit multiplication chain: 2xy → 2*x*y, 2x → 2*x
fn parse_implicit_mul_chain(input: &str, acc: ParseNode) -> IResult<&str, ParseNode> {
    let first_char = input.chars().next();

    match first_char {
        // Variable start: 2x
        Some(c) if c.is_ascii_alphabetic() => {
            if can_implicit_mul(&acc) {
                if let Ok((remaining, next_factor)) = parse_unary(input) {
                    let new_acc = ParseNode::Mul(Box::new(acc), Box::new(next_factor));
                    return parse_implicit_mul_chain(remaining, new_acc);
                }
            }
            Ok((input, acc))
        }
        // Parenthesized group: 2(x+1)
        Some('(') => {
            if can_implicit_mul(&acc) {
                if let Ok((remaining, next_factor)) = parse_unary(input) {
                    let new_acc = ParseNode::Mul(Box::new(acc), Box::new(next_factor));
                    return parse_implicit_mul_chain(remaining, new_acc);
                }
            }
            Ok((input, acc))
        }
        _ => Ok((input, acc)),
    }
}

// Check if a ParseNode can be followed by implicit multiplication
fn can_implicit_mul(node: &ParseNode) -> bool {
    match node {
        ParseNode::Number(_) => true,
        // Single-letter variables chain: xy → x*y
        ParseNode::Variable(_) => true,
        // -2x parses as Neg(2) before the chain runs, so look through Neg
        ParseNode::Neg(inner) => can_implicit_mul(inner),
        // Chain continues after explicit ops: 2*3x
        ParseNode::Mul(_, right) | ParseNode::Div(_, right) => can_implicit_mul(right),
        _ => false,
    }
}

fn parse_expr(input: &str) -> IResult<&str, ParseNode> {
    let (input, init) = parse_term(input)?;
    fold_many0(
        pair(preceded(multispace0, alt((tag("+"), tag("-")))), parse_term),
        move || init.clone(),
        |acc, (op, val)| match op {
            "+" => ParseNode::Add(Box::new(acc), Box::new(val)),
            "-" => ParseNode::Sub(Box::new(acc), Box::new(val)),
            _ => unreachable!(),
        },
    )(input)
}

/// Parse a single expression, requiring all input to be consumed.
pub fn parse(input: &str) -> Result<Arc<Expr>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptySide);
    }

    let (remaining, expr_node) =
        parse_expr(input).map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(expr_node.lower())
}

/// Parse a raw equation string of the form `lhs = rhs`.
///
/// The string must contain exactly one `=`; each side must parse as a full
/// expression. Pure: no side effects, no normalization beyond parsing.
pub fn parse_equation(raw: &str) -> Result<Equation, ParseError> {
    let delimiters = raw.matches('=').count();
    match delimiters {
        0 => return Err(ParseError::MissingEquals),
        1 => {}
        n => return Err(ParseError::MultipleEquals(n)),
    }

    // Count check above guarantees the split succeeds.
    let (lhs_raw, rhs_raw) = raw.split_once('=').ok_or(ParseError::MissingEquals)?;
    let lhs = parse(lhs_raw.trim())?;
    let rhs = parse(rhs_raw.trim())?;
    Ok(Equation::new(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(input: &str) -> String {
        format!("{}", parse(input).unwrap())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parsed("123"), "123");
    }

    #[test]
    fn test_parse_decimal_literals() {
        let cases = [
            ("8.2", "41/5"), // standard decimal
            (".5", "1/2"),   // leading dot
            ("8.", "8"),     // trailing dot
            ("0.25", "1/4"),
        ];
        for (input, expected) in cases {
            assert_eq!(parsed(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(parsed("2x"), "2*x");
        assert_eq!(parsed("2xy"), "2*x*y");
        assert_eq!(parsed("xy"), "x*y");
        assert_eq!(parsed("3(x + 1)"), "3*(x + 1)");
        assert_eq!(parsed("2*3x"), "2*3*x");
    }

    #[test]
    fn test_no_implicit_mul_across_whitespace() {
        assert!(matches!(
            parse("2 x"),
            Err(ParseError::UnconsumedInput(_))
        ));
    }

    #[test]
    fn test_unary_minus_binds_coefficient() {
        assert_eq!(parsed("-2x"), "-2*x");
        assert_eq!(parsed("-x"), "-x");
        assert_eq!(parsed("x + -3"), "x + -3");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parsed("2x + 5"), "2*x + 5");
        assert_eq!(parsed("2 + 3 * 4"), "2 + 3*4");
        assert_eq!(parsed("x / 3"), "x/3");
    }

    #[test]
    fn test_trailing_garbage_is_error() {
        assert!(matches!(
            parse("2x + "),
            Err(ParseError::UnconsumedInput(_))
        ));
        assert!(matches!(parse("$$$"), Err(ParseError::NomError(_))));
    }

    #[test]
    fn test_parse_equation_splits_once() {
        let eq = parse_equation("2x + 5 = 11").unwrap();
        assert_eq!(format!("{}", eq), "2*x + 5 = 11");
    }

    #[test]
    fn test_parse_equation_rejects_missing_equals() {
        assert_eq!(parse_equation("2x + 5"), Err(ParseError::MissingEquals));
    }

    #[test]
    fn test_parse_equation_rejects_double_equals() {
        assert_eq!(
            parse_equation("2x = 2 = 3"),
            Err(ParseError::MultipleEquals(2))
        );
    }

    #[test]
    fn test_parse_equation_rejects_empty_side() {
        assert_eq!(parse_equation("= 5"), Err(ParseError::EmptySide));
        assert_eq!(parse_equation("x ="), Err(ParseError::EmptySide));
    }
}
