//! # Suma de Enteros
//! src/handlers/calc.rs
//!
//! `GET /calc?a=<entero>&b=<entero>` responde con `a + b`.
//!
//! La query debe empezar exactamente con `a=`, un entero, `&b=` y otro
//! entero (signo opcional y al menos un dígito). No hay URL-decoding ni
//! otro orden de parámetros. Lo que venga después de los dígitos de `b`
//! se ignora, igual que un escaneo `a=%d&b=%d`.
//!
//! Los operandos son `i64`. Si la suma se desborda, el request se
//! rechaza con 400 en lugar de envolver o saturar.

use crate::http::{Response, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Errores al interpretar o calcular `/calc`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Falta el separador literal esperado (`a=` o `&b=`)
    #[error("expected `{0}`")]
    MissingLiteral(&'static str),

    /// El valor del parámetro no es un entero
    #[error("parameter `{0}` is not an integer")]
    NotAnInteger(&'static str),

    /// `a + b` no cabe en un i64
    #[error("sum overflows a 64-bit integer")]
    Overflow,
}

/// Handler para /calc?a=N&b=M
///
/// # Ejemplo de response
/// ```html
/// <html><body><h1>Calculation Result</h1><p>2 + 3 = 5</p></body></html>
/// ```
pub fn calc_handler(query: &str) -> Response {
    let result = parse_operands(query).and_then(|(a, b)| add(a, b).map(|sum| (a, b, sum)));

    match result {
        Ok((a, b, sum)) => Response::html(&format!(
            "<html><body><h1>Calculation Result</h1><p>{} + {} = {}</p></body></html>",
            a, b, sum
        )),
        Err(e) => {
            debug!(query, error = %e, "Parámetros de /calc inválidos");
            Response::text(StatusCode::BadRequest, "Invalid parameters.")
        }
    }
}

/// Extrae `a` y `b` de una query `a=<entero>&b=<entero>`
pub fn parse_operands(query: &str) -> Result<(i64, i64), CalcError> {
    let rest = query
        .strip_prefix("a=")
        .ok_or(CalcError::MissingLiteral("a="))?;
    let (a, rest) = scan_integer(rest).ok_or(CalcError::NotAnInteger("a"))?;

    let rest = rest
        .strip_prefix("&b=")
        .ok_or(CalcError::MissingLiteral("&b="))?;
    let (b, _trailing) = scan_integer(rest).ok_or(CalcError::NotAnInteger("b"))?;

    Ok((a, b))
}

/// Suma con detección de overflow
pub fn add(a: i64, b: i64) -> Result<i64, CalcError> {
    a.checked_add(b).ok_or(CalcError::Overflow)
}

/// Lee un entero con signo opcional al inicio de `input`
///
/// Retorna el valor y el resto sin consumir. `None` si no hay dígitos o
/// si el número no cabe en un i64.
fn scan_integer(input: &str) -> Option<(i64, &str)> {
    let sign_len = usize::from(input.starts_with(['+', '-']));
    let digits_len = input[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    let end = sign_len + digits_len;
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}
