//! Numeric classification for object fields.
//!
//! Pick the narrowest Avro primitive that holds the literal exactly:
//! i32 range → `int`, i64 range → `long`, fractional values that survive
//! an f32 round trip → `float`, everything else → `double`.

use serde_json::Number;

pub fn classify(n: &Number) -> &'static str {
    if let Some(i) = n.as_i64() {
        if i32::try_from(i).is_ok() { "int" } else { "long" }
    } else if n.as_u64().is_some() {
        // above i64::MAX; no Avro integer primitive holds it
        "double"
    } else if let Some(f) = n.as_f64() {
        if (f as f32) as f64 == f { "float" } else { "double" }
    } else {
        "double"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(src: &str) -> Number {
        serde_json::from_str(src).unwrap()
    }

    #[test]
    fn i32_range_is_int() {
        assert_eq!(classify(&num("10")), "int");
        assert_eq!(classify(&num("-2147483648")), "int");
        assert_eq!(classify(&num("2147483647")), "int");
    }

    #[test]
    fn i64_range_is_long() {
        assert_eq!(classify(&num("2147483648")), "long");
        assert_eq!(classify(&num("-2147483649")), "long");
        assert_eq!(classify(&num("9223372036854775807")), "long");
    }

    #[test]
    fn beyond_i64_falls_back_to_double() {
        assert_eq!(classify(&num("9223372036854775808")), "double");
        assert_eq!(classify(&num("18446744073709551615")), "double");
    }

    #[test]
    fn f32_exact_fractions_are_float() {
        assert_eq!(classify(&num("0.5")), "float");
        assert_eq!(classify(&num("4.25")), "float");
    }

    #[test]
    fn f32_inexact_fractions_are_double() {
        assert_eq!(classify(&num("0.1")), "double");
        assert_eq!(classify(&num("3.141592653589793")), "double");
    }
}
