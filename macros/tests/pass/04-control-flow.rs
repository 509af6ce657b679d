use variant::{match_variant, Variant};

fn parse(v: Variant![&'static str, i64]) -> Result<i64, std::num::ParseIntError> {
    let n = match_variant!(v {
        s: &'static str => s.parse::<i64>()?,
        n: i64 => {
            if n < 0 {
                return Ok(0);
            }
            n
        }
    });
    Ok(n * 2)
}

fn main() {
    assert_eq!(parse(Variant::new("21")), Ok(42));
    assert!(parse(Variant::new("x")).is_err());
    assert_eq!(parse(Variant::new(-5i64)), Ok(0));
    assert_eq!(parse(Variant::new(5i64)), Ok(10));

    let mut found = Vec::new();
    for v in [Variant::<variant::T![u8, char]>::new(1u8), Variant::new('z')] {
        let label = match_variant!(v {
            n: u8 => n.to_string(),
            c: char => c.to_string(),
        });
        found.push(label);
    }
    assert_eq!(found, ["1", "z"]);
}
