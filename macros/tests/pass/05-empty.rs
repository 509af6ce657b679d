use variant::{match_variant, Variant};

#[allow(dead_code)]
fn absurd(v: Variant![]) -> u32 {
    match_variant!(v {})
}

fn only(v: Variant![String]) -> String {
    match_variant!(v {
        s: String => s,
    })
}

fn main() {
    assert_eq!(only(String::from("x").into()), "x");
}
