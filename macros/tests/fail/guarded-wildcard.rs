use variant::{match_variant, Variant};

fn main() {
    let v: Variant![i32, String] = Variant::new(1);
    let _: usize = match_variant!(v.as_ref() {
        n: &i32 => *n as usize,
        _ if true => 0,
    });
    drop(v);
}
