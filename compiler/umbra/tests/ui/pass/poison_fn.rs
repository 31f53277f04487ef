//! Poisoning a parameter that is kept only for signature compatibility.

#[umbra::attr::poison(legacy_mode)]
fn area(width: u32, height: u32, legacy_mode: bool) -> u32 {
    width * height
}

fn main() {
    assert_eq!(area(3, 4, true), 12);
}
