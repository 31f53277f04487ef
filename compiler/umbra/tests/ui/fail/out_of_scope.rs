//! Error: a block binding does not outlive its block.

fn main() {
    let doubled = umbra::let_in!(let base = 21 => { base * 2 });
    assert_eq!(doubled, base * 2);
}
