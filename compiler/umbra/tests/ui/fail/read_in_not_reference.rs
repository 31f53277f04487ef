//! Error: `read_in` only rebinds parameters taken by reference.

#[umbra::attr::read_in(count)]
fn twice(count: u32) -> u32 {
    count * 2
}

fn main() {
    assert_eq!(twice(2), 4);
}
