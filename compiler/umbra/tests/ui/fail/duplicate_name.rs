//! Error: a name may be listed only once.

#[umbra::attr::poison(handle, handle)]
fn answer(handle: String) -> usize {
    handle.len()
}

fn main() {
    assert_eq!(answer(String::from("ab")), 2);
}
