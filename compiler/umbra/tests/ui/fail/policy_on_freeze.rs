//! Error: only `read_in` takes a policy.

#[umbra::attr::freeze(limit, policy = umbra::AlwaysAlias)]
fn clamp(value: u32, limit: u32) -> u32 {
    value.min(limit)
}

fn main() {
    assert_eq!(clamp(9, 4), 4);
}
