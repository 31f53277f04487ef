//! The declarative forms composed the way downstream code uses them.

use pretty_assertions::assert_eq;
use umbra::{BindingMode, BindingModePolicy, ReadIn, TypeDescriptor};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    channel: u8,
    value: i32,
}

fn normalize(samples: &mut Vec<Sample>, gain: &i32) -> Vec<i32> {
    umbra::read_in!(gain => {
        let normalized = umbra::freeze!(samples => {
            samples.iter().map(|sample| sample.value * *gain).collect::<Vec<_>>()
        });
        samples.clear();
        normalized
    })
}

#[test]
fn freeze_inside_read_in_then_mutate_after() {
    let mut samples = vec![
        Sample { channel: 0, value: 1 },
        Sample { channel: 1, value: -2 },
    ];
    assert_eq!(samples[1].channel, 1);
    assert_eq!(normalize(&mut samples, &3), vec![3, -6]);
    assert!(samples.is_empty());
}

#[test]
fn shadow_then_freeze_then_poison() {
    let raw = "17";
    let report = umbra::shadow!(let raw: u32 = raw.parse().unwrap_or(0) => {
        let doubled = umbra::freeze!(raw => { *raw * 2 });
        umbra::poison!(raw => {
            format!("doubled={doubled}")
        })
    });
    assert_eq!(report, "doubled=34");
    assert_eq!(raw, "17");
}

#[test]
fn read_in_of_a_read_in_copy_is_still_a_copy() {
    let sample = Sample { channel: 2, value: 5 };
    let sample_ref = &sample;
    let modes = umbra::read_in!(sample_ref => {
        let outer: &ReadIn<'_, Sample> = &sample_ref;
        let outer_mode = outer.mode();
        umbra::read_in!(sample_ref => { (outer_mode, sample_ref.mode(), sample_ref.channel) })
    });
    assert_eq!(modes, (BindingMode::Value, BindingMode::Value, 2));
}

#[test]
fn let_in_value_is_the_body_value() {
    let greeting = umbra::let_in!(let name = "umbra", let mut out = String::new() => {
        out.push_str("hello, ");
        out.push_str(name);
        out
    });
    assert_eq!(greeting, "hello, umbra");
}

#[test]
fn trailing_commas_are_accepted() {
    let first = 1;
    let second = 2;
    let sum = umbra::freeze!(first, second, => { *first + *second });
    let product = umbra::let_in!(let a = 3, let b = 4, => { a * b });
    assert_eq!((sum, product), (3, 12));
}

#[test]
fn ignore_shadow_in_a_loop_body() {
    let mut totals = Vec::new();
    for line in ["1", "x", "3"] {
        umbra::ignore_shadow! {
            let line: Option<u32> = line.parse().ok();
        }
        totals.push(line.unwrap_or_default());
    }
    assert_eq!(totals, vec![1, 0, 3]);
}

/// Copies any `Copy` value up to a cache line.
struct CacheLinePolicy;

impl BindingModePolicy for CacheLinePolicy {
    fn mode(ty: TypeDescriptor) -> BindingMode {
        umbra::decide_with_limit(ty, 64)
    }
}

macro_rules! project_read_in {
    ($($name:ident),+ => $body:block) => {
        umbra::read_in!(policy = CacheLinePolicy; $($name),+ => $body)
    };
}

#[test]
fn wrapper_macro_fixes_the_policy_for_every_call() {
    let block = [3u64; 8];
    let text = String::from("kept");
    let (block_ref, text_ref) = (&block, &text);
    let modes = project_read_in!(block_ref, text_ref => {
        (block_ref.mode(), text_ref.mode(), block_ref[7], text_ref.len())
    });
    assert_eq!(modes, (BindingMode::Value, BindingMode::SharedRef, 3, 4));

    let default_mode = umbra::read_in!(block_ref => { block_ref.mode() });
    assert_eq!(default_mode, BindingMode::SharedRef);
}
