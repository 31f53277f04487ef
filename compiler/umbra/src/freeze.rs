//! Read-only views of existing bindings.

/// Rebind each name to a shared reference to itself for one block.
///
/// Inside the block every frozen name has type `&T`, where `T` is the type
/// of the outer binding, and points at the original storage. After the block
/// the outer (possibly mutable) binding is visible again. Freezing an already
/// frozen name produces `&&T`, which reads the same way.
///
/// ```
/// let mut attempts = 0usize;
/// let mut log = Vec::new();
/// for _ in 0..3 {
///     attempts += 1;
///     umbra::freeze!(attempts, log => {
///         assert!(*attempts <= 3);
///         assert!(log.len() < *attempts);
///     });
///     log.push(attempts);
/// }
/// assert_eq!(log, [1, 2, 3]);
/// ```
///
/// Mutation through a frozen name does not compile:
///
/// ```compile_fail,E0594
/// let mut count = 0;
/// umbra::freeze!(count => {
///     *count += 1;
/// });
/// ```
#[macro_export]
macro_rules! freeze {
    ($($name:ident),+ $(,)? => $body:block) => {
        $crate::shadow!($(let $name = &$name),+ => $body)
    };
}
