/// Build a [`Sequence`](crate::Sequence) from a list of values.
///
/// The sequence gets the default constraint of its element type, which every
/// listed value satisfies.
///
/// ```
/// use coffer_collections::seq;
/// use coffer_values::Value;
///
/// let numbers = seq![1i64, 2, 3];
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
///
/// let mixed = seq![Value::from(1), Value::from("two"), Value::Null];
/// assert_eq!(mixed.count(), 3);
///
/// let empty = seq![];
/// let _: &coffer_collections::Sequence<i64> = &empty;
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::Sequence<_> as ::core::iter::FromIterator<_>>::from_iter([$($value),+])
    };
}
