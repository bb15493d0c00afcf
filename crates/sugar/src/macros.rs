/// Builds a [`List`](crate::List) from its elements, like `vec!`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from(::std::vec![$($value),+])
    };
}

/// Builds a [`Set`](crate::Set); repeated elements keep their first position.
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        [$($value),+].into_iter().collect::<$crate::Set<_>>()
    };
}
