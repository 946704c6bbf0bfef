/// Builds a [`Row`](crate::Row) from style directives and child views.
#[macro_export]
macro_rules! row {
    ($($item:expr),* $(,)?) => {
        $crate::Row(::std::vec![$($crate::Item::from($item)),*])
    };
}

/// Builds a [`Column`](crate::Column) from style directives and child views.
#[macro_export]
macro_rules! column {
    ($($item:expr),* $(,)?) => {
        $crate::Column(::std::vec![$($crate::Item::from($item)),*])
    };
}

/// Builds a [`Card`](crate::Card) from style directives and child views.
#[macro_export]
macro_rules! card {
    ($($item:expr),* $(,)?) => {
        $crate::Card(::std::vec![$($crate::Item::from($item)),*])
    };
}

/// Boxes each view, for builders that take a plain list of children.
#[macro_export]
macro_rules! views {
    ($($view:expr),* $(,)?) => {
        ::std::vec![$($crate::boxed($view)),*]
    };
}
