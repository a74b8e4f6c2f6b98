/// Re-exports each listed crate, and its items, inlined into the
/// documentation of the category crate.
///
/// ```ignore
/// doc_inline_reexport! { rb_tree }
/// ```
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
