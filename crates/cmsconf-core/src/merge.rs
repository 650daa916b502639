//! Layering caller options over builder defaults.
//!
//! Every builder takes an options struct whose fields are all `Option<T>`.
//! Merging is shallow: a caller value replaces the default for that key
//! wholesale, an unset caller key falls back to the default, and a key unset
//! on both sides stays unset.

/// Shallow, caller-wins merge of two option sets.
pub trait Merge: Sized {
    /// Merge `self` (caller options) over `defaults`.
    fn merge(self, defaults: Self) -> Self;
}

/// Resolve optional caller options against defaults.
///
/// `None` behaves exactly like an all-unset options value.
pub fn resolve<T: Merge + Default>(options: Option<T>, defaults: T) -> T {
    options.unwrap_or_default().merge(defaults)
}

/// Implement [`Merge`] for an options struct whose fields are all `Option<T>`.
macro_rules! impl_merge {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::merge::Merge for $ty {
            fn merge(self, defaults: Self) -> Self {
                Self {
                    $($field: self.$field.or(defaults.$field),)+
                }
            }
        }
    };
}

pub(crate) use impl_merge;
