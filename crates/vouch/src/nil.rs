use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// Types which may represent the absence of a value.
///
/// This is implemented for the kinds that can be absent: [`Option`], raw
/// pointers and weak references. It is also implemented for references and
/// smart pointers by delegating to what they point to, and for common value
/// types which are never nil.
///
/// Types without an implementation are rejected by [`check::nil`] when
/// compiling:
///
/// ```compile_fail
/// struct Opaque;
///
/// vouch::test(|t| {
///     vouch::check::nil(t, Opaque);
/// });
/// ```
///
/// [`check::nil`]: crate::check::nil
pub trait Nilable {
    /// Test if the value is nil.
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for rc::Weak<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nilable for sync::Weak<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

macro_rules! delegate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: ?Sized + Nilable> Nilable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }
            }
        )*
    };
}

delegate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nilable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil! {
    (), bool, char, str, String,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! never_nil_generic {
    ($($ty:ty => [$($param:ident),*]),* $(,)?) => {
        $(
            impl<$($param),*> Nilable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil_generic! {
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
}

impl<T, const N: usize> Nilable for [T; N] {
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}
