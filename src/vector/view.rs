use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

// `Vector<T, N>` derefs to a `#[repr(C)]` view struct with one public field
// per element, which is what makes `v.x`/`v.y`/`v.z`/`v.w` work for vectors
// of up to 4 elements.

macro_rules! views {
    ($($name:ident / $dim:literal: $($field:ident)+;)+) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $(pub $field: T,)+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $dim> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: the view is `repr(C)` with $dim fields of type
                    // `T` (plus a trailing zero-sized one), matching the
                    // layout of `[T; $dim]`.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $dim> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    X / 1: x;
    XY / 2: x y;
    XYZ / 3: x y z;
    XYZW / 4: x y z w;
}
