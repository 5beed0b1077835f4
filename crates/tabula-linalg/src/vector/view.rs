//! Named field access (`v.x`, `v.y`, ...) for vectors of up to 4 dimensions.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

macro_rules! field_deref {
    ($n:literal => $target:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Same layout: `#[repr(transparent)]` array vs. `#[repr(C)]` fields plus a ZST.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

field_deref!(1 => X);
field_deref!(2 => XY);
field_deref!(3 => XYZ);
field_deref!(4 => XYZW);
