// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndstride prelude.
//!
//! This module contains the most used types, type aliases, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use ndstride::prelude::*;
//! # fn main() { }
//! ```

#[doc(no_inline)]
pub use crate::NdArray;

#[doc(no_inline)]
pub use crate::{c32, c64, ArrayC32, ArrayC64, ArrayF32, ArrayF64};

#[doc(no_inline)]
pub use crate::{FancyIndex, Slice};

pub use crate::{fancy, s};

#[doc(no_inline)]
pub use crate::{ArrayError, ElementKind, ErrorKind, IntoShape, NdElement};

#[doc(no_inline)]
pub use crate::{broadcast_shape, concat_horizontal, concat_vertical, concatenate};

#[doc(no_inline)]
pub use crate::linalg::{LinalgBackend, LuBackend};
