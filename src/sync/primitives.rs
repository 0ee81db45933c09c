/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Implementations
//!
//! Implements the value traits for the primitive numeric types.
//!
//! # Author
//!
//! Haixing Hu

impl_counter_integer!(i8);
impl_counter_integer!(i16);
impl_counter_integer!(i32);
impl_counter_integer!(i64);
impl_counter_integer!(isize);
impl_counter_integer!(u8);
impl_counter_integer!(u16);
impl_counter_integer!(u32);
impl_counter_integer!(u64);
impl_counter_integer!(usize);

impl_counter_float!(f32);
impl_counter_float!(f64);

impl_state_code_integer!(i8);
impl_state_code_integer!(i16);
impl_state_code_integer!(i32);
impl_state_code_integer!(i64);
impl_state_code_integer!(isize);
impl_state_code_integer!(u8);
impl_state_code_integer!(u16);
impl_state_code_integer!(u32);
impl_state_code_integer!(u64);
impl_state_code_integer!(usize);
