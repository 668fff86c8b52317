//! Writes a fixed message to `text.txt` one byte per `write` call. Uses only
//! `open` and `write`; nothing is closed and no return value is checked.

#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(user_lib::test_utils::test_runner)]

extern crate user_lib;

use user_lib::Kernel;

#[unsafe(no_mangle)]
pub fn main() -> i32 {
    common::write1(&mut Kernel)
}
