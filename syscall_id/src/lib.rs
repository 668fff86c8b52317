#![no_std]
#![feature(custom_test_frameworks)]
#![test_runner(test_runner)]

pub const SYSCALL_OPEN: usize = 56;
pub const SYSCALL_WRITE: usize = 64;
pub const SYSCALL_EXIT: usize = 93;

#[cfg(test)]
fn test_runner(_tests: &[&dyn Fn()]) {
    unreachable!("this function will never be called");
}
