#![no_std]
#![feature(custom_test_frameworks)]
#![test_runner(crate::test_utils::test_runner)]
#![reexport_test_harness_main = "test_main"]
#![feature(linkage)]

extern crate alloc;

pub use common::{FileSyscalls, OpenFlags};

#[macro_use]
pub mod console;
mod logger;
mod runtime;
mod syscall;
pub mod test_utils;

#[unsafe(no_mangle)]
#[unsafe(link_section = ".text.entry")]
pub extern "C" fn _start(argc: usize, argv: usize) -> ! {
    runtime::clear_bss();
    runtime::init_heap();
    logger::init();
    #[cfg(test)]
    test_main();
    let args = runtime::collect_args(argc, argv);
    exit(main(argc, args.as_slice()));
    unreachable!()
}

#[linkage = "weak"]
#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    unreachable!("main() should be defined in user program");
}

pub fn write(fd: usize, buffer: &[u8]) -> isize {
    syscall::sys_write(fd, buffer)
}

pub fn exit(exit_code: i32) -> isize {
    syscall::sys_exit(exit_code)
}

pub fn open(path: &str, flags: OpenFlags) -> isize {
    syscall::sys_open(path, flags.bits())
}

/// File syscalls backed by the running kernel.
pub struct Kernel;

impl FileSyscalls for Kernel {
    fn open(&mut self, path: &str, flags: OpenFlags) -> isize {
        open(path, flags)
    }

    fn write(&mut self, fd: usize, buf: &[u8]) -> isize {
        write(fd, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSyscalls, Kernel, console::STDOUT};

    #[test_case]
    fn test_kernel_write_stdout() {
        assert_eq!(Kernel.write(STDOUT, b"x\n"), 2);
    }
}
