//! Process start-up and teardown for user programs.

use core::ptr::addr_of_mut;

use alloc::vec::Vec;
use buddy_system_allocator::LockedHeap;
use crate::exit;

const USER_HEAP_SIZE: usize = 4096 * 4;

static mut HEAP_SPACE: [u8; USER_HEAP_SIZE] = [0; USER_HEAP_SIZE];

#[global_allocator]
static HEAP: LockedHeap<32> = LockedHeap::empty();

#[panic_handler]
fn panic_handler(panic_info: &core::panic::PanicInfo) -> ! {
    let err = panic_info.message();
    match panic_info.location() {
        Some(location) => println!(
            "Panicked at {}:{}, {}",
            location.file(),
            location.line(),
            err
        ),
        None => println!("Panicked: {}", err),
    }
    exit(1);
    unreachable!("sys_exit should not return");
}

pub fn clear_bss() {
    unsafe extern "C" {
        static sbss: u8;
        static ebss: u8;
    }
    let bss_start = unsafe { &sbss as *const u8 as usize };
    let bss_end = unsafe { &ebss as *const u8 as usize };
    (bss_start..bss_end).for_each(|a| unsafe { (a as *mut u8).write_volatile(0) });
}

pub fn init_heap() {
    unsafe {
        HEAP.lock()
            .init(addr_of_mut!(HEAP_SPACE) as usize, USER_HEAP_SIZE);
    }
}

/// Decodes the NUL-terminated `argv` array the loader placed on the stack.
/// Arguments that are not UTF-8 become empty strings.
pub fn collect_args(argc: usize, argv: usize) -> Vec<&'static str> {
    let argv_ptr = argv as *const *const u8;
    (0..argc)
        .map(|i| unsafe { *argv_ptr.add(i) })
        .filter(|arg_ptr| !arg_ptr.is_null())
        .map(|arg_ptr| {
            let arg = unsafe { core::ffi::CStr::from_ptr(arg_ptr as *const core::ffi::c_char) };
            arg.to_str().unwrap_or("")
        })
        .collect()
}
