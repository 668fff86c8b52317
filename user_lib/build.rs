use std::{env, fs, path::PathBuf};

/// Load address the kernel's loader expects for every user program.
const BASE_ADDRESS: usize = 0x8040_0000;

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let ld = out_dir.join("linker.ld");
    fs::write(&ld, linker_script(BASE_ADDRESS)).expect("failed to write linker script");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LOG");
    println!("cargo:rustc-link-arg=-T{}", ld.display());
    println!("cargo:rustc-force-frame-pointers=yes");
}

/// `.text.entry` goes first so `_start` sits at the load address, and `sbss`
/// and `ebss` bound the range the runtime zeroes.
fn linker_script(base: usize) -> String {
    format!(
        "OUTPUT_ARCH(riscv)
ENTRY(_start)

SECTIONS
{{
    . = {base:#x};
    .text : {{
        *(.text.entry)
        *(.text .text.*)
    }}
    .rodata : {{
        *(.rodata .rodata.*)
        *(.srodata .srodata.*)
    }}
    .data : {{
        *(.data .data.*)
        *(.sdata .sdata.*)
    }}
    .bss : {{
        sbss = .;
        *(.bss .bss.*)
        *(.sbss .sbss.*)
        ebss = .;
    }}
    /DISCARD/ : {{
        *(.eh_frame)
        *(.debug*)
    }}
}}
"
    )
}
