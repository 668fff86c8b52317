use bitflags::bitflags;

bitflags! {
    /// Flags accepted by the `open` syscall.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        const RDONLY = 0;
        const WRONLY = 1 << 0;
        const RDWR = 1 << 1;
        const CREATE = 1 << 9;
        const TRUNC = 1 << 10;
    }
}

#[cfg(all(unix, test))]
mod test {
    use super::OpenFlags;

    #[test]
    fn test_open_flags_bits() {
        assert_eq!(OpenFlags::RDONLY.bits(), 0);
        assert_eq!(OpenFlags::WRONLY.bits(), 1);
        assert_eq!(OpenFlags::RDWR.bits(), 2);
        assert_eq!(OpenFlags::CREATE.bits(), 0x200);
        assert_eq!(OpenFlags::TRUNC.bits(), 0x400);
    }
}
