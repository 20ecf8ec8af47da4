/// How workers get at the bytes of their range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IoMode {
    /// One shared read-only memory map
    #[default]
    Mmap,
    /// Independent file handles with seek + buffered reads
    Buffered,
}
