// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_inline_content(size: usize) -> String {
    let base = "Some **bold text** with *emphasis*, _more_ __words__, ~struck~ `code span` and [a link](https://example.com). ";
    base.repeat(size)
}

/// Many openers that never close, so every styled-span attempt scans to the
/// next stray marker before giving up.
#[allow(dead_code)]
pub fn generate_stray_markers(size: usize) -> String {
    let base = "**a b *c d __e f _g h ~i j `k l [m n ";
    base.repeat(size)
}
