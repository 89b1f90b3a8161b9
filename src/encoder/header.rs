//! C header text generation.
//!
//! This module renders a byte slice as C source text: an include guard,
//! a `const unsigned char` array of hex literals, and a length constant.
//! The rendering is a pure function of the input bytes, so identical input
//! always produces byte-identical output.

// ============================================================================
// Constants
// ============================================================================

/// Include-guard macro name used in the generated header.
pub const GUARD_NAME: &str = "ONE_WAV_H";

/// Identifier of the generated byte array.
pub const ARRAY_NAME: &str = "one_wav";

/// Number of byte literals emitted per source line.
///
/// Keeps generated lines bounded in width (12 literals is 72 columns).
pub const BYTES_PER_LINE: usize = 12;

// ============================================================================
// Rendering
// ============================================================================

/// Renders `data` as a complete C header.
///
/// The output embeds every input byte as a ` 0xHH,` literal (two lowercase
/// hex digits), wraps after every [`BYTES_PER_LINE`]th literal, and declares
/// `one_wav_len` with the exact byte count. The empty slice is legal and
/// yields an empty array body with a length of `0`.
///
/// # Example
/// ```
/// use wavtohead::encoder::render_header;
///
/// let header = render_header(&[0x00, 0x1f, 0xff]);
/// assert!(header.contains(" 0x00, 0x1f, 0xff,"));
/// assert!(header.contains("const unsigned int one_wav_len = 3;"));
/// ```
#[must_use]
pub fn render_header(data: &[u8]) -> String {
    // Preallocate: ~6 chars per literal plus boilerplate.
    let mut out = String::with_capacity(data.len() * 6 + 160);

    out.push_str(&format!("#ifndef {GUARD_NAME}\n#define {GUARD_NAME}\n\n"));
    out.push_str(&format!("const unsigned char {ARRAY_NAME}[] = {{\n"));

    for (i, byte) in data.iter().enumerate() {
        out.push_str(&format!(" 0x{byte:02x},"));
        if (i + 1) % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
    }

    // Exactly one newline before the closing brace. A count that is a
    // multiple of BYTES_PER_LINE already ended with the wrap newline.
    if data.is_empty() || data.len() % BYTES_PER_LINE != 0 {
        out.push('\n');
    }

    out.push_str("};\n");
    out.push_str(&format!(
        "const unsigned int {ARRAY_NAME}_len = {};\n\n",
        data.len()
    ));
    out.push_str(&format!("#endif // {GUARD_NAME}\n"));

    out
}
