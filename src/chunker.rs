/*!
 * Bounded-size text chunking with paragraph-aware cut points.
 *
 * Large documents are split into chunks that fit in a single completion
 * request. Cuts are preferred at a blank line (paragraph break) so that
 * sentences and markup blocks are not split mid-construct; when no break
 * exists in range the cut lands exactly at the size limit.
 */

/// Default maximum characters per chunk (10KB of ASCII text)
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Split text into ordered chunks of at most `max_chars` characters.
///
/// Chunks are contiguous substrings of the input: concatenating them in
/// order reproduces the input exactly. A chunk ends just after the last
/// paragraph break (`"\n\n"`) that starts strictly after the chunk's first
/// character and fits within the limit; otherwise it ends at the limit.
/// Text shorter than the limit yields a single chunk, empty text none.
pub fn split_text(text: &str, max_chars: usize) -> Vec<&str> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        // Byte offset of the character just past the limit; None means the
        // remainder fits in one chunk.
        let limit = match rest.char_indices().nth(max_chars) {
            Some((byte_offset, _)) => byte_offset,
            None => {
                chunks.push(rest);
                break;
            }
        };

        let cut = match rest[..limit].rfind("\n\n") {
            Some(pos) if pos > 0 => pos + 2,
            _ => limit,
        };

        chunks.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    chunks
}
