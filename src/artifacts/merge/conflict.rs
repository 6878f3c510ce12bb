use bytes::{BufMut, Bytes, BytesMut};

/// Opening marker of the current side
pub const CURRENT_MARKER: &str = "<<<<<<< HEAD\n";

/// Separator between the current and the target side
pub const SEPARATOR_MARKER: &str = "=======\n";

/// Closing marker of the target side
pub const TARGET_MARKER: &str = ">>>>>>>\n";

/// Content written for a conflicting path
///
/// A side missing from its tree contributes nothing. A side whose content does
/// not end with a newline gets one, so markers always start a line.
pub fn conflict_content(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let mut content = BytesMut::new();

    content.put_slice(CURRENT_MARKER.as_bytes());
    put_side(&mut content, current);
    content.put_slice(SEPARATOR_MARKER.as_bytes());
    put_side(&mut content, target);
    content.put_slice(TARGET_MARKER.as_bytes());

    content.freeze()
}

fn put_side(content: &mut BytesMut, side: Option<&[u8]>) {
    let Some(side) = side.filter(|side| !side.is_empty()) else {
        return;
    };

    content.put_slice(side);
    if !side.ends_with(b"\n") {
        content.put_u8(b'\n');
    }
}
