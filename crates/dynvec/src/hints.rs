/// Marks `b == true` as the cold path, e.g. a reallocation or a length mismatch.
#[inline(always)]
pub(crate) fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }
    b
}

// Branch prediction hint
#[inline(always)]
#[cold]
fn cold() {}
