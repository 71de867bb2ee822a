use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Extracts the short type name from a full type path and caches it.
///
/// `alloc::string::String` becomes `String`, `i32` stays `i32`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, &'static str>>> = OnceLock::new();

    let full: &'static str = std::any::type_name::<T>();

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock();

    if let Some(&short) = guard.get(full) {
        return short;
    }

    let short = short_path(full);
    guard.insert(full, short);
    short
}

/// Strips module paths while keeping generic arguments readable,
/// e.g. `dynvec::DynamicArray<alloc::string::String>` -> `DynamicArray<String>`.
fn short_path(full: &'static str) -> &'static str {
    if !full.contains('<') {
        return full.rsplit("::").next().unwrap_or(full);
    }

    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                short.push_str(&segment);
                segment.clear();
                short.push(c);
            }
            _ => segment.push(c),
        }
    }
    short.push_str(&segment);
    Box::leak(short.into_boxed_str())
}
