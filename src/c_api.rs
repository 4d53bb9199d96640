// C entry points for hosts that are not written in Rust.
// Every function returns a string owned by Rust; hand it back through
// `urdu_slug_free_string`. Panics are caught here and never cross the boundary.
use crate::core::slug::DEFAULT_FALLBACK;
use crate::post::PostRecord;
use crate::{make_slug, transliterate, DEFAULT_ENGINE};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;
use tracing::error;

/// Null or non-UTF-8 input reads as empty text.
unsafe fn read_str<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    // Pipeline output is ASCII, so an interior NUL cannot occur; stay safe anyway.
    CString::new(s)
        .unwrap_or_else(|_| CString::new(DEFAULT_FALLBACK).unwrap_or_default())
        .into_raw()
}

fn guarded(label: &str, fallback: &str, f: impl FnOnce() -> String + std::panic::UnwindSafe) -> *mut c_char {
    let out = catch_unwind(f).unwrap_or_else(|_| {
        error!(function = label, "panic caught at the C boundary");
        fallback.to_string()
    });
    into_c_string(out)
}

/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urdu_slug_make(text: *const c_char) -> *mut c_char {
    let text = read_str(text);
    guarded("urdu_slug_make", DEFAULT_FALLBACK, || make_slug(text))
}

/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urdu_slug_transliterate(text: *const c_char) -> *mut c_char {
    let text = read_str(text);
    guarded("urdu_slug_transliterate", "", || transliterate(text))
}

/// Slug for a JSON post record (`title`, `lines`, `body`). Malformed JSON is
/// treated as an empty post.
///
/// # Safety
/// `json` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urdu_slug_for_post_json(json: *const c_char) -> *mut c_char {
    let json = read_str(json);
    guarded("urdu_slug_for_post_json", DEFAULT_FALLBACK, || {
        let post: PostRecord = serde_json::from_str(json).unwrap_or_default();
        DEFAULT_ENGINE.make_slug_for(&post)
    })
}

/// # Safety
/// `s` must be null or a pointer returned by one of the functions above that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn urdu_slug_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
