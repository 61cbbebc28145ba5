use crate::greeting::Greeting;
use crate::source::GreetingSource;
use std::ffi::CStr;
use std::os::raw::c_char;
use tracing::trace;

extern "C" {
    #[link_name = "Hello_GetMessage"]
    fn hello_get_message() -> *const c_char;
}

/// Greeting source backed by `Hello_GetMessage` from `src/hello.c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeGreeter {
    _private: (),
}

impl NativeGreeter {
    pub fn new() -> Self {
        NativeGreeter { _private: () }
    }
}

impl GreetingSource for NativeGreeter {
    fn native_greeting(&self) -> Option<Greeting> {
        trace!("calling Hello_GetMessage");
        let ptr = unsafe { hello_get_message() };
        // The C side owns the string; it is copied out before returning.
        unsafe { greeting_from_ptr(ptr) }
    }
}

/// Copies a greeting out of a C string pointer, mapping null to `None`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// and unmodified for the duration of this call.
pub unsafe fn greeting_from_ptr(ptr: *const c_char) -> Option<Greeting> {
    if ptr.is_null() {
        trace!("native greeting pointer is null");
        return None;
    }
    let message = unsafe { CStr::from_ptr(ptr) };
    trace!(len = message.to_bytes().len(), "copied native greeting");
    Some(Greeting::from_c_str(message))
}
