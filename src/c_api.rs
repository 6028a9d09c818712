// C ABI for embedding the classifier in an external UI shell.
// Panics are caught at the boundary; strings returned to the caller must be
// released with `bias_detector_free_string`.
use crate::core::classifier::BiasClassifier;
use crate::error::{BiasError, Result};
use crate::persistence::load_lexicon;
use crate::report::Report;
use crate::config::TextConfig;
use libc::{c_char, c_int};
use log::error;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use std::sync::OnceLock;

static CLASSIFIER: OnceLock<BiasClassifier> = OnceLock::new();

fn classifier() -> &'static BiasClassifier {
    CLASSIFIER.get_or_init(BiasClassifier::default)
}

unsafe fn read_str<'a>(s: *const c_char) -> Result<&'a str> {
    if s.is_null() {
        return Err(BiasError::InvalidInput("null pointer".to_string()));
    }
    CStr::from_ptr(s)
        .to_str()
        .map_err(|e| BiasError::InvalidInput(e.to_string()))
}

/// Loads the lexicon at `lexicon_path`, or the built-in lists when it is
/// null. Returns 0 on success, 1 if already initialized, -1 on error.
#[no_mangle]
pub extern "C" fn bias_detector_init(lexicon_path: *const c_char) -> c_int {
    let result = catch_unwind(AssertUnwindSafe(|| -> Result<c_int> {
        if CLASSIFIER.get().is_some() {
            return Ok(1);
        }
        let classifier = if lexicon_path.is_null() {
            BiasClassifier::default()
        } else {
            let path = unsafe { read_str(lexicon_path) }?;
            BiasClassifier::new(load_lexicon(Path::new(path))?, TextConfig::default())
        };
        Ok(if CLASSIFIER.set(classifier).is_ok() { 0 } else { 1 })
    }));
    match result {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            error!("Bias detector initialization failed: {}", e);
            -1
        }
        Err(_) => {
            error!("Panic during bias detector initialization");
            -1
        }
    }
}

/// Analyzes `text` and returns the full report as a JSON string, or null on
/// error. Uses the built-in lexicon if `bias_detector_init` was never called.
#[no_mangle]
pub extern "C" fn bias_detector_analyze(text: *const c_char) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| -> Result<String> {
        let text = unsafe { read_str(text) }?;
        let classifier = classifier();
        let report = Report::build(classifier.analyze(text), classifier.lexicon())?;
        Ok(serde_json::to_string(&report)?)
    }));
    let json = match result {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            error!("Bias analysis failed: {}", e);
            return ptr::null_mut();
        }
        Err(_) => {
            error!("Panic in bias_detector_analyze");
            return ptr::null_mut();
        }
    };
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

#[no_mangle]
pub extern "C" fn bias_detector_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
