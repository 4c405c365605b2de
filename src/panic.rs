//! Fatal diagnostics
//!
//! Calling the wrong accessor on a [`Result`](crate::Result) is a defect in the
//! caller, not a recoverable failure. This module renders the diagnostic for
//! such a defect as `PANIC: [file:line:function] message` and unwinds with it.

use std::fmt;
use std::panic::Location;
use thiserror::Error;
use tracing::error;

/// Call site attached to a [`Defect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl SourceLocation {
    /// Build a location from raw `file!()` / `line!()` / function path values
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file: file_base_name(file),
            line,
            function: Some(fn_base_name(function)),
        }
    }

    /// Location of the caller. The enclosing function is not known here.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: file_base_name(location.file()),
            line: location.line(),
            function: None,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "[{}:{}:{}]", self.file, self.line, function),
            None => write!(f, "[{}:{}]", self.file, self.line),
        }
    }
}

/// An unrecoverable programmer error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("PANIC: {location} {message}")]
pub struct Defect {
    pub location: SourceLocation,
    pub message: String,
}

impl Defect {
    pub fn new(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Log the defect and unwind with its rendering as the panic payload.
#[cold]
#[track_caller]
pub fn raise(defect: Defect) -> ! {
    error!(location = %defect.location, "{}", defect.message);
    panic!("{defect}\n");
}

/// Concatenate the `Display` rendering of every part, in order.
#[doc(hidden)]
pub fn concat_parts(parts: &[&dyn fmt::Display]) -> String {
    parts.iter().map(|part| part.to_string()).collect()
}

/// Strip the directory from a source path.
pub fn file_base_name(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(pos) => &file[pos + 1..],
        None => file,
    }
}

/// Reduce a full function path to its last segment.
///
/// `crate::module::Type<T>::method::{{closure}}` becomes `method`.
pub fn fn_base_name(mut name: &str) -> &str {
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }

    if name.ends_with('>') {
        if let Some(pos) = rfind_balanced(name, '<', '>') {
            name = &name[..pos];
        }
    }

    match name.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}

/// Index of the `open` token matching the last `close` token, scanning from the end.
fn rfind_balanced(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in s.char_indices().rev() {
        if c == close {
            depth += 1;
        } else if c == open {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_base_name() {
        assert_eq!(file_base_name("src/result/mod.rs"), "mod.rs");
        assert_eq!(file_base_name("C:\\work\\lib.rs"), "lib.rs");
        assert_eq!(file_base_name("main.rs"), "main.rs");
    }

    #[test]
    fn test_fn_base_name() {
        assert_eq!(fn_base_name("resultkit::demo::parse_data"), "parse_data");
        assert_eq!(fn_base_name("tests::run::{{closure}}::{{closure}}"), "run");
        assert_eq!(fn_base_name("app::Parser<alloc::string::String>::step"), "step");
        assert_eq!(fn_base_name("app::convert<alloc::vec::Vec<u8>>"), "convert");
        assert_eq!(fn_base_name("main"), "main");
    }

    #[test]
    fn test_rfind_balanced_unbalanced() {
        assert_eq!(rfind_balanced("a<b>>", '<', '>'), None);
        assert_eq!(rfind_balanced("a<b<c>>", '<', '>'), Some(1));
    }

    #[test]
    fn test_location_display() {
        let location = SourceLocation::new("src/demo/mod.rs", 42, "resultkit::demo::parse_data");
        assert_eq!(location.to_string(), "[mod.rs:42:parse_data]");
        assert_eq!(location.function(), Some("parse_data"));
    }

    #[test]
    fn test_caller_location() {
        let expected_line = line!() + 1;
        let location = SourceLocation::caller();
        assert_eq!(location.file(), "panic.rs");
        assert_eq!(location.line(), expected_line);
        assert_eq!(location.function(), None);
        assert_eq!(location.to_string(), format!("[panic.rs:{}]", expected_line));
    }

    #[test]
    fn test_defect_display() {
        let defect = Defect::new(SourceLocation::new("a/b.rs", 7, "x::y"), "bad state");
        assert_eq!(defect.to_string(), "PANIC: [b.rs:7:y] bad state");
    }

    #[test]
    fn test_concat_parts() {
        let count = 3;
        assert_eq!(concat_parts(&[&"got ", &count, &" items"]), "got 3 items");
    }

    #[test]
    #[should_panic(expected = "PANIC: [b.rs:7:y] bad state")]
    fn test_raise_panics() {
        raise(Defect::new(SourceLocation::new("a/b.rs", 7, "x::y"), "bad state"));
    }
}
