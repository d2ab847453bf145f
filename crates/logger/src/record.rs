//! Log record and call-site types

use crate::Level;
use std::borrow::Cow;
use std::fmt;

/// Where a log call was issued from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file, as given by `file!()`
    pub file: &'static str,
    /// Fully qualified path of the enclosing function
    pub function: &'static str,
    /// Line number
    pub line: u32,
}

impl CallSite {
    /// Create a call site from its parts
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// File name without its directory
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.file_name(), self.function, self.line)
    }
}

/// Turn the type name of a probe fn into the path of the function around it.
///
/// `call_site!` declares a nested `fn __here() {}` and passes its type name,
/// e.g. `app::server::handle::{{closure}}::__here`.
#[doc(hidden)]
pub fn __function_path(probe: &'static str) -> &'static str {
    let mut name = probe.strip_suffix("::__here").unwrap_or(probe);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// One log call, consumed as soon as a writer has rendered it
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Severity
    pub level: Level,
    /// Where the call came from
    pub call_site: CallSite,
    /// The formatted message
    pub message: Cow<'a, str>,
}

impl<'a> Record<'a> {
    /// Create a new record
    #[inline]
    pub fn new(level: Level, call_site: CallSite, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            call_site,
            message: message.into(),
        }
    }

    /// Create a record from format arguments, borrowing when no formatting is needed
    #[inline]
    pub fn from_args(level: Level, call_site: CallSite, args: fmt::Arguments<'a>) -> Self {
        let message = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        Self::new(level, call_site, message)
    }

    /// Convert to an owned record (for sending across threads)
    pub fn into_owned(self) -> Record<'static> {
        Record {
            level: self.level,
            call_site: self.call_site,
            message: Cow::Owned(self.message.into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(CallSite::new("src/bin/main.rs", "app::main", 3).file_name(), "main.rs");
        assert_eq!(CallSite::new("C:\\src\\lib.rs", "app::run", 3).file_name(), "lib.rs");
        assert_eq!(CallSite::new("lib.rs", "app::run", 3).file_name(), "lib.rs");
    }

    #[test]
    fn test_call_site_display() {
        let site = CallSite::new("src/server.rs", "app::server::handle", 42);
        assert_eq!(site.to_string(), "server.rs-app::server::handle-42");
    }

    #[test]
    fn test_function_path_strips_probe_and_closures() {
        assert_eq!(__function_path("app::run::__here"), "app::run");
        assert_eq!(
            __function_path("app::run::{{closure}}::{{closure}}::__here"),
            "app::run"
        );
    }

    #[test]
    fn test_call_site_macro_names_this_function() {
        let site = crate::call_site!();
        assert!(site.file.ends_with("record.rs"));
        assert!(
            site.function
                .ends_with("record::tests::test_call_site_macro_names_this_function"),
            "{}",
            site.function
        );
    }

    #[test]
    fn test_from_args_borrows_literals() {
        let record = Record::from_args(Level::Info, crate::call_site!(), format_args!("plain"));
        assert!(matches!(record.message, Cow::Borrowed("plain")));

        let n = 7;
        let message = Record::from_args(Level::Info, crate::call_site!(), format_args!("n={n}"))
            .into_owned()
            .message;
        assert_eq!(message, "n=7");
    }
}
