//! Build metadata injected at compile time.
//!
//! The packaging pipeline sets `HELLO_GOPHER_VERSION`, `HELLO_GOPHER_BUILD_DATE`
//! (ISO-8601, UTC) and `HELLO_GOPHER_GIT_COMMIT` while compiling; local builds
//! fall back to placeholders.

pub const DEV_VERSION: &str = "dev";
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_date: &'static str,
    pub git_commit: &'static str,
    pub rustc_version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: injected(option_env!("HELLO_GOPHER_VERSION"), DEV_VERSION),
            build_date: injected(option_env!("HELLO_GOPHER_BUILD_DATE"), UNKNOWN),
            git_commit: injected(option_env!("HELLO_GOPHER_GIT_COMMIT"), UNKNOWN),
            rustc_version: injected(option_env!("HELLO_GOPHER_RUSTC_VERSION"), UNKNOWN),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

fn injected(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_injected_values_fall_back() {
        assert_eq!(injected(None, DEV_VERSION), "dev");
        assert_eq!(injected(Some(""), UNKNOWN), "unknown");
        assert_eq!(injected(Some("  "), UNKNOWN), "unknown");
        assert_eq!(injected(Some("1.2.3"), DEV_VERSION), "1.2.3");
    }

    #[test]
    fn current_describes_this_binary() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "hello-gopher");
        assert_eq!(info.os, std::env::consts::OS);
        assert_eq!(info.arch, std::env::consts::ARCH);
        assert!(!info.version.is_empty());
        assert!(!info.rustc_version.is_empty());
    }
}
