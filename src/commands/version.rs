use crate::build_info::BuildInfo;

/// Five-line version block.
pub fn message(build: &BuildInfo) -> String {
    [
        format!("{} version {}", build.name, build.version),
        format!("Build date: {}", build.build_date),
        format!("Git commit: {}", build.git_commit),
        format!("Rust version: {}", build.rustc_version),
        format!("OS/Arch: {}/{}", build.os, build.arch),
    ]
    .join("\n")
}
