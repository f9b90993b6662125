//! Domain constants.

/// File extensions recognized as SystemVerilog/Verilog sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["sv", "svh", "v", "vh"];

/// Extensions of files that are normally pulled in through `` `include ``.
pub const HEADER_EXTENSIONS: &[&str] = &["svh", "vh"];

/// Scheme prefix of every URI the query layer accepts.
pub const FILE_URI_PREFIX: &str = "file://";

/// Maximum depth of nested `` `include `` expansion during indexing.
pub const MAX_INCLUDE_DEPTH: usize = 32;

/// Returns true if the extension (without dot) names a source file.
pub fn is_source_extension(ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}
