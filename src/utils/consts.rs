/// Width of every bit-string token, as printed by `std::bitset<16>`
pub const INPUT_BIT_WIDTH: usize = 16;

/// 日志级别（可被 RUST_LOG 覆盖）
pub const LOG_LEVEL: &str = "info";

/// Default `--header_mode` label
pub const DEFAULT_HEADER_MODE: &str = "implicit";

/// Default `--ldr` label (low data rate off)
pub const DEFAULT_LDR: &str = "";

// ============================================================================
// Artifact naming
// ============================================================================

/// Prefix of the emitted C array name
pub const DECLARATION_PREFIX: &str = "whitening_sequence_sf";

/// Middle part of the output file name: sf<ppm>_whitening_declaration_<mode>.txt
pub const OUTPUT_FILE_STEM: &str = "_whitening_declaration_";

/// Output file extension
pub const OUTPUT_FILE_EXT: &str = "txt";

/// C element type of the declaration
pub const DECLARATION_TYPE: &str = "const unsigned short";

/// Hex digits per literal (u16)
pub const HEX_DIGITS: usize = 4;
