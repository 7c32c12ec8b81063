//! Configuration loaded from `.adops.toml`.
//!
//! Discovery starts in the current directory and walks up through its
//! ancestors; the first file found wins. An explicit `--config` path bypasses
//! discovery and must load cleanly. Command line flags override file values.

mod core;
mod loader;

pub use self::core::{AdopsConfig, CalculatorConfig, DisplayConfig};
pub use self::loader::{directory_ancestors, discover_config, load_config, load_config_file, parse_config};

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = ".adops.toml";

/// Contents written by `adops init`
pub const DEFAULT_CONFIG: &str = r#"# AdOps calculator configuration

[calculator]
# "falsy": zero or unparseable input counts as not filled in
# "zero_is_value": zero is a real value (0 clicks gives CTR 0.00%)
presence = "falsy"
# Clear the form of the mode being entered on every mode switch
reset_on_mode_switch = false

[display]
# "en" or "es"
locale = "en"
# "auto", "always" or "never"
color = "auto"
"#;
