//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tabmark Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[storage]
# data_dir = ""           # empty = platform data directory

[navigation]
# homepage = "https://www.google.com"
# timeout_secs = 15       # 1-300
# restore_session = true

[adblock]
# enabled = true
# patterns = [            # URL globs, first match wins
#   "*://*.doubleclick.net/*",
#   "*://*.googlesyndication.com/*",
# ]

[logging]
# level = "info"          # trace, debug, info, warn, error

# Bookmarks written when the bookmark file is missing or unreadable.
# Listing any entry here replaces the built-in set.
# [[bookmarks.defaults]]
# title = "Google"
# url = "https://www.google.com"
"##
    .to_string()
}
