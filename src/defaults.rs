//! Built-in ignore lists merged ahead of user-supplied rules.

/// Default name of the aggregated output file, created inside the scan root.
pub const DEFAULT_OUTPUT_NAME: &str = "all_files_content.txt";

/// Folder names (or root-relative paths) that are never descended into.
pub const DEFAULT_IGNORE_FOLDERS: &[&str] = &[
    // version control and dependencies
    ".git",
    "node_modules",
    // caches, virtual environments and build output
    "__pycache__",
    "venv",
    ".venv",
    ".cache",
    ".local",
    ".config",
    "dist",
    "build",
    ".pytest_cache",
    ".ropeproject",
    // project auxiliaries
    "lib",
    "tools",
    "debug",
    "description",
    "zen",
    "assets",
    "public",
];

/// File names (or root-relative paths) whose content is never collected.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    ".env",
    ".env.local",
    "id_rsa",
    "id_rsa.pub",
    "authorized_keys",
    ".DS_Store",
    "secret.txt",
    "excalidraw_widget_BK.js",
    "QUICKSTART.md",
    "README.md",
    DEFAULT_OUTPUT_NAME,
    "package-lock.json",
];

/// Glob patterns matched against root-relative, forward-slash paths.
pub const DEFAULT_IGNORE_GLOBS: &[&str] = &[
    "*.pyc",
    "*.log",
    "*.sqlite3",
    "*.db",
    "*.so",
    "__pycache__/*",
];
