//! Common constants used throughout the kits scaffolder.

/// Version-control metadata entry that traversal never descends into.
pub const RESERVED_ENTRY: &str = ".git";

/// Package manifest produced by the scaffold and merged across layers.
pub const MANIFEST_FILE: &str = "package.json";

/// Files that are deep-merged instead of overwritten when layers collide.
pub const MERGEABLE_FILES: [&str; 2] = [MANIFEST_FILE, "extensions.json"];

/// Dependency sections normalized by `sort_dependencies`, in output order.
pub const DEPENDENCY_SECTIONS: [&str; 4] = [
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

/// Version written into the manifest stub.
pub const BASELINE_VERSION: &str = "0.0.0";

/// Generated reference-list file.
pub const REFERENCE_FILE: &str = "tsconfig.json";

/// Generated environment file.
pub const ENV_FILE: &str = ".env";

/// Supported configuration file names, looked up in the template root
pub const CONFIG_FILES: [&str; 3] = ["kits.json", "kits.yml", "kits.yaml"];

/// Environment variable overriding the bundled template directory.
pub const TEMPLATE_DIR_ENV: &str = "KITS_TEMPLATE_DIR";

/// Template directory shipped with the crate.
pub const BUNDLED_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");
