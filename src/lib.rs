//! **snipgen** - Lightweight CLI for extracting marked snippet regions into documentation files
//!
//! Scans source trees for comment-embedded `[START name]` / `[END name]` markers,
//! captures each named region (overlap and nesting supported), runs an ordered
//! transform pipeline over it, and writes one attributed standalone file per region.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core extraction engine - single-pass collection and pure transforms
pub mod core {
    /// Line classification for boundary and control markers
    pub mod marker;
    pub use marker::{MarkerTag, classify};

    /// Single-pass region collection with overlap/nesting support
    pub mod collect;
    pub use collect::{CollectError, FileConfig, Region, collect_regions, derive_config};

    /// Ordered pure rewrites applied to captured regions
    pub mod transform;

    /// Attribution header and deterministic output placement
    pub mod emit;

    /// Per-file run loop gluing walk, collect, transform and emit together
    pub mod extract;
    pub use extract::run as extract_run;
}

/// Infrastructure - Configuration, I/O, and discovery
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// UTF-8 line reading and overwriting output writes
    pub mod io;
    pub use io::{read_lines, write_output};

    /// Gitignore-aware directory walking
    pub mod walk;
    pub use walk::FileWalker;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use self::core::{CollectError, MarkerTag, Region, extract_run};
pub use infra::{Config, FileWalker, load_config};
