#![doc = r#"
parserelease: a scene release name parser.

This crate turns a release name such as `Show.Name.S01E02.1080p.WEB.h264-GROUP`
plus the section it was published in into a typed [`Release`] record and its
JSON form. It powers the `parserelease` CLI and can be embedded in pre-announce
bots, indexers or anything else that needs to understand release names.

Add dependency
--------------
```toml
[dependencies]
parserelease = "0.1"
```

Quick start: parse a release
----------------------------
```rust
use parserelease::{ReleaseParser, ReleaseType};

let parser = ReleaseParser::new("Show.Name.S01E02.Episode.Title.1080p.WEB.h264-GROUP", "TV-X264");
let data = &parser.data;

assert_eq!(data.kind, ReleaseType::TV);
assert_eq!(data.title.as_deref(), Some("Show Name"));
assert_eq!(data.season, Some(1));
assert_eq!(data.group.as_deref(), Some("GROUP"));
```

Straight to JSON
----------------
```rust
use parserelease::{parse_to_json, OutputParams};

fn main() -> parserelease::Result<()> {
    let params = OutputParams {
        omit_null: true,
        announce_section: true,
        ..OutputParams::default()
    };
    let json = parse_to_json("Artist-Album-WEB-FLAC-2023-GRP", "FLAC", &params)?;
    println!("{json}");
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::io;
use parserelease::{process_batch, OutputParams};

fn main() -> parserelease::Result<()> {
    let stdin = io::stdin();
    let report = process_batch(stdin.lock(), io::stdout().lock(), &OutputParams::default())?;
    eprintln!("parsed={} insufficient={} skipped={}", report.parsed, report.insufficient, report.skipped);
    Ok(())
}
```

Error handling
--------------
Parsing never fails. Rendering, config loading and batch I/O return
`parserelease::Result<T>`; match on `parserelease::Error` for specific cases.

```rust,no_run
use parserelease::{load_params, Error};

match load_params("/etc/parserelease.json") {
    Ok(params) => println!("{params:?}"),
    Err(Error::Config { path, message }) => eprintln!("bad config {path:?}: {message}"),
    Err(other) => eprintln!("Other error: {other}"),
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: the parser itself and the `Release` record.
- [`types`]: `ReleaseType`, `AnnounceSection`, `Episode`.
- [`io`]: config loading and JSON writers.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::OutputParams;
pub use core::parsing::ReleaseParser;
pub use core::release::Release;
pub use error::{Error, Result};
pub use types::{AnnounceSection, Episode, ReleaseType};

// Config and writers
pub use io::config::load_params;
pub use io::writers::json::{ErrorRecord, INSUFFICIENT_ARGUMENTS, render_error, render_release};

// High-level API re-exports
pub use api::{BatchReport, parse_release, parse_to_json, process_batch};
