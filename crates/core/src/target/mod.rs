//! Target platform discovery.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │  TargetTree  │───▶│ ArtifactScanner  │───▶│  Reconciler  │───▶ Vec<ClasspathEntry>
//! │  (snapshot)  │    │ (sources/binary) │    │  (pairing)   │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//! ```

pub mod reconcile;
pub mod scanner;
pub mod tree;

pub use reconcile::Reconciler;
pub use scanner::{ArtifactScanner, ScanResult};
pub use tree::{ArtifactRecord, DiskProbe, FileProbe, TargetTree};
