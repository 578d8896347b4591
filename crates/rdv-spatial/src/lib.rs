//! `rdv-spatial` — street network, area selection, and routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`network`]    | `StreetNetwork` (CSR + R-tree), builder, `EdgeLengthPolicy`    |
//! | [`path`]       | `Path` — an ordered node sequence                              |
//! | [`router`]     | `Router` trait, `DijkstraRouter`                               |
//! | [`checkpoint`] | `build_path` — origin → checkpoint → destination               |
//! | [`area`]       | `AreaPartition` — nodes inside / outside a drawn box           |
//! | [`lookup`]     | `CoordinateLookup` — node → position seam                      |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod area;
pub mod checkpoint;
pub mod error;
pub mod lookup;
pub mod network;
pub mod path;
pub mod router;


pub use area::AreaPartition;
pub use checkpoint::build_path;
pub use error::{SpatialError, SpatialResult};
pub use lookup::CoordinateLookup;
pub use network::{EdgeLengthPolicy, StreetNetwork, StreetNetworkBuilder};
pub use path::Path;
pub use router::{DijkstraRouter, Router};
