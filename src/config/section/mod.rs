//! Configuration section definitions.
//!
//! Each module corresponds to a section in the editor config file:
//!
//! | Module      | TOML Section   | Purpose                                   |
//! |-------------|----------------|-------------------------------------------|
//! | `export`    | `[export]`     | Download file naming                      |
//! | `normalize` | `[normalize]`  | Id prefix, shape tags, viewBox measuring  |
//! | `palette`   | `[palette]`    | Default picker color                      |

mod export;
mod normalize;
mod palette;

pub use export::ExportConfig;
pub use normalize::{DEFAULT_SHAPE_TAGS, NormalizeConfig};
pub use palette::{DEFAULT_COLOR, PaletteConfig};
