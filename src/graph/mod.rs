//! # Graph Construction and Rendering Module
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: walks package metadata from a root package and
//!   records each package's direct requirements exactly once
//! - **DependencyMap**: the resulting package -> requirements mapping
//!
//! ### Graph Rendering
//! - **GraphRenderer**: serializes a `DependencyMap` as PlantUML, DOT or
//!   Mermaid text, optionally highlighting requirement cycles
//!
//! ## Example
//!
//! ```
//! use depviz::graph::{DependencyGraphBuilder, GraphRenderer};
//! use depviz::metadata::{FetchFailure, MetadataSource};
//!
//! struct Canned;
//!
//! impl MetadataSource for Canned {
//!     fn fetch_metadata(&self, package: &str) -> Result<String, FetchFailure> {
//!         match package {
//!             "requests" => Ok("Name: requests\nRequires: urllib3, idna\n".to_string()),
//!             "urllib3" | "idna" => Ok(format!("Name: {package}\n")),
//!             _ => Err(FetchFailure::new(package, "unknown package")),
//!         }
//!     }
//! }
//!
//! # fn main() -> miette::Result<()> {
//! let mut builder = DependencyGraphBuilder::new(Canned);
//! builder.build_graph("requests", None)?;
//! assert_eq!(builder.dependencies().len(), 3);
//!
//! let text = GraphRenderer::default().render_plantuml_string(builder.dependencies())?;
//! assert!(text.contains(r#""requests" -> "urllib3";"#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{DependencyGraphBuilder, build_dependency_map};
pub use renderer::GraphRenderer;
pub use types::{DependencyMap, PackageNode};
