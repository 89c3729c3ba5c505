//! Kinfolk Tree
//!
//! Builds a viewer-centred family forest from flat relation assertions.
//!
//! The pipeline for one build:
//! - **Perspective**: each assertion is read from the viewer's side (forward
//!   or through its inverse) and re-gendered for the other party
//! - **Node factory**: one node per distinct person, viewer first
//! - **Linker**: parent/child edges per relation family, with placeholder
//!   nodes for implied parents and children
//! - **Root resolver**: shallowest parentless nodes, viewer as fallback
//! - **Traversal**: flat dedup walk, detached nodes, nested forest export
//!
//! Builds are pure and synchronous. Nothing is cached between calls; rebuild
//! from scratch whenever the assertion list changes.
//!
//! # Examples
//!
//! ```
//! use kinfolk_domain::{NoProfiles, PersonId, RelationAssertion};
//! use kinfolk_tree::{FamilyTreeBuilder, TreeConfig};
//!
//! let assertions = vec![
//!     RelationAssertion::new("a1", "U", "P1", "father"),
//!     RelationAssertion::new("a2", "U", "B1", "brother"),
//! ];
//! let builder = FamilyTreeBuilder::new(TreeConfig::default());
//! let tree = builder.build(&assertions, &PersonId::new("U"), &NoProfiles);
//!
//! for node in tree.flatten() {
//!     println!("{} {:?}", node.relation_label, node.level());
//! }
//! ```

#![warn(missing_docs)]

mod arena;
mod builder;
mod config;
mod error;
mod factory;
mod label;
mod linker;
mod node;
mod perspective;
mod roots;
mod stats;
mod traversal;
mod tree;

pub use arena::NodeArena;
pub use builder::FamilyTreeBuilder;
pub use config::TreeConfig;
pub use error::TreeError;
pub use label::{viewer_relation_label, viewer_relation_labels, RelationLabel};
pub use node::{NodeKind, PersonNode, TreeNode};
pub use perspective::ViewerEdge;
pub use stats::BuildStats;
pub use tree::FamilyTree;
