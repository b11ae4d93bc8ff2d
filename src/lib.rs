#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sfx-rs` decodes the 3D models of Super FX era cartridges into vertex lists,
//! animation frames and face topologies ready to hand to a renderer.
//!
pub use sfx_internal::*;
