//! Scene module
//!
//! Owned scene-graph nodes, the template model placed by the user, the
//! permanent scene that receives placed instances, and the reticle
//! indicator entity.

mod transform;
mod node;
mod model_template;
mod scene;
mod reticle;

pub use transform::Transform;
pub use node::{Node, AnimationState, Cloneable};
pub use model_template::{ModelTemplate, ModelConfig, LoadStatus};
pub use scene::{Scene, NodeKey};
pub use reticle::{Reticle, ReticleConfig};
