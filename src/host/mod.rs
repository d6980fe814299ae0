use thiserror::Error;

use std::io;

use super::{Interpolation, Keyframe};

mod blender;
mod memory;

pub use blender::BlenderScriptHost;
pub use memory::{CurveData, HostOp, MemoryHost};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SceneId(pub(crate) u32);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ObjectId(pub(crate) u32);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ContainerId(pub(crate) u32);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CurveId(pub(crate) u32);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no such scene: {0:?}")]
    UnknownScene(SceneId),
    #[error("no such object: {0:?}")]
    UnknownObject(ObjectId),
    #[error("no such curve container: {0:?}")]
    UnknownContainer(ContainerId),
    #[error("no such curve: {0:?}")]
    UnknownCurve(CurveId),
    #[error("{0:?} is not an animation channel")]
    UnknownChannel(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The slice of the host application's object and animation model this crate
/// drives. Handles are issued by the host and only mean something to the
/// host that issued them.
///
/// Curve evaluation, interpolation and rendering stay on the host's side of
/// this boundary.
pub trait SceneHost {
    /// Creates a named empty object linked into `scene`. Names are not
    /// required to be unique; calling this twice makes two objects.
    fn create_object(&mut self, scene: SceneId, name: &str) -> Result<ObjectId, HostError>;

    /// Creates a fresh animation-curve container and binds it to `object`.
    fn attach_curve_container(
        &mut self,
        object: ObjectId,
        name: &str,
    ) -> Result<ContainerId, HostError>;

    /// Adds a curve for a symbolic channel name such as `LocX`.
    fn add_channel(&mut self, container: ContainerId, name: &str) -> Result<CurveId, HostError>;

    /// Appends a keyframe. Insertion order is preserved; the host is not
    /// asked to sort or deduplicate.
    fn add_keyframe(&mut self, curve: CurveId, key: Keyframe) -> Result<(), HostError>;

    fn set_interpolation(
        &mut self,
        curve: CurveId,
        mode: Interpolation,
    ) -> Result<(), HostError>;

    /// Forces the host to rebuild the curve's cached evaluation data.
    fn recompute(&mut self, curve: CurveId) -> Result<(), HostError>;

    /// Requests a viewport redraw.
    fn redraw(&mut self) -> Result<(), HostError>;
}
