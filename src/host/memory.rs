use log::trace;

use crate::const_table;
use crate::{Interpolation, Keyframe};

use super::{ContainerId, CurveId, HostError, ObjectId, SceneHost, SceneId};

/// Every mutation the host was asked to perform, in call order.
#[derive(Debug, PartialEq, Clone)]
pub enum HostOp {
    CreateObject {
        scene: SceneId,
        object: ObjectId,
        name: String,
    },
    AttachContainer {
        object: ObjectId,
        container: ContainerId,
        name: String,
    },
    AddChannel {
        container: ContainerId,
        curve: CurveId,
        name: String,
    },
    AddKeyframe {
        curve: CurveId,
        key: Keyframe,
    },
    SetInterpolation {
        curve: CurveId,
        mode: Interpolation,
    },
    Recompute {
        curve: CurveId,
    },
    Redraw,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CurveData {
    pub channel: String,
    pub code: u16,
    pub keyframes: Vec<Keyframe>,
    pub interpolation: Option<Interpolation>,
    pub recomputes: u32,
}

#[derive(Debug)]
struct Object {
    scene: SceneId,
    name: String,
}

#[derive(Debug)]
struct Container {
    object: ObjectId,
    name: String,
    curves: Vec<CurveId>,
}

/// In-process stand-in for the real host. Owns the scene graph it is asked
/// to build and journals every call so tests can assert on ordering.
#[derive(Debug)]
pub struct MemoryHost {
    scenes: u32,
    objects: Vec<Object>,
    containers: Vec<Container>,
    curves: Vec<CurveData>,
    pub journal: Vec<HostOp>,
    pub redraws: u32,
}

impl MemoryHost {
    pub fn new() -> Self {
        MemoryHost {
            scenes: 1,
            objects: vec![],
            containers: vec![],
            curves: vec![],
            journal: vec![],
            redraws: 0,
        }
    }

    /// The host's current scene.
    pub fn scene(&self) -> SceneId {
        SceneId(0)
    }

    pub fn curve(&self, id: CurveId) -> Option<&CurveData> {
        self.curves.get(id.0 as usize)
    }

    /// Names of the objects linked into `scene`, in creation order.
    pub fn object_names(&self, scene: SceneId) -> impl Iterator<Item = &str> + '_ {
        self.objects
            .iter()
            .filter(move |o| o.scene == scene)
            .map(|o| &o.name[..])
    }

    pub fn container(&self, id: ContainerId) -> Option<(ObjectId, &str)> {
        self.containers
            .get(id.0 as usize)
            .map(|c| (c.object, &c.name[..]))
    }

    pub fn container_curves(&self, id: ContainerId) -> Option<&[CurveId]> {
        self.containers.get(id.0 as usize).map(|c| &c.curves[..])
    }

    fn curve_mut(&mut self, id: CurveId) -> Result<&mut CurveData, HostError> {
        self.curves
            .get_mut(id.0 as usize)
            .ok_or(HostError::UnknownCurve(id))
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        MemoryHost::new()
    }
}

impl SceneHost for MemoryHost {
    fn create_object(&mut self, scene: SceneId, name: &str) -> Result<ObjectId, HostError> {
        if scene.0 >= self.scenes {
            return Err(HostError::UnknownScene(scene));
        }
        let id = ObjectId(self.objects.len() as u32);
        trace!("new object {:?} {:?}", id, name);
        self.objects.push(Object {
            scene,
            name: name.to_string(),
        });
        self.journal.push(HostOp::CreateObject {
            scene,
            object: id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn attach_curve_container(
        &mut self,
        object: ObjectId,
        name: &str,
    ) -> Result<ContainerId, HostError> {
        if object.0 as usize >= self.objects.len() {
            return Err(HostError::UnknownObject(object));
        }
        let id = ContainerId(self.containers.len() as u32);
        self.containers.push(Container {
            object,
            name: name.to_string(),
            curves: vec![],
        });
        self.journal.push(HostOp::AttachContainer {
            object,
            container: id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn add_channel(&mut self, container: ContainerId, name: &str) -> Result<CurveId, HostError> {
        let code = const_table::channel_code(name)
            .ok_or_else(|| HostError::UnknownChannel(name.to_string()))?;
        let id = CurveId(self.curves.len() as u32);
        self.containers
            .get_mut(container.0 as usize)
            .ok_or(HostError::UnknownContainer(container))?
            .curves
            .push(id);
        self.curves.push(CurveData {
            channel: name.to_string(),
            code,
            keyframes: vec![],
            interpolation: None,
            recomputes: 0,
        });
        self.journal.push(HostOp::AddChannel {
            container,
            curve: id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn add_keyframe(&mut self, curve: CurveId, key: Keyframe) -> Result<(), HostError> {
        self.curve_mut(curve)?.keyframes.push(key);
        self.journal.push(HostOp::AddKeyframe { curve, key });
        Ok(())
    }

    fn set_interpolation(
        &mut self,
        curve: CurveId,
        mode: Interpolation,
    ) -> Result<(), HostError> {
        self.curve_mut(curve)?.interpolation = Some(mode);
        self.journal.push(HostOp::SetInterpolation { curve, mode });
        Ok(())
    }

    fn recompute(&mut self, curve: CurveId) -> Result<(), HostError> {
        self.curve_mut(curve)?.recomputes += 1;
        self.journal.push(HostOp::Recompute { curve });
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), HostError> {
        self.redraws += 1;
        self.journal.push(HostOp::Redraw);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_unknown_handles() {
        let mut host = MemoryHost::new();
        assert!(host.add_keyframe(CurveId(0), Keyframe::default()).is_err());
        assert!(host.create_object(SceneId(9), "Thing").is_err());
        assert!(host
            .attach_curve_container(ObjectId(0), "ThingIpo")
            .is_err());
    }

    #[test]
    fn rejects_unknown_channel() {
        let mut host = MemoryHost::new();
        let scene = host.scene();
        let obj = host.create_object(scene, "Thing").unwrap();
        let ipo = host.attach_curve_container(obj, "ThingIpo").unwrap();
        match host.add_channel(ipo, "Wiggle") {
            Err(HostError::UnknownChannel(name)) => assert_eq!(name, "Wiggle"),
            other => panic!("expected an unknown channel error, got {:?}", other),
        }
    }

    #[test]
    fn container_tracks_curves() {
        let mut host = MemoryHost::new();
        let scene = host.scene();
        let obj = host.create_object(scene, "Thing").unwrap();
        let ipo = host.attach_curve_container(obj, "ThingIpo").unwrap();
        let x = host.add_channel(ipo, "LocX").unwrap();
        let y = host.add_channel(ipo, "LocY").unwrap();
        assert_eq!(host.container(ipo), Some((obj, "ThingIpo")));
        assert_eq!(host.container_curves(ipo), Some(&[x, y][..]));
        assert_eq!(host.curve(x).unwrap().code, 1);
        assert_eq!(host.curve(y).unwrap().code, 2);
        assert_eq!(host.object_names(scene).collect::<Vec<_>>(), ["Thing"]);
    }
}
