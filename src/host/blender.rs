use log::debug;

use crate::const_table;
use crate::{Interpolation, Keyframe};

use super::{ContainerId, CurveId, HostError, ObjectId, SceneHost, SceneId};

use std::io::{self, Write};

/// Renders the command stream as a script for the host's own Python API, to
/// be run from inside the host. The one scene it knows about is whatever
/// `Scene.GetCurrent()` resolves to at execution time.
#[derive(Debug, Default)]
pub struct BlenderScriptHost {
    lines: Vec<String>,
    objects: u32,
    containers: u32,
    curves: u32,
}

impl BlenderScriptHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The host's current scene.
    pub fn scene(&self) -> SceneId {
        SceneId(0)
    }

    pub fn script(&self) -> String {
        let mut out = String::from("import Blender\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn finish<W: Write>(&self, mut w: W) -> io::Result<()> {
        debug!("writing {} script line(s)", self.lines.len());
        w.write_all(self.script().as_bytes())
    }
}

fn quoted(name: &str) -> String {
    format!("'{}'", name.replace('\'', "\\'"))
}

impl SceneHost for BlenderScriptHost {
    fn create_object(&mut self, scene: SceneId, name: &str) -> Result<ObjectId, HostError> {
        if scene != self.scene() {
            return Err(HostError::UnknownScene(scene));
        }
        let id = ObjectId(self.objects);
        self.objects += 1;
        self.lines.push(format!(
            "obj_{} = Blender.Object.New('Empty', {})",
            id.0,
            quoted(name)
        ));
        self.lines
            .push(format!("Blender.Scene.GetCurrent().link(obj_{})", id.0));
        Ok(id)
    }

    fn attach_curve_container(
        &mut self,
        object: ObjectId,
        name: &str,
    ) -> Result<ContainerId, HostError> {
        if object.0 >= self.objects {
            return Err(HostError::UnknownObject(object));
        }
        let id = ContainerId(self.containers);
        self.containers += 1;
        self.lines.push(format!(
            "ipo_{} = Blender.Ipo.New('Object', {})",
            id.0,
            quoted(name)
        ));
        self.lines.push(format!("obj_{}.setIpo(ipo_{})", object.0, id.0));
        Ok(id)
    }

    fn add_channel(&mut self, container: ContainerId, name: &str) -> Result<CurveId, HostError> {
        if container.0 >= self.containers {
            return Err(HostError::UnknownContainer(container));
        }
        // the host rejects curve names it has no channel code for
        const_table::channel_code(name)
            .ok_or_else(|| HostError::UnknownChannel(name.to_string()))?;
        let id = CurveId(self.curves);
        self.curves += 1;
        self.lines.push(format!(
            "curve_{} = ipo_{}.addCurve({})",
            id.0,
            container.0,
            quoted(name)
        ));
        Ok(id)
    }

    fn add_keyframe(&mut self, curve: CurveId, key: Keyframe) -> Result<(), HostError> {
        if curve.0 >= self.curves {
            return Err(HostError::UnknownCurve(curve));
        }
        self.lines.push(format!(
            "curve_{}.addBezier(({}, {}))",
            curve.0, key.frame, key.value
        ));
        Ok(())
    }

    fn set_interpolation(
        &mut self,
        curve: CurveId,
        mode: Interpolation,
    ) -> Result<(), HostError> {
        if curve.0 >= self.curves {
            return Err(HostError::UnknownCurve(curve));
        }
        self.lines.push(format!(
            "curve_{}.setInterpolation('{}')",
            curve.0,
            mode.name()
        ));
        Ok(())
    }

    fn recompute(&mut self, curve: CurveId) -> Result<(), HostError> {
        if curve.0 >= self.curves {
            return Err(HostError::UnknownCurve(curve));
        }
        self.lines.push(format!("curve_{}.Recalc()", curve.0));
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), HostError> {
        self.lines.push("Blender.Redraw()".to_string());
        Ok(())
    }
}
