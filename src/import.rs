use log::{debug, info};
use thiserror::Error;

use crate::const_table::{LOC_X, LOC_Y};
use crate::host::{CurveId, HostError, ObjectId, SceneHost, SceneId};
use crate::read::{self, ReadError};
use crate::{Interpolation, Keyframe, Pin, TimeMap};

use std::io::{self, BufRead};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read the samples stream")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] ReadError),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Feeds a samples stream into two location curves on a fresh host object.
#[derive(Debug, PartialEq, Clone)]
pub struct Importer {
    pub object_name: String,
    pub container_name: String,
    pub time_map: TimeMap,
    pub pin: Pin,
    pub interpolation: Interpolation,
}

impl Default for Importer {
    fn default() -> Self {
        Importer {
            object_name: "RingMovement".to_string(),
            container_name: "RingIpo".to_string(),
            time_map: TimeMap::default(),
            pin: Pin::default(),
            interpolation: Interpolation::Linear,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ImportReport {
    pub samples: usize,
    pub object: ObjectId,
    pub curves: [CurveId; 2],
}

impl Importer {
    /// Runs the whole pipeline against `host`: anchor object, container, one
    /// curve per location axis, a keyframe per non-empty line in file order,
    /// then interpolation, recompute and a redraw.
    ///
    /// Any I/O, format or host error aborts the run. Whatever was already
    /// created in the host stays there; the host owns that state and there
    /// is no rollback.
    pub fn import<R, H>(
        &self,
        host: &mut H,
        scene: SceneId,
        input: R,
    ) -> Result<ImportReport, ImportError>
    where
        R: BufRead,
        H: SceneHost,
    {
        let object = host.create_object(scene, &self.object_name)?;
        let container = host.attach_curve_container(object, &self.container_name)?;
        let x = host.add_channel(container, LOC_X)?;
        let y = host.add_channel(container, LOC_Y)?;

        let mut samples = 0;
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let sample = read::sample_line(&line).map_err(|source| ReadError {
                line: idx + 1,
                source,
            })?;
            let frame = self.time_map.frame(sample.time);
            let pos = sample.pin(self.pin);
            host.add_keyframe(
                x,
                Keyframe {
                    frame,
                    value: pos.x,
                },
            )?;
            host.add_keyframe(
                y,
                Keyframe {
                    frame,
                    value: pos.y,
                },
            )?;
            samples += 1;
        }
        debug!("inserted {} keyframe(s) per curve", samples);

        for &curve in &[x, y] {
            host.set_interpolation(curve, self.interpolation)?;
            host.recompute(curve)?;
        }
        host.redraw()?;
        info!(
            "imported {} sample(s) into {:?}/{:?}",
            samples, self.object_name, self.container_name
        );

        Ok(ImportReport {
            samples,
            object,
            curves: [x, y],
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::host::{HostOp, MemoryHost};
    use crate::read::LineError;

    use std::io::Cursor;

    fn run(input: &str) -> (MemoryHost, Result<ImportReport, ImportError>) {
        run_with(Importer::default(), input)
    }

    fn run_with(
        importer: Importer,
        input: &str,
    ) -> (MemoryHost, Result<ImportReport, ImportError>) {
        let mut host = MemoryHost::new();
        let scene = host.scene();
        let res = importer.import(&mut host, scene, Cursor::new(input.to_string()));
        (host, res)
    }

    #[test]
    fn keyframe_per_line() {
        let (host, res) = run("2 0.1 0.2 0.0 0.0\n1 0.3 0.4 0.0 0.0\n0 0.5 0.6 0.0 0.0\n");
        let report = res.unwrap();
        assert_eq!(report.samples, 3);
        for &curve in &report.curves {
            assert_eq!(host.curve(curve).unwrap().keyframes.len(), 3);
        }
    }

    #[test]
    fn rescaled_time() {
        let (host, res) = run("3 1.5 2.5 9.9 9.9\n");
        let [x, y] = res.unwrap().curves;
        assert_eq!(
            host.curve(x).unwrap().keyframes,
            [Keyframe {
                frame: 31,
                value: 1.5,
            }]
        );
        assert_eq!(
            host.curve(y).unwrap().keyframes,
            [Keyframe {
                frame: 31,
                value: 2.5,
            }]
        );
    }

    #[test]
    fn file_order_kept() {
        // the solver emits the path goal-first; the curves keep that order
        let (host, res) = run("2 0.1 0.2 0 0\n1 0.3 0.4 0 0\n");
        let report = res.unwrap();
        let frames: Vec<_> = host
            .curve(report.curves[0])
            .unwrap()
            .keyframes
            .iter()
            .map(|k| k.frame)
            .collect();
        assert_eq!(frames, [21, 11]);
    }

    #[test]
    fn empty_input() {
        let (host, res) = run("");
        let report = res.unwrap();
        assert_eq!(report.samples, 0);
        for &curve in &report.curves {
            assert_eq!(host.curve(curve).unwrap().keyframes.len(), 0);
        }
        assert_eq!(host.redraws, 1);
    }

    #[test]
    fn aborts_on_short_line() {
        let (host, res) = run("0 0.1 0.2 0 0\n1 2\n2 0.5 0.6 0 0\n");
        match res {
            Err(ImportError::Format(e)) => {
                assert_eq!(e.line, 2);
                assert_eq!(e.source, LineError::Malformed);
            }
            other => panic!("expected a format error, got {:?}", other),
        }
        // the line before the bad one landed, nothing after it did
        assert_eq!(host.curve(CurveId(0)).unwrap().keyframes.len(), 1);
        assert_eq!(host.curve(CurveId(0)).unwrap().interpolation, None);
        assert_eq!(host.redraws, 0);
    }

    #[test]
    fn interpolation_set_once_after_inserts() {
        let (host, res) = run("0 0.1 0.2 0 0\n1 0.3 0.4 0 0\n");
        let report = res.unwrap();
        for &curve in &report.curves {
            let data = host.curve(curve).unwrap();
            assert_eq!(data.interpolation, Some(Interpolation::Linear));
            assert_eq!(data.recomputes, 1);
        }

        let is_key = |op: &HostOp| match op {
            HostOp::AddKeyframe { .. } => true,
            _ => false,
        };
        let is_set = |op: &HostOp| match op {
            HostOp::SetInterpolation { .. } => true,
            _ => false,
        };
        let last_key = host.journal.iter().rposition(|op| is_key(op)).unwrap();
        let first_set = host.journal.iter().position(|op| is_set(op)).unwrap();
        assert!(last_key < first_set);
        assert_eq!(host.journal.iter().filter(|op| is_set(op)).count(), 2);
        assert_eq!(host.journal.last(), Some(&HostOp::Redraw));
    }

    #[test]
    fn duplicate_runs_duplicate_objects() {
        let mut host = MemoryHost::new();
        let scene = host.scene();
        let importer = Importer::default();
        importer.import(&mut host, scene, Cursor::new("")).unwrap();
        importer.import(&mut host, scene, Cursor::new("")).unwrap();
        assert_eq!(
            host.object_names(scene)
                .filter(|n| *n == "RingMovement")
                .count(),
            2
        );
    }

    #[test]
    fn bottom_pin() {
        let importer = Importer {
            pin: Pin::Bottom,
            ..Default::default()
        };
        let (host, res) = run_with(importer, "3 1.5 2.5 9.9 8.8\n");
        let [x, y] = res.unwrap().curves;
        assert_eq!(host.curve(x).unwrap().keyframes[0].value, 9.9);
        assert_eq!(host.curve(y).unwrap().keyframes[0].value, 8.8);
    }

    #[test]
    fn custom_time_map() {
        let importer = Importer {
            time_map: TimeMap {
                scale: 1,
                offset: 0,
            },
            ..Default::default()
        };
        let (host, res) = run_with(importer, "3 1.5 2.5 0 0\n");
        let [x, _] = res.unwrap().curves;
        assert_eq!(host.curve(x).unwrap().keyframes[0].frame, 3);
    }
}
