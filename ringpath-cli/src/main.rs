use anyhow::{Context, Result};
use log::*;
use structopt::StructOpt;

use ringpath::host::BlenderScriptHost;
use ringpath::import::Importer;
use ringpath::Pin;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

mod descriptor;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ringpath",
    about = "turns solved ring paths into host animation curves"
)]
struct Opt {
    /// Samples file produced by the path solver
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Where to write the generated host script
    #[structopt(parse(from_os_str))]
    output: PathBuf,

    /// Name of the anchor object to create
    #[structopt(long)]
    object: Option<String>,

    /// Name of the curve container attached to the object
    #[structopt(long)]
    container: Option<String>,

    /// Which pin drives the curves (`top` or `bottom`)
    #[structopt(long)]
    pin: Option<Pin>,

    /// Host frames per sample step
    #[structopt(long)]
    time_scale: Option<i32>,

    /// Host frame assigned to sample step zero
    #[structopt(long)]
    time_offset: Option<i32>,

    /// Descriptor file overriding the defaults
    #[structopt(long, parse(from_os_str), default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    info!("starting up");

    let opt = Opt::from_args();

    let config = match fs::read_to_string(&opt.config) {
        Ok(data) => match toml::from_str(&data) {
            Ok(e) => e,
            Err(e) => {
                error!("failed to parse {}: {}", opt.config.display(), e);
                Default::default()
            }
        },
        // the descriptor is optional
        Err(_) => descriptor::Config::default(),
    };
    debug!("{:?}", config);

    let mut importer = Importer::default();
    if let Some(name) = opt.object.or(config.object_name) {
        importer.object_name = name;
    }
    if let Some(name) = opt.container.or(config.container_name) {
        importer.container_name = name;
    }
    if let Some(scale) = opt.time_scale.or(config.time_scale) {
        importer.time_map.scale = scale;
    }
    if let Some(offset) = opt.time_offset.or(config.time_offset) {
        importer.time_map.offset = offset;
    }
    let config_pin = match config.pin {
        Some(ref s) => Some(s.parse::<Pin>()?),
        None => None,
    };
    if let Some(pin) = opt.pin.or(config_pin) {
        importer.pin = pin;
    }

    let file = File::open(&opt.input).context("failed to open samples file")?;

    let mut host = BlenderScriptHost::new();
    let scene = host.scene();
    let report = importer
        .import(&mut host, scene, BufReader::new(file))
        .context("import failed")?;

    info!(
        "imported {} sample(s), {} keyframe(s) total",
        report.samples,
        report.samples * report.curves.len()
    );

    let out = File::create(&opt.output).context("failed to create script file")?;
    host.finish(out)?;

    Ok(())
}
