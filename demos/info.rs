use anyhow::*;
use log::*;
use structopt::StructOpt;

use cgmath::Point2;
use ringpath::read;
use ringpath::Pin;

use std::fs;
use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "info", about = "prints statistics about a path samples file")]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Pin to report bounds for (`top` or `bottom`)
    pin: Option<Pin>,
}

fn main() -> Result<()> {
    env_logger::init();

    info!("starting up");

    let opt = Opt::from_args();

    let data = fs::read_to_string(&opt.input).context("failed to open samples file")?;
    let samples = read::samples(&data)?;

    println!("{} sample(s)", samples.len());
    if samples.is_empty() {
        return Ok(());
    }

    let min_t = samples.iter().map(|s| s.time).min().unwrap();
    let max_t = samples.iter().map(|s| s.time).max().unwrap();
    println!("time range: {}..={}", min_t, max_t);

    let sorted = samples.windows(2).all(|w| w[0].time <= w[1].time);
    println!("ordered by time: {}", if sorted { "yes" } else { "no" });

    let pin = opt.pin.unwrap_or(Pin::Top);
    let first = samples[0].pin(pin);
    let (lo, hi) = samples
        .iter()
        .map(|s| s.pin(pin))
        .fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
    println!(
        "{:?} pin bounds: ({}, {}) .. ({}, {})",
        pin, lo.x, lo.y, hi.x, hi.y
    );

    Ok(())
}
