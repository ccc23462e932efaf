use clap::Parser;
use orrery::prelude::*;
use std::error::Error;
use std::path::PathBuf;

/// Print one frame of the orrery as YAML
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Simulated time in seconds
    #[arg(long, short, default_value_t = 0.0)]
    time: f64,

    /// Scene file to use instead of the built-in solar system
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Print body geometry instead of draw commands
    #[arg(long)]
    poses: bool,

    /// Also write the scene in use to this file, as a starting point for edits
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let system = match &args.scene {
        Some(path) => load_system_from_file(path)?,
        None => SolarSystem::default(),
    };

    if let Some(path) = &args.export {
        write_system_to_file(path, &system)?;
    }

    let stamp = Clock::at(Nanotime::secs_f64(args.time)).elapsed();
    let pose = evaluate(&system, stamp);

    let out = if args.poses {
        serde_yaml::to_string(&pose)?
    } else {
        let mut list = DisplayList::new();
        draw_pose(&system, &pose, &mut list);
        serde_yaml::to_string(&list)?
    };

    print!("{out}");
    Ok(())
}
