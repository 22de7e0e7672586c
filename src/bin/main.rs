//! Cube UV Packer CLI
//!
//! Plan UV atlas layouts for cube shapes described in a JSON file.

use clap::Parser;
use cube_uv_packer::{face_regions, pack_uv, AtlasConfig, CubeSet, FaceUv, ShapeDescriptor};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cube-uv-packer")]
#[command(author, version, about = "Plan UV atlas layouts for cube shapes", long_about = None)]
struct Cli {
    /// Input JSON file containing a list of shape descriptors
    #[arg(short, long)]
    input: PathBuf,

    /// Atlas width in cells
    #[arg(short, long)]
    width: i32,

    /// Atlas height in cells (omit for unbounded vertical growth)
    #[arg(long)]
    height: Option<i32>,

    /// Atlas height used for normalized face regions when --height is omitted
    #[arg(long, default_value = "64")]
    region_height: i32,

    /// Emit mirrored face layouts
    #[arg(long)]
    mirror: bool,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// One shape's placement in the report.
#[derive(Serialize)]
struct Placement {
    uv: (i32, i32),
    width: i32,
    depth: i32,
    height: i32,
    faces: BTreeMap<&'static str, FaceUv>,
}

#[derive(Serialize)]
struct Report {
    atlas_width: i32,
    atlas_height: i32,
    shapes: BTreeMap<String, Placement>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.width <= 0 {
        return Err("atlas width must be positive".into());
    }

    let data = fs::read_to_string(&cli.input)?;
    let descriptors: Vec<ShapeDescriptor> = serde_json::from_str(&data)?;
    println!("Planning {} shapes...", descriptors.len());

    let mut config = AtlasConfig::new(cli.width);
    if let Some(height) = cli.height {
        if height <= 0 {
            return Err("atlas height must be positive".into());
        }
        config = config.with_height(height);
    }

    let set = pack_uv(&descriptors, &config)?;

    // With unbounded height the normalized regions still need a denominator;
    // grow the declared region height until the layout fits under it.
    let atlas_height = cli.height.unwrap_or_else(|| {
        let used = used_height(&set);
        let mut height = cli.region_height.max(1);
        while height < used {
            height *= 2;
        }
        height
    });

    let mut shapes = BTreeMap::new();
    for (name, cube) in set.iter() {
        let faces = face_regions(cube, cli.width, atlas_height, cli.mirror)
            .into_iter()
            .map(|(face, face_uv)| (face.name(), face_uv))
            .collect();
        shapes.insert(
            name.to_string(),
            Placement {
                uv: cube.uv(),
                width: cube.width(),
                depth: cube.depth(),
                height: cube.height(),
                faces,
            },
        );
    }

    let report = Report {
        atlas_width: cli.width,
        atlas_height,
        shapes,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            println!("Wrote placements to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Lowest atlas row below every placed cube.
fn used_height(set: &CubeSet) -> i32 {
    set.cubes()
        .iter()
        .map(|cube| cube.uv().1 + cube.bound_size().1)
        .max()
        .unwrap_or(0)
}
