//! The binary entry point: loads configuration, generates a world, and
//! reports what came out.

use std::path::{Path, PathBuf};

use clap::Parser;
use glam::Vec3;
use tracing::{error, info};

use strata_config::{CliArgs, Config, WorldGenConfig};
use strata_voxel::VoxelType;
use strata_world::{World, WorldParams};

fn world_params(world: &WorldGenConfig) -> WorldParams {
    WorldParams {
        chunks_x: world.chunks_x,
        chunks_y: world.chunks_y,
        chunks_z: world.chunks_z,
        chunk_size: world.chunk_size,
        seed: world.seed,
        noise_scale: world.noise_scale,
        height_scale: world.height_scale,
    }
}

fn log_mesh_stats(world: &World) {
    let mut faces_by_type: Vec<(VoxelType, usize)> = VoxelType::ALL
        .iter()
        .map(|&ty| {
            let faces = world
                .chunks()
                .filter_map(|chunk| chunk.meshes().get(&ty))
                .map(|group| group.face_count())
                .sum();
            (ty, faces)
        })
        .collect();
    faces_by_type.retain(|(_, faces)| *faces > 0);

    for (ty, faces) in faces_by_type {
        info!(?ty, faces, "mesh group totals");
    }
}

fn run(config_dir: &Path, args: &CliArgs) -> Result<(), strata_config::ConfigError> {
    let mut config = Config::load_or_create(config_dir)?;
    config.apply_cli_overrides(args);
    strata_log::init_logging(Some(&config));

    let mut world = World::new(world_params(&config.world));
    world.generate();

    info!(
        chunks = world.chunk_count(),
        chunk_size = world.chunk_size(),
        seed = ?world.params().seed,
        "terrain ready"
    );
    if config.debug.log_mesh_stats {
        log_mesh_stats(&world);
    }

    // Poke the world the way an interaction source would: place a block on
    // the surface at the world center, then dig it back out.
    let extent_x = (config.world.chunks_x * config.world.chunk_size) as f32;
    let extent_z = (config.world.chunks_z * config.world.chunk_size) as f32;
    let center = Vec3::new(extent_x / 2.0, 0.0, extent_z / 2.0);
    let surface = world.get_height(center.x as i32, center.z as i32);
    let above = Vec3::new(center.x, surface.ceil() + 1.0, center.z);

    match world.create_voxel_at(above, VoxelType::Stone) {
        Ok(()) => {
            info!(pos = %above, "placed test voxel");
            if let Err(err) = world.destroy_voxel_at(above) {
                error!(%err, pos = %above, "failed to remove test voxel");
            }
        }
        Err(err) => error!(%err, pos = %above, "failed to place test voxel"),
    }

    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config"));

    if let Err(err) = run(&config_dir, &args) {
        eprintln!("startup failed: {err}");
        std::process::exit(1);
    }
}
