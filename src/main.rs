//! Toroidal Life CLI - Run a Game of Life grid from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use toroidal_life::{
    compute::{GridStats, LifeGrid},
    schema::{GridConfig, Seed},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a toroidal Game of Life grid from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to grid configuration file");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = GridConfig::from_path(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        log::info!("No seed file at {}, using default", seed_path.display());
        Seed::default()
    };

    let mut grid = LifeGrid::from_seed(&seed, &config).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {}", e);
        std::process::exit(1);
    });

    println!("Toroidal Life");
    println!("=============");
    println!("Grid: {}x{}", config.rows, config.columns);
    println!("Generations: {}", steps);
    println!();

    let initial_stats = GridStats::from_grid(&grid);
    println!("Initial state:");
    println!("  Population: {}", initial_stats.population);
    println!("  Density: {:.4}", initial_stats.density);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..steps {
        grid.advance();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = GridStats::from_grid(&grid);
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: population={}, {:.1} gen/s",
                i + 1,
                steps,
                stats.population,
                steps_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GridStats::from_grid(&grid);

    println!();
    println!("Final state:");
    println!("  Generation: {}", final_stats.generation);
    println!("  Population: {}", final_stats.population);
    println!("  Density: {:.4}", final_stats.density);
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        steps as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = GridConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
