use anyhow::Result;
use clap::Parser;
use torus_snake::app::GameApp;
use torus_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 24)]
    height: i32,

    /// Simulation speed in ticks per second
    #[arg(long, default_value_t = 20)]
    tick_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(
        cli.width >= 2 && cli.height >= 2,
        "grid must be at least 2x2 cells"
    );
    anyhow::ensure!(
        (1..=240).contains(&cli.tick_rate),
        "tick rate must be between 1 and 240"
    );

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        ticks_per_second: cli.tick_rate,
    };

    let mut app = GameApp::new(config)?;
    app.run().await
}
