use anyhow::{Context, Result};
use clap::Parser;
use terra_scene::cli::Cli;
use terra_scene::traits::{InputProvider, RenderBackend};
use terra_scene::{FrameClock, InputSnapshot, Key, Matrix4, SceneDescription};

/// Replays a canned input script: walk forward while the view slowly pans,
/// with a burst of running in the middle of each cycle.
struct ScriptedInput {
    frame: u64,
}

impl InputProvider for ScriptedInput {
    fn sample(&mut self) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new().with_cursor(self.frame as f32 * 0.5, 0.0);
        snapshot.set_key(Key::W, true);
        snapshot.set_key(Key::Control, self.frame % 120 >= 60);
        self.frame += 1;
        snapshot
    }
}

/// Stand-in rendering backend: counts draw calls and logs the matrices it
/// would upload.
#[derive(Default)]
struct ConsoleBackend {
    draws: usize,
}

impl RenderBackend for ConsoleBackend {
    fn draw(&mut self, model: &Matrix4, view: &Matrix4, projection: &Matrix4) {
        log::debug!(
            "draw {}: model translation ({:.2}, {:.2}, {:.2})",
            self.draws,
            model.get(3, 0),
            model.get(3, 1),
            model.get(3, 2),
        );
        log::trace!("view {:?} projection {:?}", view, projection);
        self.draws += 1;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let description = match &cli.scene {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scene file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing scene file {}", path.display()))?
        }
        None => SceneDescription::default(),
    };

    let mut scene = description.build();
    let mut input = ScriptedInput { frame: 0 };
    let mut backend = ConsoleBackend::default();

    log::info!(
        "simulating {} frames over {} entities",
        cli.frames,
        scene.entities().len()
    );

    for frame in FrameClock::new().take(cli.frames) {
        let snapshot = input.sample();
        scene.update(&frame, &snapshot);
        scene.render(&mut backend);

        if frame.number % 60 == 0 {
            let viewer = scene.viewer_transform();
            log::info!(
                "frame {:4}: viewer ({:.2}, {:.2}, {:.2}) yaw {:.1}",
                frame.number,
                viewer.position.x,
                viewer.position.y,
                viewer.position.z,
                viewer.rotation.y,
            );
        }
    }

    let viewer = scene.viewer_transform();
    println!(
        "final viewer position ({:.3}, {:.3}, {:.3})",
        viewer.position.x, viewer.position.y, viewer.position.z
    );
    if let Some(player) = scene.player_transform() {
        println!(
            "final player position ({:.3}, {:.3}, {:.3})",
            player.position.x, player.position.y, player.position.z
        );
    }
    println!("issued {} draw calls", backend.draws);

    Ok(())
}
