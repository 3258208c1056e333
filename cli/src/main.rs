mod render;
mod sim;

use chrono::{Duration, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::io::Write;

use sproutwatch_core::{OverlayConfig, StatusWordClassifier, Tracker, WorldEvent, should_display};

use crate::sim::ScriptedWorld;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::new();
    println!("sproutwatch harness - `tick` to advance frames, `help` for commands");

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut app) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

struct App {
    tracker: Tracker,
    config: OverlayConfig,
    world: ScriptedWorld,
    visible: bool,
    clock: NaiveDateTime,
}

impl App {
    fn new() -> Self {
        Self {
            tracker: Tracker::new(),
            config: OverlayConfig::load_or_default(),
            world: ScriptedWorld::new(),
            visible: true,
            clock: chrono::Local::now().naive_local(),
        }
    }

    /// Advance the simulated clock and run the per-frame hook. One
    /// simulated second per frame keeps the 5 s refresh cadence at five
    /// ticks.
    fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.clock += Duration::seconds(1);
            self.tracker
                .tick(self.clock, &self.world, &StatusWordClassifier, &self.config);
        }
    }

    fn render(&self) -> String {
        if self.visible && !should_display(&self.config, &self.world) {
            return "(overlay auto-hidden: in combat)\n".to_string();
        }
        render::render(&self.tracker.snapshot(), &self.config, self.visible)
    }

    /// Persist after a settings change, the way the original saved on
    /// every config-window checkbox. A failed save is not worth more
    /// than a warning.
    fn save_config(&mut self) {
        self.config.sanitize();
        if let Err(err) = self.config.save() {
            tracing::warn!("[CONFIG] {err}");
        }
    }
}

#[derive(Parser)]
#[command(version, about = "sproutwatch demo harness")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the simulated clock and run the per-frame hook
    Tick {
        #[arg(default_value_t = 1)]
        frames: u32,
    },
    /// Print the overlay as of the last tick
    Show,
    /// Print the active configuration
    Config,
    /// Change a setting (persists, like the config window's checkboxes)
    Set {
        #[command(subcommand)]
        setting: Setting,
    },
    /// Toggle overlay visibility (the slash-command surface)
    Toggle,
    /// Simulate a zone transition
    Zone,
    /// Enter or leave simulated combat
    Combat { active: bool },
    /// Log the simulated character out
    Logout,
    /// Log the simulated character back in
    Login,
    Exit,
}

#[derive(Subcommand)]
enum Setting {
    /// Nearby scan radius in yalms (5-100)
    Radius { yalms: f32 },
    /// Row cap for the nearby view (5-50)
    MaxNearby { count: usize },
    /// Show the party section
    Party { on: bool },
    /// Show the nearby section
    Nearby { on: bool },
    /// Include players with the newcomer badge
    Newcomers { on: bool },
    /// Include players with the returner badge
    Returners { on: bool },
    /// Show job abbreviations on rows
    JobIcons { on: bool },
    /// Hide the overlay while in combat
    AutoHide { on: bool },
    /// Show the welcome line
    Welcome { on: bool },
}

fn respond(line: &str, app: &mut App) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting\n")?;
    args.insert(0, "sproutwatch".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    let Some(command) = cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Tick { frames } => {
            app.tick(frames);
            print!("{}", app.render());
        }
        Commands::Show => print!("{}", app.render()),
        Commands::Config => {
            println!(
                "zone: {} | radius: {}y | cap: {} | party: {} | nearby: {} | newcomers: {} | returners: {} | job icons: {} | auto-hide: {}",
                app.world.zone_name(),
                app.config.nearby_radius,
                app.config.max_nearby,
                app.config.show_party,
                app.config.show_nearby,
                app.config.show_newcomers,
                app.config.show_returners,
                app.config.show_job_icons,
                app.config.auto_hide_in_combat,
            );
        }
        Commands::Set { setting } => {
            apply_setting(&mut app.config, setting);
            app.save_config();
        }
        Commands::Toggle => {
            app.visible = !app.visible;
            println!("overlay {}", if app.visible { "shown" } else { "hidden" });
        }
        Commands::Zone => {
            app.world.change_zone();
            app.tracker.handle_event(WorldEvent::ZoneChanged);
            println!("entered {}", app.world.zone_name());
        }
        Commands::Combat { active } => app.world.set_in_combat(active),
        Commands::Logout => app.world.set_logged_in(false),
        Commands::Login => app.world.set_logged_in(true),
        Commands::Exit => return Ok(true),
    }
    Ok(false)
}

fn apply_setting(config: &mut OverlayConfig, setting: Setting) {
    match setting {
        Setting::Radius { yalms } => config.nearby_radius = yalms,
        Setting::MaxNearby { count } => config.max_nearby = count,
        Setting::Party { on } => config.show_party = on,
        Setting::Nearby { on } => config.show_nearby = on,
        Setting::Newcomers { on } => config.show_newcomers = on,
        Setting::Returners { on } => config.show_returners = on,
        Setting::JobIcons { on } => config.show_job_icons = on,
        Setting::AutoHide { on } => config.auto_hide_in_combat = on,
        Setting::Welcome { on } => config.show_welcome_message = on,
    }
}

fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}
