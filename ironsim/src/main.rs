use anyhow::Result;
use clap::Parser;
use ironsim_core::{
    available_commands, execute_command, fire, set_speed, Command, GameEvent, GameSpeed, GameState,
    JsonlEventLog, MessageLog, NationId, ObserverRegistry, SimConfig, TechId,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Iron Dominion headless simulation driver", long_about = None)]
struct Args {
    /// Number of in-game days to simulate
    #[arg(short, long, default_value_t = 30)]
    days: u32,

    /// Game speed multiplier (1-3): ticks advanced per clock firing
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// RNG seed; the same seed replays the same campaign
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Declare war on a nation before the clock starts (repeatable)
    #[arg(long = "declare-war", value_name = "NATION")]
    declare_war: Vec<NationId>,

    /// Offer an alliance to a nation before the clock starts (repeatable)
    #[arg(long = "offer-alliance", value_name = "NATION")]
    offer_alliance: Vec<NationId>,

    /// Start researching a technology before the clock starts
    #[arg(long, value_name = "TECH")]
    research: Option<TechId>,

    /// Recruit this many infantry divisions before the clock starts
    #[arg(long, default_value_t = 0)]
    recruit: u32,

    /// Write the event stream as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    events_out: Option<PathBuf>,

    /// Print the commands legal at the end of the run
    #[arg(long, default_value_t = false)]
    list_commands: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let speed = GameSpeed::from_multiplier(args.speed)
        .ok_or_else(|| anyhow::anyhow!("speed must be 1, 2 or 3"))?;

    let config = SimConfig::default();
    let mut state = GameState::new(args.seed, &config);

    let message_log = Arc::new(MessageLog::new());
    let mut registry = ObserverRegistry::new();
    registry.register(Box::new(Arc::clone(&message_log)));
    if let Some(path) = &args.events_out {
        registry.register(Box::new(JsonlEventLog::create(path)?));
    }

    let mut events = vec![GameEvent::GameStarted {
        nation: state.player.nation.clone(),
    }];
    if speed != GameSpeed::One {
        set_speed(&mut state, speed, &mut events);
    }

    // Scripted opening moves, applied synchronously before the clock runs.
    let mut opening = Vec::new();
    for &target in &args.declare_war {
        opening.push(Command::declare_war(Some(target))?);
    }
    for &target in &args.offer_alliance {
        opening.push(Command::offer_alliance(Some(target))?);
    }
    if let Some(tech) = args.research {
        opening.push(Command::start_research(Some(tech))?);
    }
    for _ in 0..args.recruit {
        opening.push(Command::RecruitDivision);
    }

    for cmd in &opening {
        if let Err(e) = execute_command(&mut state, cmd, &mut events) {
            log::warn!("Command {:?} failed: {}", cmd, e);
            message_log.push_error(state.date, &e);
        }
    }
    registry.notify(state.date, &events);
    events.clear();

    log::info!(
        "Campaign start: {} as {}",
        state.date,
        state.player.nation
    );

    // Fixed-rate loop, run to completion without wall-clock sleeps.
    let total_ticks = u64::from(args.days) * u64::from(config.ticks_per_day);
    let mut last_logged_day = state.clock.current_day();
    while state.clock.current_tick < total_ticks {
        fire(&mut state, &mut events);
        registry.notify(state.date, &events);
        events.clear();

        let day = state.clock.current_day();
        if day != last_logged_day {
            last_logged_day = day;
            log::debug!(
                "{} | PP {:.1} | Manpower {} | XP {:.1}",
                state.date,
                state.player.political_power,
                state.player.manpower,
                state.player.army_xp
            );
            if config.checksum_frequency > 0 && day % u64::from(config.checksum_frequency) == 0 {
                log::debug!("Day {} checksum: {:016x}", day, state.checksum());
            }
        }
    }

    log::info!("Simulation finished at {}", state.date);

    print_summary(&state, &message_log);

    if args.list_commands {
        println!("--- Available commands ---");
        for command in available_commands(&state) {
            println!("{}", serde_json::to_string(&command)?);
        }
    }

    Ok(())
}

fn print_summary(state: &GameState, message_log: &MessageLog) {
    let player = &state.player;

    println!("=== Iron Dominion: {} ===", state.date);
    println!(
        "Political Power: {}  Civilian Factories: {}  Military Factories: {}",
        player.political_power.floor(),
        player.civilian_factories,
        player.military_factories
    );
    println!(
        "Manpower: {}  Army XP: {}",
        format_compact(player.manpower),
        player.army_xp.floor()
    );
    println!(
        "Military: {} infantry, {} panzer, {} air wings, {} naval fleets",
        player.military.infantry,
        player.military.panzer,
        player.military.air_wings,
        player.military.naval_fleets
    );

    match (player.research.active, player.research_progress_percent()) {
        (Some(tech), Some(percent)) => println!("Research: Researching {tech}: {percent}%"),
        _ => println!("Research: No active research"),
    }
    if !player.research.completed.is_empty() {
        let mut completed: Vec<_> = player.research.completed.iter().copied().collect();
        completed.sort();
        let names: Vec<String> = completed.iter().map(|t| t.to_string()).collect();
        println!("Completed: {}", names.join(", "));
    }

    let wars = player.wars_summary();
    if wars.is_empty() {
        println!("Wars: At peace");
    } else {
        println!("Wars: {}", wars.join("; "));
    }
    if !player.allies.is_empty() {
        let names: Vec<String> = player.allies.iter().map(|n| n.to_string()).collect();
        println!("Allies: {}", names.join(", "));
    }

    println!("--- Messages (newest first) ---");
    for message in message_log.messages() {
        println!("{:?}: {}", message.severity, message.text);
    }
}

/// Compact display formatting: 1.2M / 1.5K.
fn format_compact(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_200_000), "1.2M");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(0), "0");
    }
}
