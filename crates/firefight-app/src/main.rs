//! firefight: headless mission runner.
//!
//! Plays scripted missions against the hostile AI, prints the combat
//! log, and folds the results into the campaign save.
//!
//! Usage:
//!   firefight [--scenario skirmish|crash-site|stronghold] [--seed N]
//!             [--missions N] [--save-dir PATH] [--json]

mod autoplay;

use std::path::PathBuf;
use std::process;

use firefight_campaign::{save_load, Achievement};
use firefight_core::enums::{MissionPhase, ScenarioId};
use firefight_core::state::{MissionReport, MissionSnapshot};
use firefight_sim::scenario;
use firefight_sim::{MissionConfig, MissionEngine};

/// Hard stop for a mission that will not resolve.
const MAX_TURNS: u32 = 100;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let scenario_id = parse_scenario(&args);
    let missions = parse_count(&args, "--missions", 1);
    let save_dir = parse_save_dir(&args);
    let as_json = args.iter().any(|a| a == "--json");

    let base_config = scenario::build_config(scenario_id);
    let base_seed = parse_seed(&args).unwrap_or(base_config.seed);

    let mut campaign = save_load::load_or_default(&save_dir);
    let mut reports = Vec::new();

    for index in 0..missions {
        let config = MissionConfig {
            seed: base_seed + index,
            ..base_config.clone()
        };
        println!("=== {} (seed {}) ===", scenario_label(scenario_id), config.seed);

        match play_mission(config) {
            Some(report) => {
                print_report(&report);
                for achievement in campaign.record_mission(&report) {
                    println!("  achievement unlocked: {}", achievement.title());
                }
                reports.push(report);
            }
            None => eprintln!("mission hit the {MAX_TURNS} turn limit; not recorded"),
        }
        println!();
    }

    println!(
        "campaign: {} played, {} won, {}/{} achievements",
        campaign.missions_played,
        campaign.missions_won,
        campaign.unlocked_count(),
        Achievement::ALL.len()
    );

    if let Err(e) = save_load::save(&save_dir, &campaign) {
        eprintln!("Error saving campaign: {e}");
        process::exit(1);
    }

    if as_json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding reports: {e}");
                process::exit(1);
            }
        }
    }
}

/// Run one mission to a verdict. `None` means the turn limit tripped.
fn play_mission(config: MissionConfig) -> Option<MissionReport> {
    let mut engine = MissionEngine::new(config);
    let mut snapshot = engine.tick();
    print_events(&snapshot);

    while snapshot.phase == MissionPhase::PlayerTurn && snapshot.clock.turn <= MAX_TURNS {
        let command = autoplay::next_command(&engine, &snapshot);
        engine.queue_command(command);
        snapshot = engine.tick();
        print_events(&snapshot);
    }

    engine.mission_report()
}

fn print_events(snapshot: &MissionSnapshot) {
    for event in &snapshot.events {
        println!("  {}", event.log_line());
    }
}

fn print_report(report: &MissionReport) {
    let verdict = if report.victory {
        "MISSION COMPLETE"
    } else {
        "MISSION FAILED"
    };
    println!("{verdict} in {} turns", report.turns);
    println!(
        "  {} soldiers standing, {} lost, {} hostiles down",
        report.soldiers_alive, report.soldiers_lost, report.hostiles_killed
    );
    println!(
        "  {} of {} shots connected ({} on reaction)",
        report.shots_hit, report.shots_fired, report.reaction_shots
    );
}

fn scenario_label(id: ScenarioId) -> &'static str {
    match id {
        ScenarioId::Skirmish => "Skirmish: First Contact",
        ScenarioId::CrashSite => "Crash Site: Downed Scout",
        ScenarioId::Stronghold => "Stronghold: Hold the Line",
    }
}

fn print_usage() {
    eprintln!(
        "firefight: headless tactical mission runner\n\
         \n\
         Options:\n\
         \n\
           --scenario <id>    Mission preset: skirmish, crash-site, stronghold\n\
                              (default: skirmish)\n\
           --seed <N>         Base RNG seed (default: the preset's seed)\n\
           --missions <N>     Missions to play back to back (default: 1)\n\
           --save-dir <path>  Campaign save directory (default: saves)\n\
           --json             Print mission reports as JSON when done\n\
         \n\
         Examples:\n\
         \n\
           firefight --scenario crash-site --seed 7\n\
           firefight --missions 5 --save-dir ~/.firefight\n"
    );
}

fn parse_scenario(args: &[String]) -> ScenarioId {
    for i in 0..args.len() {
        if args[i] == "--scenario" && i + 1 < args.len() {
            return match args[i + 1].as_str() {
                "skirmish" => ScenarioId::Skirmish,
                "crash-site" => ScenarioId::CrashSite,
                "stronghold" => ScenarioId::Stronghold,
                other => {
                    eprintln!("Unknown scenario: {other}");
                    print_usage();
                    process::exit(1);
                }
            };
        }
    }
    ScenarioId::Skirmish
}

fn parse_seed(args: &[String]) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            match args[i + 1].parse() {
                Ok(seed) => return Some(seed),
                Err(_) => {
                    eprintln!("Error: --seed takes a number, got {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    None
}

fn parse_count(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n.max(1);
            }
        }
    }
    default
}

fn parse_save_dir(args: &[String]) -> PathBuf {
    for i in 0..args.len() {
        if args[i] == "--save-dir" && i + 1 < args.len() {
            return PathBuf::from(&args[i + 1]);
        }
    }
    PathBuf::from("saves")
}
