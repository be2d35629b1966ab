// cellbridge-cli - Diagnostic CLI
//
// Cross-platform (macOS, Linux, Windows) command-line harness for the
// CellBridge core: runs bring-up scenarios against the simulated modem and
// inspects the reporting and transport surfaces.

mod bridge;
mod config;

use anyhow::Result;
use cellbridge_core::{
    signal_level, Board, BringUpPhase, CellularBoard, ChannelId, ModemCapability,
    RegistrationOutcome, SignalLevel, SimModem, SimProfile, StatusDescriptor, TaskQueue,
    TransportFactory,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cellbridge")]
#[command(about = "CellBridge - Cellular bring-up diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a bring-up scenario against the simulated modem
    Bringup {
        /// Outcomes for successive registration waits, in order
        #[arg(long, value_enum, value_delimiter = ',', default_value = "success")]
        outcome: Vec<OutcomeArg>,
        /// Fire the material-ready signal this many times after the
        /// initial attempt
        #[arg(long, default_value_t = 0)]
        material_ready: u8,
        /// CSQ reading the simulated modem reports
        #[arg(long, default_value_t = 18)]
        csq: i32,
    },
    /// Print the board status descriptor
    Status {
        /// Pretty-print instead of the raw wire form
        #[arg(long)]
        pretty: bool,
        /// CSQ reading the simulated modem reports
        #[arg(long, default_value_t = 18)]
        csq: i32,
        /// Module name the simulated modem reports
        #[arg(long, default_value = "EC800M")]
        module_name: String,
        /// Carrier name the simulated modem reports
        #[arg(long, default_value = "TestCarrier")]
        carrier: String,
        /// IMEI the simulated modem reports
        #[arg(long, default_value = "123456789012345")]
        imei: String,
        /// ICCID the simulated modem reports
        #[arg(long, default_value = "89860000000000000000")]
        iccid: String,
    },
    /// Map a CSQ reading to the indicator bucket
    Signal {
        /// CSQ reading to map
        csq: i32,
        /// Treat the link as unregistered
        #[arg(long)]
        not_ready: bool,
    },
    /// Build each transport kind over a simulated link
    Transports {
        /// Logical channel for the secured transports
        #[arg(long, default_value_t = 0)]
        channel: u8,
    },
    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Set { key: String, value: String },
    Get { key: String },
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutcomeArg {
    Success,
    Pin,
    Reg,
}

impl From<OutcomeArg> for RegistrationOutcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::Success => RegistrationOutcome::Success,
            OutcomeArg::Pin => RegistrationOutcome::PinError,
            OutcomeArg::Reg => RegistrationOutcome::RegistrationError,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bringup {
            outcome,
            material_ready,
            csq,
        } => cmd_bringup(outcome, material_ready, csq),
        Commands::Status {
            pretty,
            csq,
            module_name,
            carrier,
            imei,
            iccid,
        } => cmd_status(
            pretty,
            SimProfile {
                module_name,
                imei,
                iccid,
                carrier,
                signal_quality: csq,
            },
        ),
        Commands::Signal { csq, not_ready } => cmd_signal(csq, not_ready),
        Commands::Transports { channel } => cmd_transports(channel),
        Commands::Config { action } => cmd_config(action),
    }
}

fn cmd_bringup(outcomes: Vec<OutcomeArg>, material_ready: u8, csq: i32) -> Result<()> {
    let config = config::Config::load()?;

    println!("{}", "Running bring-up against the simulated modem...".bold());
    println!();

    let modem = Arc::new(SimModem::new());
    modem.set_signal_quality(csq);
    for outcome in &outcomes {
        modem.push_outcome((*outcome).into());
    }

    let queue = Arc::new(TaskQueue::new());
    let board = CellularBoard::new(
        config.board(),
        modem.clone(),
        queue.clone(),
        Arc::new(bridge::PrintBridge),
    )?;

    board.start_network();

    for _ in 0..material_ready {
        modem.fire_material_ready();
    }
    let deferred = queue.run_pending();
    if deferred > 0 {
        println!(
            "  {} {} deferred attempt(s) executed",
            "✓".green(),
            deferred
        );
    }

    println!();
    let phase = board.bring_up_phase();
    let phase_line = if phase == BringUpPhase::Ready {
        phase.to_string().bright_green()
    } else if phase.is_failure() {
        phase.to_string().bright_red()
    } else {
        phase.to_string().normal()
    };
    println!("{}      {}", "Phase:".bold(), phase_line);
    println!(
        "{}       {}",
        "Icon:".bold(),
        render_level(board.network_state_icon())
    );
    println!(
        "{} {}",
        "Descriptor:".bold(),
        board.status_descriptor().to_json()?
    );

    Ok(())
}

fn cmd_status(pretty: bool, profile: SimProfile) -> Result<()> {
    let config = config::Config::load()?;

    let modem = SimModem::with_profile(profile);
    let descriptor = StatusDescriptor::collect(&config.board_type, &modem);

    if pretty {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("{}", descriptor.to_json()?);
    }

    Ok(())
}

fn cmd_signal(csq: i32, not_ready: bool) -> Result<()> {
    let level = signal_level(!not_ready, csq);
    let rendered = render_level(level);
    let line = if level == SignalLevel::Off {
        rendered.bright_red()
    } else {
        rendered.bright_green()
    };
    println!("csq {} -> {}", csq, line);
    Ok(())
}

fn cmd_transports(channel: u8) -> Result<()> {
    println!("{}", "Building transports over a simulated link...".bold());
    println!();

    let link: Arc<dyn ModemCapability> = Arc::new(SimModem::new());
    let factory = TransportFactory::new(&link, ChannelId(channel));

    let http = factory.create_http()?;
    let ws = factory.create_web_socket()?;
    let mqtt = factory.create_mqtt()?;
    let udp = factory.create_udp()?;

    println!("  {} {}", "✓".green(), http.kind());
    println!("  {} {} on {}", "✓".green(), ws.kind(), ws.channel());
    println!("  {} {} on {}", "✓".green(), mqtt.kind(), mqtt.channel());
    println!("  {} {} on {}", "✓".green(), udp.kind(), udp.channel());

    drop(http);
    drop(ws);
    drop(mqtt);
    drop(udp);
    drop(link);

    println!();
    match factory.create_http() {
        Err(err) => println!("  {} after link drop: {}", "✗".bright_red(), err),
        Ok(_) => println!("  {} link unexpectedly alive", "✗".bright_red()),
    }

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = config::Config::load()?;

    match action {
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} Set {} = {}", "✓".green(), key.bright_cyan(), value);
        }

        ConfigAction::Get { key } => {
            if let Some(value) = config.get(&key) {
                println!("{} = {}", key.bright_cyan(), value);
            } else {
                anyhow::bail!("Unknown config key: {}", key);
            }
        }

        ConfigAction::List => {
            println!("{}", "Configuration".bold());
            println!();
            for (key, value) in config.list() {
                println!("  {} = {}", key.bright_cyan(), value);
            }
        }
    }

    Ok(())
}

/// Render an indicator bucket as a bar glyph string plus its name.
fn render_level(level: SignalLevel) -> String {
    const GLYPHS: [&str; 4] = ["▂", "▄", "▆", "█"];
    let bars = level.bars() as usize;
    let mut out = String::new();
    for (i, glyph) in GLYPHS.iter().enumerate() {
        if i < bars {
            out.push_str(glyph);
        } else {
            out.push('.');
        }
    }
    format!("{} ({})", out, level)
}
