use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use device_transport as transport;
use device_transport::{InfoSource, TransportError};
use devquery as dq;

mod config;
use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "dq",
    version,
    about = "Query and format compute device information",
    disable_help_subcommand = true
)]
struct Cli {
    /// Config file (JSON); defaults apply when it does not exist
    #[arg(long, default_value = "dq.json", global = true)]
    config: String,

    /// Print query metrics (Prometheus text format) before exiting
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a parameter name to its identifier
    Lookup {
        /// Name such as CL_DEVICE_NAME, NAME or name
        name: String,
    },
    /// List registry parameters, optionally only those with a name prefix
    List {
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List parameters whose name contains a substring
    Search {
        substr: String,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Format raw value bytes as the given parameter
    Format {
        /// Parameter name
        #[arg(long)]
        name: String,
        /// Raw bytes as hex, space-separated (e.g., "2a 00 00 00") or compact ("2a000000")
        #[arg(long, value_delimiter = ' ', num_args = 1..)]
        data: Vec<String>,
    },
    /// Query a device and print formatted parameter values
    Info {
        /// Parameters to show; every parameter the device answers when empty
        names: Vec<String>,
        /// YAML device profile to simulate
        #[arg(long)]
        profile: Option<String>,
        /// Mock device name when no profile is used
        #[arg(long, default_value = "mock0")]
        device: String,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List available devices
    DeviceList,
    /// Validate device profiles
    ProfileValidate {
        /// YAML file path
        #[arg(long)]
        file: Option<String>,
        /// Directory containing YAML profiles
        #[arg(long)]
        dir: Option<String>,
        /// Print JSON after validation
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Write a config file with default settings
    ConfigInit {
        #[arg(long, default_value = "dq.json")]
        path: String,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;
    let hub = dq::MetricsHub::new().map_err(anyhow::Error::msg)?;

    let res = match cli.command {
        Commands::Lookup { name } => lookup(&name, &hub),
        Commands::List { prefix, json } => list(prefix.as_deref(), json || cfg.json, &hub),
        Commands::Search { substr, json } => search(&substr, json || cfg.json),
        Commands::Format { name, data } => format_raw(&name, &data, &cfg, &hub),
        Commands::Info {
            names,
            profile,
            device,
            json,
        } => device_info(
            &names,
            profile.as_deref().or(cfg.profile.as_deref()),
            &device,
            json || cfg.json,
            &cfg,
            &hub,
        ),
        Commands::DeviceList => device_list(),
        Commands::ProfileValidate { file, dir, json } => {
            profile_validate(file.as_deref(), dir.as_deref(), json)
        }
        Commands::ConfigInit { path } => {
            Config::default().save(&path)?;
            println!("wrote {path}");
            Ok(())
        }
    };

    if cli.metrics {
        print!("{}", hub.encode_text());
    }
    res
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn print_row(p: &dq::ParamInfo) {
    println!("{}\t{}\t{}", p.name, p.id, p.description);
}

fn print_rows(rows: &[&dq::ParamInfo], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        for p in rows {
            print_row(p);
        }
    }
    Ok(())
}

fn lookup(name: &str, hub: &dq::MetricsHub) -> Result<()> {
    let found = dq::resolve_exact(name);
    hub.record_lookup(found.is_some());
    if let Some(p) = found {
        println!("{}\t{}\t{:?}\t{}", p.name, p.id, p.format, p.unit);
        println!("{}", p.description);
        return Ok(());
    }
    let candidates = dq::list_prefix(name);
    if candidates.is_empty() {
        return Err(anyhow::anyhow!("unknown parameter: {name}"));
    }
    println!("no exact match for '{name}'; parameters with that prefix:");
    for p in candidates {
        print_row(p);
    }
    Ok(())
}

fn list(prefix: Option<&str>, json: bool, hub: &dq::MetricsHub) -> Result<()> {
    let rows: Vec<&dq::ParamInfo> = match prefix {
        Some(p) => {
            let slice = dq::list_prefix(p);
            hub.record_lookup(!slice.is_empty());
            slice.iter().collect()
        }
        None => dq::info_map().iter().collect(),
    };
    print_rows(&rows, json)
}

fn search(substr: &str, json: bool) -> Result<()> {
    let rows: Vec<&dq::ParamInfo> = dq::matches(substr).collect();
    debug!(substr, n = rows.len(), "substring search");
    print_rows(&rows, json)
}

fn resolve_or_suggest(name: &str, hub: &dq::MetricsHub) -> Result<&'static dq::ParamInfo> {
    let found = dq::resolve_exact(name);
    hub.record_lookup(found.is_some());
    found.ok_or_else(|| {
        let close: Vec<&str> = dq::list_prefix(name).iter().map(|p| p.name).collect();
        if close.is_empty() {
            anyhow::anyhow!("unknown parameter: {name}")
        } else {
            anyhow::anyhow!("unknown parameter: {name} (did you mean: {})", close.join(", "))
        }
    })
}

fn format_raw(name: &str, data: &[String], cfg: &Config, hub: &dq::MetricsHub) -> Result<()> {
    let info = resolve_or_suggest(name, hub)?;
    let bytes = match data {
        [one] if one.trim().trim_start_matches("0x").len() > 2 => parse_hex_compact(one)?,
        _ => parse_hex_bytes(data)?,
    };
    let value = dq::format_value(info, &bytes, cfg.capacity)?;
    hub.query.values_formatted.inc();
    println!("{value}");
    Ok(())
}

fn device_info(
    names: &[String],
    profile: Option<&str>,
    device: &str,
    json: bool,
    cfg: &Config,
    hub: &dq::MetricsHub,
) -> Result<()> {
    let mut dev = match profile {
        Some(path) => {
            let p = dq::load_profile_file(path)?;
            info!(profile = %p.name, path, "using device profile");
            p.to_mock()?
        }
        None => transport::MockDevice::open(device)?,
    };

    let targets: Vec<&'static dq::ParamInfo> = if names.is_empty() {
        dq::info_map().iter().collect()
    } else {
        names
            .iter()
            .map(|n| resolve_or_suggest(n, hub))
            .collect::<Result<_>>()?
    };

    let ts = OffsetDateTime::now_utc();
    let mut records = Vec::new();
    for p in targets {
        let raw = match dev.query(p.id) {
            Ok(raw) => raw,
            Err(TransportError::InvalidParam(id)) if names.is_empty() => {
                debug!(name = p.name, %id, "device does not answer parameter");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        match dq::describe(p, &raw, cfg.capacity, Some(ts)) {
            Ok(rec) => {
                hub.query.values_formatted.inc();
                records.push(rec);
            }
            Err(e) => warn!(name = p.name, error = %e, "cannot format value"),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for r in &records {
            println!("{:width$}  {}", r.name, r.value);
        }
    }
    Ok(())
}

fn device_list() -> Result<()> {
    for d in transport::MockDevice::list()? {
        let dev = transport::MockDevice::open(&d.name)?;
        let n = dev.supported().map(|ids| ids.len()).unwrap_or(0);
        println!("{}\t{}\tparams={n}", d.name, d.driver);
    }
    Ok(())
}

fn profile_validate(file: Option<&str>, dir: Option<&str>, json: bool) -> Result<()> {
    match (file, dir) {
        (Some(f), None) => {
            let p = dq::load_profile_file(f)?;
            println!("ok: {} ({} values)", p.name, p.values.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&p)?);
            }
        }
        (None, Some(d)) => {
            let set = dq::load_profiles_dir(d)?;
            println!("ok: loaded {} profiles", set.profiles.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&set.profiles)?);
            }
        }
        _ => {
            return Err(anyhow::anyhow!("provide --file <path> or --dir <dir>"));
        }
    }
    Ok(())
}

fn parse_hex_bytes(items: &[String]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(items.len());
    for s in items {
        let t = s.trim();
        if t.is_empty() {
            continue;
        }
        let no_prefix = t.strip_prefix("0x").unwrap_or(t);
        let b = u8::from_str_radix(no_prefix, 16)
            .map_err(|e| anyhow::anyhow!("invalid hex byte '{t}': {e}"))?;
        out.push(b);
    }
    Ok(out)
}

fn parse_hex_compact(s: &str) -> Result<Vec<u8>> {
    let t = s.trim();
    let t = t.strip_prefix("0x").unwrap_or(t);
    if t.len() % 2 != 0 {
        return Err(anyhow::anyhow!("odd hex length"));
    }
    (0..t.len())
        .step_by(2)
        .map(|i| {
            let pair = t
                .get(i..i + 2)
                .ok_or_else(|| anyhow::anyhow!("invalid hex: {t}"))?;
            u8::from_str_radix(pair, 16).map_err(|e| anyhow::anyhow!("invalid hex: {e}"))
        })
        .collect()
}
