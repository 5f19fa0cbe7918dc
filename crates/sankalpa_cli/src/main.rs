use std::error::Error;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use sankalpa_engine::{
    AnchorKind, HttpCalendarProvider, LocalComputation, PanchangaRequest, Sankalpa,
    SankalpaConfig, SunriseAnchor,
};
use sankalpa_ephem::AnalyticEphemeris;
use sankalpa_time::{CivilDate, TzOffset, centuries_since_j2000, date_to_jd_0h};
use sankalpa_vedic::{Ayanamsa, AyanamsaModel};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sankalpa", about = "Panchanga and sankalpam generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sankalpam declaration
    Sankalpam {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every panchanga element with its source
    Panchanga {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(long)]
        json: bool,
    },
    /// Derive elements locally at sunrise without contacting the provider
    Local {
        #[command(flatten)]
        place: PlaceArgs,
        /// Ayanamsa model: linear or lahiri
        #[arg(long)]
        ayanamsa: Option<AyanamsaModel>,
        #[arg(long)]
        json: bool,
    },
    /// Sunrise anchor for a date and place
    Sunrise {
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Ayanamsa offset at 0h UT of a date
    Ayanamsa {
        /// Civil date (YYYY-MM-DD), default today UTC
        #[arg(long)]
        date: Option<CivilDate>,
        /// Ayanamsa model: linear or lahiri
        #[arg(long, default_value = "linear")]
        model: AyanamsaModel,
    },
}

#[derive(Args)]
struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (e.g. 5.5, -6)
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    tz: f64,
    /// Local civil date (YYYY-MM-DD), default today at the place
    #[arg(long)]
    date: Option<CivilDate>,
    /// Place name forwarded to the provider
    #[arg(long)]
    location: Option<String>,
}

#[derive(Args)]
struct EngineArgs {
    /// Provider endpoint, overriding PANCHANGAM_API_URL
    #[arg(long)]
    api_url: Option<String>,
    /// Ayanamsa model: linear or lahiri
    #[arg(long)]
    ayanamsa: Option<AyanamsaModel>,
}

type Engine = Sankalpa<AnalyticEphemeris, HttpCalendarProvider>;

fn request_from(place: &PlaceArgs) -> Result<PanchangaRequest, Box<dyn Error>> {
    let mut request = PanchangaRequest::new(place.lat, place.lon, place.tz)?;
    if let Some(date) = place.date {
        request = request.with_date(date);
    }
    if let Some(label) = &place.location {
        request = request.with_location(label.clone());
    }
    Ok(request)
}

fn load_engine(
    api_url: Option<String>,
    ayanamsa: Option<AyanamsaModel>,
) -> Result<Engine, Box<dyn Error>> {
    let mut config = SankalpaConfig::from_env()?;
    if let Some(url) = api_url {
        config.provider_url = url;
    }
    if let Some(model) = ayanamsa {
        config.ayanamsa = model;
    }
    let ephemeris = AnalyticEphemeris::new(config.riseset());
    let provider = HttpCalendarProvider::from_config(&config)?;
    Ok(Sankalpa::new(ephemeris, provider, config)?)
}

fn print_anchor(anchor: &SunriseAnchor) {
    let kind = match anchor.kind {
        AnchorKind::Sunrise => "sunrise",
        AnchorKind::NoonFallback => "local noon (no sunrise found)",
    };
    println!("Anchor:     {} [{kind}]", anchor.instant.format("%Y-%m-%dT%H:%M:%SZ"));
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Sankalpam { place, engine, json } => {
            let engine = load_engine(engine.api_url, engine.ayanamsa)?;
            let report = engine.panchanga(&request_from(&place)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.sankalpam);
            }
        }

        Commands::Panchanga { place, engine, json } => {
            let engine = load_engine(engine.api_url, engine.ayanamsa)?;
            let report = engine.panchanga(&request_from(&place)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report.elements)?);
                return Ok(());
            }
            let e = &report.elements;
            println!("Date:       {} ({})", report.date, report.location_label);
            print_anchor(&report.anchor);
            println!("Samvatsara: {}", e.samvatsara);
            println!("Ayana:      {}", e.ayana);
            println!("Ritu:       {}", e.ritu);
            println!("Masa:       {}", e.masa);
            println!("Paksha:     {}", e.paksha);
            println!("Tithi:      {}", e.tithi);
            println!("Vara:       {}", e.vara);
            println!("Nakshatra:  {}", e.nakshatra);
            if let Some(yoga) = &e.yoga {
                println!("Yoga:       {yoga}");
            }
            if let Some(karana) = &e.karana {
                println!("Karana:     {karana}");
            }
            println!("Source:     {:?}", e.source);
        }

        Commands::Local {
            place,
            ayanamsa,
            json,
        } => {
            let engine = load_engine(None, ayanamsa)?;
            let report = engine.local_elements(&request_from(&place)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("Date:       {}", report.date);
            print_anchor(&report.anchor);
            match &report.local {
                LocalComputation::Success(e) => {
                    println!(
                        "Ayanamsa:   {:.4} deg ({})",
                        e.ayanamsa_deg,
                        engine.ayanamsa()
                    );
                    println!("Sun:        {} sayana, {} nirayana", e.sun_sayana, e.sun_nirayana);
                    println!("Moon:       {} sayana, {} nirayana", e.moon_sayana, e.moon_nirayana);
                    println!(
                        "Tithi:      {} {} (#{}, {:.2} deg in)",
                        e.tithi.paksha.name(),
                        e.tithi.tithi.name(),
                        e.tithi.index,
                        e.tithi.degrees_in_tithi
                    );
                    println!(
                        "Nakshatra:  {} (#{}, {:.2} deg in)",
                        e.nakshatra.nakshatra.name(),
                        e.nakshatra.number,
                        e.nakshatra.degrees_in_nakshatra
                    );
                    println!("Masa:       {} (amanta)", e.masa.masa.name());
                    println!("Yoga:       {} (#{})", e.yoga.yoga.name(), e.yoga.number);
                    println!("Karana:     {} (#{})", e.karana.karana.name(), e.karana.number);
                }
                LocalComputation::Unavailable { reason } => {
                    println!("Local derivation unavailable: {reason}");
                }
            }
        }

        Commands::Sunrise { place } => {
            let engine = load_engine(None, None)?;
            let request = request_from(&place)?;
            let anchor = engine.sunrise(&request);
            println!(
                "Search from {}",
                anchor.search_start.format("%Y-%m-%dT%H:%M:%SZ")
            );
            print_anchor(&anchor);
        }

        Commands::Ayanamsa { date, model } => {
            let date = date.unwrap_or_else(|| CivilDate::today_at(&Utc::now(), TzOffset::UTC));
            let t = centuries_since_j2000(date_to_jd_0h(date.naive()));
            println!("{model} ayanamsa at {date}: {:.6} deg", model.offset_deg(t));
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
