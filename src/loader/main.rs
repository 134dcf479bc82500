use activity::{Activity, ActivityError, MetaValue, TraceRow};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use reqwest::header::CONTENT_TYPE;
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

mod trace;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/load";
const PROFILE_VELOCITY: i64 = 12_000;
const PROFILE_DISTANCE: i64 = 250_000;
const PROFILE_TICKS: i64 = 250_000;
const WHEELS: [&str; 2] = ["colson", "magic"];
const DIRECTIONS: [f64; 4] = [-90.0, 0.0, 90.0, 180.0];

#[derive(Parser, Debug)]
#[command(name = "loader", about = "Upload a simulated motion activity")]
struct Args {
    /// Where the activity is POSTed.
    #[arg(long, env = "ACTIVITY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "ACTIVITY_NAME", default_value = "First Test Run")]
    name: String,

    /// Seed for the simulated measurements, random if omitted.
    #[arg(long, env = "ACTIVITY_SEED")]
    seed: Option<u64>,

    /// JSON file holding the trace rows, replaces the recorded first run.
    #[arg(long, env = "ACTIVITY_TRACE")]
    trace: Option<PathBuf>,

    #[arg(long, env = "ACTIVITY_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the document instead of uploading it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Library failures carry their own code, anything else is an input error.
fn exit_code_for(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<ActivityError>()
        .map(ActivityError::exit_code)
        .unwrap_or(1)
}

async fn run(args: Args) -> Result<()> {
    let data = match &args.trace {
        Some(path) => load_trace(path)?,
        None => {
            debug!("Using the recorded first test run");
            trace::FIRST_TEST_RUN.to_vec()
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let activity = build_activity(&mut rng, &args.name, data);
    info!(
        "Built {:?} with {} samples, {} actual ticks",
        activity.name,
        activity.data.len(),
        activity.actual_ticks
    );

    let mut stdout = std::io::stdout().lock();
    if args.dry_run {
        writeln!(stdout, "{}", activity.to_json()?).map_err(ActivityError::from)?;
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .map_err(|source| ActivityError::Transport {
            endpoint: args.endpoint.clone(),
            source,
        })?;
    submit(&client, &args.endpoint, &activity, &mut stdout).await?;

    Ok(())
}

fn load_trace(path: &Path) -> Result<Vec<TraceRow>> {
    debug!("Reading trace rows from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read trace file {}", path.display()))?;
    parse_trace(&contents).with_context(|| format!("Invalid trace file {}", path.display()))
}

fn parse_trace(contents: &str) -> Result<Vec<TraceRow>> {
    let rows: Vec<TraceRow> = serde_json::from_str(contents)?;
    if rows.is_empty() {
        anyhow::bail!("no trace rows");
    }
    Ok(rows)
}

/// Uniform value in `[min, max)`. An empty or NaN range yields `min`.
fn random_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !(min < max) {
        return min;
    }
    if (max - min).is_finite() {
        return rng.gen_range(min..max);
    }

    // Span overflows f64, interpolate without forming it
    let t: f64 = rng.gen();
    let value = min * (1.0 - t) + max * t;
    if min <= value && value < max {
        value
    } else {
        min
    }
}

fn build_activity<R: Rng>(rng: &mut R, name: &str, data: Vec<TraceRow>) -> Activity {
    let mut activity = Activity::new(name, PROFILE_VELOCITY, PROFILE_DISTANCE);
    activity.data = data;

    // Both lists are non-empty consts
    let direction = DIRECTIONS.choose(rng).copied().unwrap_or_default();
    let wheel = WHEELS.choose(rng).copied().unwrap_or_default();

    let meta = &mut activity.meta;
    meta.insert("direction".into(), direction.into());
    meta.insert("wheel".into(), wheel.into());
    meta.insert("azimuth".into(), MetaValue::Float(0.0));
    meta.insert("dt".into(), MetaValue::Int(20));
    meta.insert("t1".into(), MetaValue::Int(200));
    meta.insert("t2".into(), MetaValue::Int(100));
    meta.insert("vProg".into(), MetaValue::Int(120_000));
    meta.insert("gyroStart".into(), random_range(rng, -4.0, 4.0).into());
    meta.insert("gyroEnd".into(), random_range(rng, -4.0, 4.0).into());

    activity.profile_ticks = PROFILE_TICKS;
    activity.actual_ticks = random_range(rng, 240_000.0, 250_000.0) as i64;
    activity.actual_distance = random_range(rng, 100.0, 108.0);

    activity
}

/// POSTs a JSON document and returns the response body.
async fn upload(
    client: &reqwest::Client,
    endpoint: &str,
    body: String,
) -> Result<String, ActivityError> {
    let transport = |source| ActivityError::Transport {
        endpoint: endpoint.to_string(),
        source,
    };

    info!("Uploading activity to {endpoint}..");
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    debug!("{endpoint} answered {status}");
    let body = response.text().await.map_err(transport)?;
    if !status.is_success() {
        return Err(ActivityError::Rejected {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

async fn submit<W: Write>(
    client: &reqwest::Client,
    endpoint: &str,
    activity: &Activity,
    out: &mut W,
) -> Result<(), ActivityError> {
    let json = activity.to_json()?;
    trace!("Activity document: {json}");
    let response = upload(client, endpoint, json).await?;
    writeln!(out, "{response}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::convert::Infallible;
    use tokio::sync::mpsc;
    use warp::{http::StatusCode, Filter};

    fn client(timeout: Duration) -> reqwest::Client {
        reqwest::Client::builder().timeout(timeout).build().unwrap()
    }

    fn seeded_activity(seed: u64) -> Activity {
        let mut rng = StdRng::seed_from_u64(seed);
        build_activity(&mut rng, "Test", trace::FIRST_TEST_RUN.to_vec())
    }

    #[test]
    fn test_random_range_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (min, max) in [(-4.0, 4.0), (100.0, 108.0), (240_000.0, 250_000.0), (0.0, 1e-9)] {
                let value = random_range(&mut rng, min, max);
                assert!(min <= value && value < max, "{value} outside [{min}, {max})");
            }
        }

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_range(&mut rng, 3.0, 3.0), 3.0);
        assert_eq!(random_range(&mut rng, 5.0, 1.0), 5.0);
        assert_eq!(random_range(&mut rng, 1.0, f64::NAN), 1.0);
        assert!(random_range(&mut rng, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_random_range_wider_than_f64() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = random_range(&mut rng, -f64::MAX, f64::MAX);
            assert!(value.is_finite() && value < f64::MAX, "{value} outside the range");
        }
    }

    #[test]
    fn test_build_activity() {
        let activity = seeded_activity(42);

        assert_eq!(activity.name, "Test");
        assert_eq!(activity.profile_velocity, 12_000);
        assert_eq!(activity.profile_distance, 250_000);
        assert_eq!(activity.profile_ticks, 250_000);
        assert!((240_000..250_000).contains(&activity.actual_ticks));
        assert!((100.0..108.0).contains(&activity.actual_distance));
        assert_eq!(activity.data.len(), 120);

        let meta = &activity.meta;
        assert_eq!(meta.len(), 9);
        match &meta["direction"] {
            MetaValue::Float(direction) => assert!(DIRECTIONS.contains(direction)),
            other => panic!("unexpected direction {other:?}"),
        }
        match &meta["wheel"] {
            MetaValue::Text(wheel) => assert!(WHEELS.contains(&wheel.as_str())),
            other => panic!("unexpected wheel {other:?}"),
        }
        for key in ["gyroStart", "gyroEnd"] {
            match &meta[key] {
                MetaValue::Float(gyro) => assert!((-4.0..4.0).contains(gyro)),
                other => panic!("unexpected {key} {other:?}"),
            }
        }
        assert_eq!(meta["dt"], MetaValue::Int(20));
        assert_eq!(meta["vProg"], MetaValue::Int(120_000));
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seeded_activity(9), seeded_activity(9));
    }

    #[test]
    fn test_recorded_run_shape() {
        let run = trace::FIRST_TEST_RUN;
        assert_eq!(run[0], [20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(run[119][0], 2400.0);
        assert!(run.windows(2).all(|pair| pair[1][0] - pair[0][0] == 20.0));
    }

    #[test]
    fn test_parse_trace() {
        let rows = parse_trace("[[20, 0, 0, 0, 0, 0, 0, 0], [40.0, 1, 2, 3, 4, 0.5, 0, 0]]").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][5], 0.5);

        assert!(parse_trace("[[20, 0, 0]]").is_err());
        assert!(parse_trace("[]").is_err());
        assert!(parse_trace("not json").is_err());
    }

    #[tokio::test]
    async fn test_submit_prints_response() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let route = warp::post()
            .and(warp::path("load"))
            .and(warp::header::exact("content-type", "application/json"))
            .and(warp::body::json())
            .map(move |body: Value| {
                let _ = tx.send(body);
                "OK"
            });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let activity = seeded_activity(1);
        let mut out = Vec::new();
        submit(
            &client(Duration::from_secs(5)),
            &format!("http://{addr}/load"),
            &activity,
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "OK\n");

        let received = rx.recv().await.unwrap();
        assert_eq!(received["name"], "Test");
        assert_eq!(received["data"].as_array().unwrap().len(), 120);
        assert_eq!(received["actualTicks"], activity.actual_ticks);
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let route = warp::any().map(|| {
            warp::reply::with_status("duplicate key", StatusCode::INTERNAL_SERVER_ERROR)
        });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let err = upload(
            &client(Duration::from_secs(5)),
            &format!("http://{addr}/load"),
            "{}".to_string(),
        )
        .await
        .unwrap_err();
        match &err {
            ActivityError::Rejected { status, body, .. } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "duplicate key");
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Grab a free port, then close it again
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let err = upload(
            &client(Duration::from_secs(5)),
            &format!("http://{addr}/load"),
            "{}".to_string(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ActivityError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_stalled_endpoint_times_out() {
        let route = warp::any().and_then(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, Infallible>("too late")
        });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let err = upload(
            &client(Duration::from_millis(200)),
            &format!("http://{addr}/load"),
            "{}".to_string(),
        )
        .await
        .unwrap_err();
        match err {
            ActivityError::Transport { source, .. } => assert!(source.is_timeout()),
            other => panic!("expected a timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exit_codes() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let transport = upload(
            &client(Duration::from_secs(5)),
            &format!("http://{addr}/load"),
            "{}".to_string(),
        )
        .await
        .unwrap_err();
        assert_eq!(exit_code_for(&anyhow::Error::from(transport)), 2);

        let serialization = ActivityError::Serialization {
            field: "meta.gyroEnd".into(),
            reason: "NaN".into(),
        };
        assert_eq!(exit_code_for(&anyhow::Error::from(serialization)), 3);

        let missing = std::env::temp_dir().join("activity-loader-missing-trace.json");
        let args = Args::try_parse_from([
            "loader",
            "--dry-run",
            "--trace",
            missing.to_str().unwrap(),
        ])
        .unwrap();
        let err = run(args).await.unwrap_err();
        assert!(format!("{err:#}").contains("Unable to read trace file"));
        assert_eq!(exit_code_for(&err), 1);
    }

    #[tokio::test]
    async fn test_dry_run_succeeds() {
        let args = Args::try_parse_from(["loader", "--dry-run", "--seed", "5"]).unwrap();
        assert!(args.dry_run);
        assert_eq!(args.seed, Some(5));
        run(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_serialization_error_skips_upload() {
        let mut activity = seeded_activity(3);
        activity.meta.insert("gyroEnd".into(), f64::NAN.into());

        // Nothing listens here, a request would surface as a transport error
        let mut out = Vec::new();
        let err = submit(
            &client(Duration::from_secs(1)),
            "http://127.0.0.1:9/load",
            &activity,
            &mut out,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ActivityError::Serialization { .. }));
        assert!(out.is_empty());
    }
}
