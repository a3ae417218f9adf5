use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    Allocation, AllocationStatus, CheckReport, CheckState, DEFAULT_AGE, EquityStatus, InputError,
    Mode, ModelEntry, NoteLevel, RawAllocation, RawEquityBreakdown, RiskLevel, describe_gap,
    model_table, run_check,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRiskLevel {
    Low,
    Mid,
    High,
}

impl From<CliRiskLevel> for RiskLevel {
    fn from(value: CliRiskLevel) -> Self {
        match value {
            CliRiskLevel::Low => RiskLevel::Low,
            CliRiskLevel::Mid => RiskLevel::Mid,
            CliRiskLevel::High => RiskLevel::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMode {
    Amount,
    Percent,
}

impl From<CliMode> for Mode {
    fn from(value: CliMode) -> Self {
        match value {
            CliMode::Amount => Mode::Amount,
            CliMode::Percent => Mode::Percent,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiRiskLevel {
    #[serde(alias = "conservative")]
    Low,
    #[serde(alias = "medium", alias = "moderate")]
    Mid,
    #[serde(alias = "aggressive")]
    High,
}

impl From<ApiRiskLevel> for CliRiskLevel {
    fn from(value: ApiRiskLevel) -> Self {
        match value {
            ApiRiskLevel::Low => CliRiskLevel::Low,
            ApiRiskLevel::Mid => CliRiskLevel::Mid,
            ApiRiskLevel::High => CliRiskLevel::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiMode {
    #[serde(alias = "amounts")]
    Amount,
    #[serde(alias = "percentage", alias = "pct")]
    Percent,
}

impl From<ApiMode> for CliMode {
    fn from(value: ApiMode) -> Self {
        match value {
            ApiMode::Amount => CliMode::Amount,
            ApiMode::Percent => CliMode::Percent,
        }
    }
}

/// Form fields arrive as text from query strings and as either text or
/// numbers from JSON bodies.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CheckPayload {
    age: Option<i64>,
    risk: Option<ApiRiskLevel>,
    mode: Option<ApiMode>,

    stocks: Option<FieldValue>,
    bonds: Option<FieldValue>,
    cash: Option<FieldValue>,
    other: Option<FieldValue>,

    #[serde(alias = "eqDomestic")]
    domestic: Option<FieldValue>,
    #[serde(alias = "eqGlobal")]
    global: Option<FieldValue>,
    #[serde(alias = "eqCrypto")]
    crypto: Option<FieldValue>,
}

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-check",
    about = "Compare an asset allocation against a reference model for your age and risk level"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check an allocation and print the verdict
    Check(CheckArgs),
    /// Print the reference model table
    Models {
        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },
    /// Serve the check over HTTP
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    #[arg(long, default_value_t = DEFAULT_AGE, allow_negative_numbers = true)]
    age: i64,
    #[arg(long, value_enum, help = "Risk tolerance; required for a verdict")]
    risk: Option<CliRiskLevel>,
    #[arg(
        long,
        value_enum,
        default_value_t = CliMode::Amount,
        help = "Whether the allocation flags are amounts or percentages"
    )]
    mode: CliMode,
    #[arg(long, allow_hyphen_values = true)]
    stocks: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    bonds: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    cash: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    other: Option<String>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Domestic share of the stocks sleeve in percent"
    )]
    domestic: Option<String>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Global share of the stocks sleeve in percent"
    )]
    global: Option<String>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Crypto share of the stocks sleeve in percent"
    )]
    crypto: Option<String>,
    #[arg(long, help = "Print JSON instead of a text report")]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResponse {
    allocation_status: AllocationStatus,
    report: CheckReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckErrorResponse {
    error: String,
    detail: InputError,
    allocation_status: AllocationStatus,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_state(args: &CheckArgs) -> CheckState {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let allocation = RawAllocation {
        stocks: text(&args.stocks),
        bonds: text(&args.bonds),
        cash: text(&args.cash),
        other: text(&args.other),
    };
    let mode: Mode = args.mode.into();

    let mut state = CheckState {
        age: args.age,
        risk: args.risk.map(Into::into),
        mode,
        equity: RawEquityBreakdown {
            domestic: text(&args.domestic),
            global: text(&args.global),
            crypto: text(&args.crypto),
        },
        ..CheckState::default()
    };
    match mode {
        Mode::Percent => state.percent = allocation,
        Mode::Amount => state.amount = allocation,
    }
    state
}

pub async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Check(args) => run_check_command(&args),
        Command::Models { json } => {
            let table = model_table();
            if json {
                let out = serde_json::to_string_pretty(&table)
                    .map_err(|e| format!("failed to serialize model table: {e}"))?;
                println!("{out}");
            } else {
                print!("{}", render_model_table(&table));
            }
            Ok(())
        }
        Command::Serve { port } => run_http_server(port)
            .await
            .map_err(|e| format!("server error: {e}")),
    }
}

fn run_check_command(args: &CheckArgs) -> Result<(), String> {
    let state = build_state(args);
    let report = state
        .calculate()
        .map_err(|e| rejection_message(&state.allocation_status(), e))?;
    if args.json {
        let response = CheckResponse {
            allocation_status: state.allocation_status(),
            report,
        };
        let out = serde_json::to_string_pretty(&response)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", render_text_report(&report));
    }
    Ok(())
}

/// The error text, plus how far off a percent allocation is when that is
/// what blocks the check.
fn rejection_message(status: &AllocationStatus, err: InputError) -> String {
    let gap = match (status, err) {
        (AllocationStatus::Percent(status), InputError::SumMismatch { .. }) => {
            status.gap.and_then(describe_gap)
        }
        _ => None,
    };
    match gap {
        Some(gap) => format!("{err}; {gap}"),
        None => err.to_string(),
    }
}

fn format_pct(value: f64) -> String {
    format!("{}%", crate::core::round1(value))
}

fn format_signed_pct(value: f64) -> String {
    let rounded = crate::core::round1(value);
    let sign = if rounded > 0.0 { "+" } else { "" };
    format!("{sign}{rounded}%")
}

fn allocation_row(label: &str, a: Allocation, fmt: fn(f64) -> String) -> String {
    format!(
        "{label:<8}stocks {:>7}  bonds {:>7}  cash {:>7}  other {:>7}\n",
        fmt(a.stocks),
        fmt(a.bonds),
        fmt(a.cash),
        fmt(a.other)
    )
}

/// Why the equity breakdown produced no crypto note, if it was filled in.
fn equity_breakdown_line(equity: &EquityStatus) -> Option<String> {
    if !equity.used || equity.sum_ok {
        return None;
    }
    if let Some(err) = equity.error {
        return Some(format!("Equity breakdown ignored: {err}"));
    }
    let sum = equity.sum?;
    let line = match equity.gap.and_then(describe_gap) {
        Some(gap) => format!("Equity breakdown adds up to {sum}% ({gap}), so no crypto note"),
        None => format!("Equity breakdown adds up to {sum}%, so no crypto note"),
    };
    Some(line)
}

fn render_text_report(report: &CheckReport) -> String {
    let mut out = format!(
        "Age {} (band {}), risk {}\n",
        report.age, report.age_band, report.risk
    );
    out.push_str(&allocation_row("Model", report.model, format_pct));
    out.push_str(&allocation_row("You", report.user, format_pct));
    out.push_str(&allocation_row("Diff", report.diff, format_signed_pct));
    out.push_str(&format!(
        "\nVerdict: {}\n{}\nNext step: {}\n",
        report.verdict.badge, report.verdict.text, report.verdict.action
    ));
    if let Some(line) = equity_breakdown_line(&report.equity) {
        out.push_str(&format!("\n{line}\n"));
    }
    if let Some(note) = &report.crypto_note {
        let label = match note.level {
            NoteLevel::Caution => "Caution",
            NoteLevel::Info => "Note",
        };
        out.push_str(&format!("\n{label}: {}\n", note.text));
    }
    out
}

fn render_model_table(table: &[ModelEntry]) -> String {
    let rows: String = table
        .iter()
        .map(|entry| {
            format!(
                "{:<6} {:<5} {:>6}  {:>5}  {:>4}\n",
                entry.age_band.label(),
                entry.risk.label(),
                entry.model.stocks,
                entry.model.bonds,
                entry.model.cash
            )
        })
        .collect();
    format!("band   risk  stocks  bonds  cash\n{rows}")
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/check", get(check_get_handler).post(check_post_handler))
        .route("/api/models", get(models_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "portfolio check HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/models");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn models_handler() -> Response {
    json_response(StatusCode::OK, model_table())
}

async fn check_get_handler(Query(payload): Query<CheckPayload>) -> Response {
    check_handler_impl(payload)
}

async fn check_post_handler(Json(payload): Json<CheckPayload>) -> Response {
    check_handler_impl(payload)
}

fn check_handler_impl(payload: CheckPayload) -> Response {
    match evaluate_payload(payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(response) => json_response(StatusCode::UNPROCESSABLE_ENTITY, response),
    }
}

fn evaluate_payload(payload: CheckPayload) -> Result<CheckResponse, CheckErrorResponse> {
    let args = check_args_from_payload(payload);
    let state = build_state(&args);
    let allocation_status = state.allocation_status();
    match run_check(&state.inputs()) {
        Ok(report) => {
            debug!(
                verdict = ?report.verdict.kind,
                band = %report.age_band,
                risk = %report.risk,
                "check completed"
            );
            Ok(CheckResponse {
                allocation_status,
                report,
            })
        }
        Err(detail) => {
            debug!(error = %detail, "check rejected");
            Err(CheckErrorResponse {
                error: rejection_message(&allocation_status, detail),
                detail,
                allocation_status,
            })
        }
    }
}

fn with_cache_control(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)).into_response())
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn check_args_from_json(json: &str) -> Result<CheckArgs, String> {
    let payload = serde_json::from_str::<CheckPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(check_args_from_payload(payload))
}

fn check_args_from_payload(payload: CheckPayload) -> CheckArgs {
    let mut args = default_check_args_for_api();

    if let Some(v) = payload.age {
        args.age = v;
    }
    if let Some(v) = payload.risk {
        args.risk = Some(v.into());
    }
    if let Some(v) = payload.mode {
        args.mode = v.into();
    }

    args.stocks = payload.stocks.map(FieldValue::into_text);
    args.bonds = payload.bonds.map(FieldValue::into_text);
    args.cash = payload.cash.map(FieldValue::into_text);
    args.other = payload.other.map(FieldValue::into_text);

    args.domestic = payload.domestic.map(FieldValue::into_text);
    args.global = payload.global.map(FieldValue::into_text);
    args.crypto = payload.crypto.map(FieldValue::into_text);

    args
}

fn default_check_args_for_api() -> CheckArgs {
    CheckArgs {
        age: DEFAULT_AGE,
        risk: None,
        mode: CliMode::Amount,
        stocks: None,
        bonds: None,
        cash: None,
        other: None,
        domestic: None,
        global: None,
        crypto: None,
        json: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AgeBand, Field, VerdictKind};
    use std::fs;
    use std::path::Path;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid command line")
    }

    fn check_args(args: &[&str]) -> CheckArgs {
        let mut full = vec!["portfolio-check", "check"];
        full.extend_from_slice(args);
        match parse_cli(&full).command {
            Command::Check(args) => args,
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn cli_defaults_to_amount_mode_and_default_age() {
        let args = check_args(&[]);
        assert_eq!(args.age, 35);
        assert_eq!(args.mode, CliMode::Amount);
        assert_eq!(args.risk, None);
        assert!(!args.json);
    }

    #[test]
    fn cli_passes_negative_values_through_to_validation() {
        let args = check_args(&["--risk", "mid", "--stocks", "100", "--bonds", "-5"]);
        let err = build_state(&args).calculate().expect_err("negative amount");
        assert_eq!(err, InputError::Negative { field: Field::Bonds });
    }

    #[test]
    fn cli_percent_mode_fills_percent_fields() {
        let args = check_args(&[
            "--age", "52", "--risk", "low", "--mode", "percent", "--stocks", "35", "--bonds",
            "45", "--cash", "20",
        ]);
        let state = build_state(&args);
        assert_eq!(state.percent, RawAllocation::new("35", "45", "20", ""));
        assert_eq!(state.amount, RawAllocation::default());

        let report = state.calculate().expect("valid inputs");
        assert_eq!(report.age_band, AgeBand::Age50To64);
        assert_eq!(report.verdict.kind, VerdictKind::WithinTolerance);
    }

    #[test]
    fn cli_parses_serve_and_models() {
        match parse_cli(&["portfolio-check", "serve", "--port", "9000"]).command {
            Command::Serve { port } => assert_eq!(port, 9000),
            other => panic!("expected serve, got {other:?}"),
        }
        match parse_cli(&["portfolio-check", "models", "--json"]).command {
            Command::Models { json } => assert!(json),
            other => panic!("expected models, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_risk() {
        assert!(Cli::try_parse_from(["portfolio-check", "check", "--risk", "extreme"]).is_err());
    }

    #[test]
    fn api_payload_accepts_numbers_and_strings() {
        let args = check_args_from_json(
            r#"{"age":61,"risk":"high","mode":"percent","stocks":70,"bonds":"25","cash":"5"}"#,
        )
        .expect("valid payload");
        assert_eq!(args.age, 61);
        assert_eq!(args.risk, Some(CliRiskLevel::High));
        assert_eq!(args.mode, CliMode::Percent);
        assert_eq!(args.stocks.as_deref(), Some("70"));
        assert_eq!(args.bonds.as_deref(), Some("25"));
        assert_eq!(args.other, None);
    }

    #[test]
    fn api_payload_accepts_aliases() {
        let args = check_args_from_json(
            r#"{"risk":"moderate","mode":"pct","eqDomestic":50,"eqGlobal":40,"eqCrypto":10}"#,
        )
        .expect("valid payload");
        assert_eq!(args.risk, Some(CliRiskLevel::Mid));
        assert_eq!(args.mode, CliMode::Percent);
        assert_eq!(args.crypto.as_deref(), Some("10"));
    }

    #[test]
    fn api_payload_defaults_when_empty() {
        let args = check_args_from_json("{}").expect("valid payload");
        assert_eq!(args.age, DEFAULT_AGE);
        assert_eq!(args.mode, CliMode::Amount);
        assert_eq!(args.risk, None);
    }

    #[test]
    fn api_payload_rejects_unknown_mode() {
        let err = check_args_from_json(r#"{"mode":"ratio"}"#).expect_err("bad mode");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn evaluate_payload_reports_missing_risk() {
        let args_json = r#"{"stocks":100}"#;
        let payload = serde_json::from_str::<CheckPayload>(args_json).expect("valid payload");
        let err = evaluate_payload(payload).expect_err("risk missing");
        assert_eq!(err.detail, InputError::RiskNotSelected);
        assert!(err.allocation_status.sum_ok());

        let json = serde_json::to_string(&err).expect("error should serialize");
        assert!(json.contains(r#""detail":{"kind":"riskNotSelected"}"#));
    }

    #[test]
    fn evaluate_payload_reports_field_errors() {
        let payload = serde_json::from_str::<CheckPayload>(
            r#"{"risk":"low","mode":"percent","stocks":"abc"}"#,
        )
        .expect("valid payload");
        let err = evaluate_payload(payload).expect_err("bad field");
        assert_eq!(
            err.detail,
            InputError::NotANumber {
                field: Field::Stocks
            }
        );
        assert_eq!(err.error, "stocks must be a number");
    }

    #[test]
    fn evaluate_payload_explains_a_short_percent_sum() {
        let payload = serde_json::from_str::<CheckPayload>(
            r#"{"risk":"mid","mode":"percent","stocks":60,"bonds":30}"#,
        )
        .expect("valid payload");
        let err = evaluate_payload(payload).expect_err("sum short of 100");
        assert_eq!(err.detail, InputError::SumMismatch { sum: 90.0 });
        assert_eq!(
            err.error,
            "percentages must add up to 100 (currently 90%); still missing 10%"
        );

        let json = serde_json::to_string(&err).expect("error should serialize");
        assert!(json.contains(r#""sum":90.0,"gap":10.0"#), "{json}");
    }

    #[test]
    fn cli_error_says_how_far_over_the_sum_is() {
        let args = check_args(&[
            "--risk", "low", "--mode", "percent", "--stocks", "60", "--bonds", "45",
        ]);
        let state = build_state(&args);
        let err = state.calculate().expect_err("sum over 100");
        assert_eq!(
            rejection_message(&state.allocation_status(), err),
            "percentages must add up to 100 (currently 105%); over by 5%"
        );
    }

    #[test]
    fn overflowing_amounts_are_rejected() {
        let payload = serde_json::from_str::<CheckPayload>(
            r#"{"risk":"mid","stocks":"1e308","bonds":"1e308"}"#,
        )
        .expect("valid payload");
        let err = evaluate_payload(payload).expect_err("total overflows");
        assert_eq!(err.detail, InputError::TotalTooLarge);
        assert!(!err.allocation_status.sum_ok());
    }

    #[test]
    fn evaluate_payload_converts_amounts() {
        let payload = serde_json::from_str::<CheckPayload>(
            r#"{"age":40,"risk":"mid","stocks":500000,"bonds":300000,"cash":200000,"other":0}"#,
        )
        .expect("valid payload");
        let response = evaluate_payload(payload).expect("valid check");
        assert_approx(response.report.user.stocks, 50.0);
        assert_approx(response.report.user.bonds, 30.0);
        assert_approx(response.report.user.cash, 20.0);
        // 65/25/10 model: stocks are short but no other class is over by more than 10.
        assert_approx(response.report.diff.stocks, -15.0);
        assert_eq!(
            response.report.verdict.kind,
            VerdictKind::MinorDeviation
        );
    }

    #[test]
    fn text_report_lists_model_user_and_diff() {
        let args = check_args(&[
            "--age", "30", "--risk", "mid", "--stocks", "85", "--bonds", "5", "--cash", "10",
            "--domestic", "60", "--global", "25", "--crypto", "15",
        ]);
        let report = build_state(&args).calculate().expect("valid inputs");
        let text = render_text_report(&report);
        assert!(text.contains("Age 30 (band 20-34), risk mid"));
        assert!(text.contains("+15%"));
        assert!(text.contains("Verdict: somewhat higher risk"));
        assert!(text.contains("Note: Your equities include crypto (15% of equities)"));
        assert!(!text.contains("Equity breakdown"));
    }

    #[test]
    fn text_report_explains_a_missing_crypto_note() {
        let args = check_args(&[
            "--risk", "mid", "--stocks", "70", "--bonds", "20", "--cash", "10", "--domestic",
            "50", "--global", "30", "--crypto", "15",
        ]);
        let report = build_state(&args).calculate().expect("valid inputs");
        let text = render_text_report(&report);
        assert!(
            text.contains("Equity breakdown adds up to 95% (still missing 5%), so no crypto note"),
            "{text}"
        );
        assert!(!text.contains("Note:"));

        let args = check_args(&["--risk", "mid", "--stocks", "1", "--crypto", "x"]);
        let report = build_state(&args).calculate().expect("valid inputs");
        assert!(render_text_report(&report).contains("Equity breakdown ignored: crypto must be a number"));
    }

    #[test]
    fn model_table_text_has_a_row_per_entry() {
        let text = render_model_table(&model_table());
        assert_eq!(text.lines().count(), 13);
        assert!(text.contains("65+"));
    }

    #[test]
    fn golden_snapshot_amount_check_json() {
        let payload = serde_json::from_str::<CheckPayload>(
            r#"{"age":40,"risk":"high","mode":"amount","stocks":600000,"bonds":250000,"cash":150000,"other":0,"domestic":50,"global":35,"crypto":15}"#,
        )
        .expect("valid payload");
        let response = evaluate_payload(payload).expect("valid check");
        let json = format!(
            "{}\n",
            serde_json::to_string(&response).expect("response should serialize")
        );

        assert_golden_snapshot("tests/golden/amount_check_high_risk.json", &json);
    }
}
