use clap::{Args, Parser, Subcommand, ValueEnum};
use neurometric::equations::Construct;
use neurometric::types::state::StateInput;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "neurometric",
    version,
    about = "Rule-based emotional calculus scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding neurometric.toml and .neurometric/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Fabricate scores with the seeded demo engine instead of computing them
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route free text to an equation and solve it
    Solve(SolveCommand),
    /// Score explicit inputs for one construct or rank all of them
    Score(ScoreCommand),
    /// Run the likelihood x severity / buffers risk model
    Calibrate(CalibrateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Md,
    Json,
}

#[derive(Args)]
pub struct SolveCommand {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// anxiety, frustration, regret, loneliness or hopelessness
    #[arg(long, value_parser = str::parse::<Construct>)]
    pub construct: Option<Construct>,
    #[command(flatten)]
    pub state: StateArgs,
    /// Rows to show in the ranking table
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args, Default)]
pub struct StateArgs {
    #[arg(long)]
    pub threat: Option<f64>,
    #[arg(long)]
    pub uncertainty: Option<f64>,
    #[arg(long)]
    pub coping: Option<f64>,
    #[arg(long)]
    pub expected: Option<f64>,
    #[arg(long)]
    pub received: Option<f64>,
    #[arg(long)]
    pub social_req: Option<f64>,
    #[arg(long)]
    pub social_obs: Option<f64>,
    #[arg(long)]
    pub judgment: Option<f64>,
    #[arg(long)]
    pub agency: Option<f64>,
    #[arg(long)]
    pub counterfactual: Option<f64>,
    #[arg(long)]
    pub reversibility: Option<f64>,
}

impl From<StateArgs> for StateInput {
    fn from(args: StateArgs) -> Self {
        Self {
            threat_prob: args.threat,
            uncertainty: args.uncertainty,
            coping: args.coping,
            reward_expected: args.expected,
            reward_received: args.received,
            social_req: args.social_req,
            social_obs: args.social_obs,
            judgment_weight: args.judgment,
            agency: args.agency,
            counterfactual_val: args.counterfactual,
            reversibility: args.reversibility,
        }
    }
}

#[derive(Args)]
pub struct CalibrateCommand {
    #[arg(long)]
    pub l_low: f64,
    #[arg(long)]
    pub l_mid: f64,
    #[arg(long)]
    pub l_high: f64,
    #[arg(long)]
    pub severity: f64,
    #[arg(long)]
    pub coping: f64,
    #[arg(long)]
    pub rescue: f64,
    /// 0 = feels permanent, 1 = clearly reversible
    #[arg(long)]
    pub reversibility: f64,
    /// 0 = no agency, 1 = high agency
    #[arg(long)]
    pub control: f64,
    /// Free-text description, used to tag a legal or health scenario
    #[arg(long)]
    pub context: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
