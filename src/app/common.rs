use super::{app_helper::AppHelper, command::Command, EncodeCommand, EnumerateCommand};
use anyhow::{Context, Result};
use antler::{
    graphs::GadgetProblem,
    sat::{DefaultSatSolverFactory, ExternalSatSolverFactory, SatSolverFactory},
};
use clap::{Arg, ArgMatches};
use log::info;
use std::{fs, path::PathBuf};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Antler, a SAT-based enumerator of antenna gadget graphs.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(EncodeCommand::new()),
        Box::new(EnumerateCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_N_NODES: &str = "N_NODES";
pub(crate) const ARG_DEGREE: &str = "DEGREE";
pub(crate) const ARG_N_ANTENNAS: &str = "N_ANTENNAS";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_N_NODES)
            .short("n")
            .long("nodes")
            .empty_values(false)
            .multiple(false)
            .default_value("30")
            .help("the number of nodes of the graphs"),
        Arg::with_name(ARG_DEGREE)
            .short("k")
            .long("degree")
            .empty_values(false)
            .multiple(false)
            .default_value("3")
            .help("the regular degree of the graphs"),
        Arg::with_name(ARG_N_ANTENNAS)
            .short("c")
            .long("antennas")
            .empty_values(false)
            .multiple(false)
            .default_value("8")
            .help("the number of antenna nodes"),
    ]
}

pub(crate) fn problem_from_arg_matches(arg_matches: &ArgMatches<'_>) -> Result<GadgetProblem> {
    let parse_usize = |arg: &str, what: &str| {
        arg_matches
            .value_of(arg)
            .unwrap()
            .parse::<usize>()
            .with_context(|| format!("while parsing {}", what))
    };
    let n = parse_usize(ARG_N_NODES, "the number of nodes")?;
    let k = parse_usize(ARG_DEGREE, "the degree")?;
    let c = parse_usize(ARG_N_ANTENNAS, "the number of antennas")?;
    let problem = GadgetProblem::new(n, k, c)?;
    info!(
        "searching {}-regular graphs with {} nodes and {} antennas",
        problem.degree(),
        problem.n_nodes(),
        problem.n_antennas()
    );
    Ok(problem)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

const ARG_EXTERNAL_SAT_SOLVER: &str = "EXTERNAL_SAT_SOLVER";
const ARG_EXTERNAL_SAT_SOLVER_OPTIONS: &str = "EXTERNAL_SAT_SOLVER_OPTIONS";

pub(crate) fn external_sat_solver_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_EXTERNAL_SAT_SOLVER)
            .long("external-sat-solver")
            .empty_values(false)
            .multiple(false)
            .help("a path to an external SAT solver to replace the embedded one")
            .required(false),
        Arg::with_name(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
            .long("external-sat-solver-opt")
            .requires(ARG_EXTERNAL_SAT_SOLVER)
            .empty_values(false)
            .multiple(true)
            .help("a option to give to the external SAT solver")
            .required(false),
    ]
}

pub(crate) fn create_sat_solver_factory(
    arg_matches: &ArgMatches<'_>,
) -> Result<Box<dyn SatSolverFactory>> {
    let external_solver = arg_matches
        .value_of(ARG_EXTERNAL_SAT_SOLVER)
        .map(|s| s.to_string());
    let external_solver_options = arg_matches
        .values_of(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
        .map(|v| v.map(|o| o.to_string()).collect::<Vec<String>>())
        .unwrap_or_default();
    if let Some(s) = external_solver {
        let path = canonicalize_file_path(&s)?;
        info!("using {path:?} as the SAT solver");
        Ok(Box::new(ExternalSatSolverFactory::new(
            path.to_str().unwrap().to_string(),
            external_solver_options,
        )))
    } else {
        info!("using the default SAT solver");
        Ok(Box::new(DefaultSatSolverFactory))
    }
}
