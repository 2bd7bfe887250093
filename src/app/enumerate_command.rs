use super::{cli_manager, command::Command, common};
use antler::{
    io::{AdjacencyTextWriter, DotWriter, SmtLibWriter},
    solvers::GadgetGraphEnumerator,
};
use anyhow::{Context, Result};
use clap::{AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use std::{fs, fs::File, path::PathBuf};

const CMD_NAME: &str = "enumerate";

const ARG_OUT: &str = "ARG_OUT";

pub(crate) struct EnumerateCommand;

impl EnumerateCommand {
    pub fn new() -> Self {
        EnumerateCommand
    }
}

impl<'a> Command<'a> for EnumerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Enumerates the gadget graphs of a problem")
            .setting(AppSettings::DisableVersion)
            .args(&common::problem_args())
            .arg(cli_manager::logging_level_cli_arg())
            .args(&common::external_sat_solver_args())
            .arg(
                Arg::with_name(ARG_OUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the output directory for the solution files")
                    .required(false),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let problem = common::problem_from_arg_matches(arg_matches)?;
        let out_dir = arg_matches
            .value_of(ARG_OUT)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                PathBuf::from(format!(
                    "graphs_k{}_n{}_c{}",
                    problem.degree(),
                    problem.n_nodes(),
                    problem.n_antennas()
                ))
            });
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("while creating the output directory {:?}", out_dir))?;
        info!("writing output files to {:?}", out_dir);
        let factory = common::create_sat_solver_factory(arg_matches)?;
        let enumerator = GadgetGraphEnumerator::new_with_sat_solver_factory(&problem, factory);
        let smt_path = out_dir.join(format!(
            "graph_k{}_n{}_c{}.smt2",
            problem.degree(),
            problem.n_nodes(),
            problem.n_antennas()
        ));
        let mut smt_file = File::create(&smt_path)
            .with_context(|| format!("while creating the SMT-LIB file {:?}", smt_path))?;
        SmtLibWriter::default().write(
            enumerator.var_store(),
            enumerator.assembled().constraints(),
            &mut smt_file,
        )?;
        info!("wrote the instance in SMT-LIB format to {:?}", smt_path);
        let dot_writer = DotWriter::default();
        let adjacency_writer = AdjacencyTextWriter::default();
        let n_solutions = enumerator.enumerate(&mut |index, matrix| {
            let dot_path = out_dir.join(format!("{}.dot", index));
            let mut dot_file = File::create(&dot_path)
                .with_context(|| format!("while creating the DOT file {:?}", dot_path))?;
            dot_writer.write(&problem, matrix, &mut dot_file)?;
            let adjacency_path = out_dir.join(format!("{}.adj", index));
            let mut adjacency_file = File::create(&adjacency_path).with_context(|| {
                format!("while creating the adjacency file {:?}", adjacency_path)
            })?;
            adjacency_writer.write(matrix, &mut adjacency_file)?;
            info!("wrote solution {} to {:?}", index, dot_path);
            Ok(())
        })?;
        info!("enumeration finished after finding {} graph(s)", n_solutions);
        Ok(())
    }
}
