use super::{cli_manager, command::Command, common};
use antler::{
    encodings::assembler,
    formula::VarStore,
    io::{DimacsWriter, SmtLibWriter},
};
use anyhow::{Context, Result};
use clap::{AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use std::{fs::File, io::Write, str::FromStr};
use strum_macros::EnumString;

const CMD_NAME: &str = "encode";

const ARG_FORMAT: &str = "ARG_FORMAT";
const ARG_OUT: &str = "ARG_OUT";

#[derive(Debug, Clone, Copy, EnumString)]
#[strum(serialize_all = "lowercase")]
enum EncodingFormat {
    Smt2,
    Dimacs,
}

pub(crate) struct EncodeCommand;

impl EncodeCommand {
    pub fn new() -> Self {
        EncodeCommand
    }
}

impl<'a> Command<'a> for EncodeCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Encodes a problem without solving it")
            .setting(AppSettings::DisableVersion)
            .args(&common::problem_args())
            .arg(cli_manager::logging_level_cli_arg())
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["smt2", "dimacs"])
                    .default_value("smt2")
                    .help("the output format of the encoding"),
            )
            .arg(
                Arg::with_name(ARG_OUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the output file for the encoding")
                    .required(false),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let problem = common::problem_from_arg_matches(arg_matches)?;
        let format = EncodingFormat::from_str(arg_matches.value_of(ARG_FORMAT).unwrap()).unwrap();
        let mut store = VarStore::new();
        let assembled = assembler::assemble(&problem, &mut store);
        info!(
            "assembled {} constraint(s) over {} variable(s)",
            assembled.constraints().len(),
            store.len()
        );
        let out = arg_matches.value_of(ARG_OUT);
        match format {
            EncodingFormat::Smt2 => {
                let mut writer = writer_for(out)?;
                SmtLibWriter::default().write(&store, assembled.constraints(), writer.as_mut())
            }
            EncodingFormat::Dimacs => {
                let mut instance_writer = writer_for(out)?;
                let mut mapping_writer: Box<dyn Write> = match out {
                    Some(path) => {
                        let mapping_path = format!("{}.map", path);
                        info!("writing the variable mapping to {:?}", mapping_path);
                        Box::new(File::create(&mapping_path).with_context(|| {
                            format!("while creating the mapping file {:?}", mapping_path)
                        })?)
                    }
                    None => {
                        warn!("no output file given; the variable mapping is not written");
                        Box::new(std::io::sink())
                    }
                };
                DimacsWriter::default().write(
                    &store,
                    assembled.constraints(),
                    instance_writer.as_mut(),
                    mapping_writer.as_mut(),
                )
            }
        }
    }
}

fn writer_for(out: Option<&str>) -> Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            info!("writing the encoding to {:?}", path);
            Ok(Box::new(File::create(path).with_context(|| {
                format!("while creating the output file {:?}", path)
            })?))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
