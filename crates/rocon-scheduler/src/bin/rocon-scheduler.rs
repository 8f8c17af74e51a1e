use clap::{CommandFactory, FromArgMatches};

use rocon_scheduler::client::commands::{command_pool, command_run};
use rocon_scheduler::client::output::cli::CliOutput;
use rocon_scheduler::client::output::json::JsonOutput;
use rocon_scheduler::client::output::outputs::{Output, Outputs};
use rocon_scheduler::common::cli::{CommonOpts, RootOptions, SubCommand};
use rocon_scheduler::common::setup::setup_logging;

fn make_output(opts: &CommonOpts) -> Box<dyn Output> {
    match opts.output_mode {
        Outputs::Cli => Box::new(CliOutput::new(opts.colors)),
        Outputs::Json => Box::<JsonOutput>::default(),
    }
}

fn main() -> rocon_scheduler::Result<()> {
    let matches = RootOptions::command().get_matches();
    let top_opts = match RootOptions::from_arg_matches(&matches) {
        Ok(opts) => opts,
        Err(error) => error.exit(),
    };

    setup_logging(top_opts.common.debug);

    let output = make_output(&top_opts.common);

    let result = match top_opts.subcmd {
        SubCommand::Pool(opts) => command_pool(output.as_ref(), opts),
        SubCommand::Run(opts) => command_run(output.as_ref(), opts),
    };

    if let Err(e) = result {
        output.print_error(e.into());
        std::process::exit(1);
    }

    Ok(())
}
