use std::path::PathBuf;

use clap::{command, Arg};

use builder::build;
use context::Context;
use history::GitHistory;

mod builder;
mod context;
mod history;
mod metadata;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args([Arg::new("essays_dir")
            .help("Directory path of essay HTML files")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("essays")])
        .get_matches();

    let essays_dir: &PathBuf = matches.get_one("essays_dir").unwrap();
    let ctx = Context::new(essays_dir.to_owned());
    let git = GitHistory::new(ctx.work_dir.clone());

    build(&ctx, &git)
}
