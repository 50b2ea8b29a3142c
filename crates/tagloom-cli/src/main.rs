use clap::Parser;
use tagloom_cli::{CliArgs, TagloomCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let result = match TagloomCli::from_args("tagloom", &args) {
        Ok(cli) => cli.run(args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
