use boompie::{api, config::Config};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a scaffold from a descriptor file")
                .arg(
                    Arg::new("descriptor")
                        .help("path to the descriptor file (.yaml, .yml or .toml)")
                        .required(true),
                )
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the scaffold will be created"),
                ),
        )
        .subcommand(
            Command::new("pick")
                .about("Picks a template from the catalog and generates it")
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the scaffold will be created"),
                )
                .arg(
                    Arg::new("templates")
                        .help("directory containing descriptor files")
                        .short('t')
                        .long("templates"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Lists the templates available in the catalog")
                .arg(
                    Arg::new("templates")
                        .help("directory containing descriptor files")
                        .short('t')
                        .long("templates"),
                ),
        )
        .subcommand(
            Command::new("api")
                .about("Creates a folder with the five conventional api files")
                .arg(Arg::new("name").help("base name for the folder and its files"))
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the folder will be created"),
                ),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("generate", args)) => handle_generate(args)?,
        Some(("pick", args)) => handle_pick(args)?,
        Some(("list", args)) => handle_list(args)?,
        Some(("api", args)) => handle_api(args)?,
        _ => unreachable!(),
    }

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

fn handle_generate(args: &ArgMatches) -> miette::Result<()> {
    let descriptor = args
        .get_one::<String>("descriptor")
        .expect("descriptor required");
    let destination = args.get_one::<String>("destination");

    api::generate_from_template(descriptor, destination.map(String::as_str))?;

    Ok(())
}

fn handle_pick(args: &ArgMatches) -> miette::Result<()> {
    let destination = args.get_one::<String>("destination");
    let templates = args.get_one::<String>("templates");

    let config = Config::resolve(templates.map(String::as_str))?;

    api::generate_default_template(&config, destination.map(String::as_str))?;

    Ok(())
}

fn handle_list(args: &ArgMatches) -> miette::Result<()> {
    let templates = args.get_one::<String>("templates");

    let config = Config::resolve(templates.map(String::as_str))?;

    api::list_templates(&config)?;

    Ok(())
}

fn handle_api(args: &ArgMatches) -> miette::Result<()> {
    let name = args.get_one::<String>("name");
    let destination = args.get_one::<String>("destination");

    api::generate_api_folder(name.map(String::as_str), destination.map(String::as_str))?;

    Ok(())
}
